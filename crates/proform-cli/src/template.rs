use std::path::Path;

use anyhow::Context;
use proform_form::{FormController, ListKind};

/// Render a starter draft with one blank entry in each list, so the file
/// shows the full shape a submission needs.
pub(crate) fn run_template(out: Option<&Path>) -> anyhow::Result<()> {
    let mut controller = FormController::new();
    for kind in [
        ListKind::Services,
        ListKind::WhyChooseUs,
        ListKind::Achievements,
    ] {
        controller.add_item(kind);
    }

    let rendered =
        serde_yaml::to_string(controller.profile()).context("rendering starter draft")?;

    match out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing starter draft to {}", path.display()))?;
            println!("starter draft written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_draft_round_trips_through_yaml() {
        let mut controller = FormController::new();
        for kind in [
            ListKind::Services,
            ListKind::WhyChooseUs,
            ListKind::Achievements,
        ] {
            controller.add_item(kind);
        }
        let rendered = serde_yaml::to_string(controller.profile()).unwrap();
        assert!(rendered.contains("companyName"));
        assert!(rendered.contains("whyChooseUs"));
        assert!(rendered.contains("statement"));

        let parsed: proform_core::CompanyProfile = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(&parsed, controller.profile());
    }
}
