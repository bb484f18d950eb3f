//! Loading company profile drafts from disk.
//!
//! Drafts are the CLI's input surface and the hand-off format for an
//! interrupted submission: a `CompanyProfile` serialized as YAML (default)
//! or JSON, selected by file extension.

use std::path::Path;

use crate::profile::CompanyProfile;
use crate::ConfigError;

/// Load a company profile draft from a YAML or JSON file.
///
/// Files ending in `.json` are parsed as JSON; everything else is treated
/// as YAML.
///
/// # Errors
///
/// Returns `ConfigError::DraftIo` if the file cannot be read and
/// `ConfigError::DraftParse` if its contents do not deserialize into a
/// [`CompanyProfile`].
pub fn load_draft(path: &Path) -> Result<CompanyProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DraftIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_draft(path, &content)
}

fn parse_draft(path: &Path, content: &str) -> Result<CompanyProfile, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content).map_err(|e| ConfigError::DraftParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_yaml::from_str(content).map_err(|e| ConfigError::DraftParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml_draft() {
        let content = r#"
companyName: Acme Beverages
website: https://acme.example.com
foundingYear: "2019"
services:
  - title: Canning
    description: Contract canning lines
whyChooseUs:
  - statement: Fast turnaround
achievements:
  - title: Best of 2024
    description: Industry award
socialMedia:
  linkedin: https://linkedin.com/company/acme
"#;
        let profile = parse_draft(Path::new("draft.yaml"), content).expect("yaml should parse");
        assert_eq!(profile.company_name, "Acme Beverages");
        assert_eq!(profile.founding_year, "2019");
        assert_eq!(profile.services.len(), 1);
        assert_eq!(profile.why_choose_us[0].statement, "Fast turnaround");
        assert_eq!(
            profile.social_media.linkedin,
            "https://linkedin.com/company/acme"
        );
        assert!(profile.social_media.twitter.is_empty());
    }

    #[test]
    fn parse_json_draft() {
        let content = r#"{
            "companyName": "Acme",
            "website": "acme.io",
            "foundingYear": "2020",
            "services": [],
            "whyChooseUs": [],
            "achievements": []
        }"#;
        let profile = parse_draft(Path::new("draft.json"), content).expect("json should parse");
        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.website, "acme.io");
        assert!(profile.services.is_empty());
    }

    #[test]
    fn parse_invalid_yaml_reports_path() {
        let result = parse_draft(Path::new("bad.yaml"), "services: notalist");
        match result {
            Err(ConfigError::DraftParse { path, .. }) => assert_eq!(path, "bad.yaml"),
            other => panic!("expected DraftParse, got: {other:?}"),
        }
    }

    #[test]
    fn json_extension_is_case_insensitive() {
        let profile = parse_draft(Path::new("DRAFT.JSON"), r#"{"companyName": "Acme"}"#)
            .expect("uppercase .JSON should still parse as json");
        assert_eq!(profile.company_name, "Acme");
    }

    #[test]
    fn load_draft_missing_file_is_io_error() {
        let result = load_draft(Path::new("/nonexistent/draft.yaml"));
        assert!(
            matches!(result, Err(ConfigError::DraftIo { .. })),
            "expected DraftIo, got: {result:?}"
        );
    }
}
