use std::path::Path;

use anyhow::Context;
use proform_core::load_draft;
use proform_form::validate;

/// Load a draft and report the first validation violation, if any.
pub(crate) fn run_check(file: &Path) -> anyhow::Result<()> {
    let profile = load_draft(file).context("loading profile draft")?;
    match validate(&profile) {
        Ok(()) => {
            println!("{}: ready to submit", file.display());
            Ok(())
        }
        Err(violation) => anyhow::bail!("{}: {violation}", file.display()),
    }
}
