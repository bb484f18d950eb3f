//! First-failure validation of a company profile before submission.

use proform_core::profile::CompanyProfile;
use regex::Regex;
use thiserror::Error;

/// A validation failure; `Display` is the user-facing message.
///
/// Checks run in a fixed order and stop at the first failure, so only one
/// violation is ever reported per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All required fields must be filled")]
    MissingRequiredFields,

    #[error("Please enter a valid website URL")]
    InvalidWebsiteUrl,

    #[error("Please add at least one service")]
    NoServices,

    #[error("Please fill all service details completely")]
    IncompleteService,

    #[error("Please add at least one 'Why Choose Us' statement")]
    NoStatements,

    #[error("Please fill all 'Why Choose Us' statements")]
    IncompleteStatement,

    #[error("Please add at least one achievement")]
    NoAchievements,

    #[error("Please fill all achievement details completely")]
    IncompleteAchievement,
}

/// Checks a profile against the submission requirements.
///
/// Required: company name, website (URL-shaped), founding year, and at least
/// one fully-filled entry in each of the three lists. Founder name, industry,
/// employee count, mission, vision, and social links are never required.
/// A field counts as missing only when it is the empty string; whitespace
/// passes.
///
/// # Errors
///
/// Returns the first failing check, in the order documented on
/// [`ValidationError`].
pub fn validate(profile: &CompanyProfile) -> Result<(), ValidationError> {
    if profile.company_name.is_empty()
        || profile.website.is_empty()
        || profile.founding_year.is_empty()
    {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !is_url_shaped(&profile.website) {
        return Err(ValidationError::InvalidWebsiteUrl);
    }

    if profile.services.is_empty() {
        return Err(ValidationError::NoServices);
    }
    if profile
        .services
        .iter()
        .any(|s| s.title.is_empty() || s.description.is_empty())
    {
        return Err(ValidationError::IncompleteService);
    }

    if profile.why_choose_us.is_empty() {
        return Err(ValidationError::NoStatements);
    }
    if profile.why_choose_us.iter().any(|s| s.statement.is_empty()) {
        return Err(ValidationError::IncompleteStatement);
    }

    if profile.achievements.is_empty() {
        return Err(ValidationError::NoAchievements);
    }
    if profile
        .achievements
        .iter()
        .any(|a| a.title.is_empty() || a.description.is_empty())
    {
        return Err(ValidationError::IncompleteAchievement);
    }

    Ok(())
}

/// Permissive URL-shape heuristic: optional http/https scheme, dotted domain
/// labels ending in a TLD of two or more letters or a dotted-quad IPv4
/// address, then optional port, path, query, and fragment. Case-insensitive.
///
/// A heuristic, not a strict parse: it accepts some malformed addresses
/// (e.g. out-of-range dotted quads) and rejects some valid internationalized
/// domains.
#[must_use]
pub fn is_url_shaped(candidate: &str) -> bool {
    let pattern = Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("valid website regex");
    pattern.is_match(candidate)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
