//! The company profile record and its wire representation.
//!
//! Field names serialize in camelCase to match the backend's `api/company`
//! contract, so a `CompanyProfile` can be posted as-is.

use serde::{Deserialize, Serialize};

/// A company profile as collected by the intake form.
///
/// Scalars are plain strings where the empty string means "not provided";
/// list fields are never null, only empty-or-populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub company_name: String,
    pub website: String,
    pub founding_year: String,
    pub founder_name: String,
    pub industry: String,
    pub employee_count: String,
    pub mission: String,
    pub vision: String,
    pub services: Vec<ServiceEntry>,
    pub why_choose_us: Vec<StatementEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub social_media: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementEntry {
    pub statement: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementEntry {
    pub title: String,
    pub description: String,
}

/// Optional social links; none of these are ever required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub instagram: String,
    pub twitter: String,
}
