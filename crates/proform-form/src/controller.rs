//! Form state controller: owns the in-progress profile and applies edits.

use proform_core::profile::{AchievementEntry, CompanyProfile, ServiceEntry, StatementEntry};

/// A scalar field of the profile, addressable by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    CompanyName,
    Website,
    FoundingYear,
    FounderName,
    Industry,
    EmployeeCount,
    Mission,
    Vision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Linkedin,
    Instagram,
    Twitter,
}

/// The three dynamically-edited lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Services,
    WhyChooseUs,
    Achievements,
}

/// Editable fields of list items. `Statement` belongs to `WhyChooseUs`;
/// `Title` and `Description` to the other two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Title,
    Description,
    Statement,
}

impl ListKind {
    /// The fields an item of this kind carries.
    #[must_use]
    pub fn fields(self) -> &'static [ListField] {
        match self {
            ListKind::Services | ListKind::Achievements => {
                &[ListField::Title, ListField::Description]
            }
            ListKind::WhyChooseUs => &[ListField::Statement],
        }
    }
}

/// One edit to the form state, as dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SetField {
        field: ScalarField,
        value: String,
    },
    SetSocial {
        platform: SocialPlatform,
        value: String,
    },
    AddItem {
        kind: ListKind,
    },
    RemoveItem {
        kind: ListKind,
        index: usize,
    },
    UpdateItem {
        kind: ListKind,
        index: usize,
        field: ListField,
        value: String,
    },
}

/// Owns the current [`CompanyProfile`] and mutates it through commands.
///
/// The revision counter bumps on every command that lands, giving the
/// presentation layer a cheap change-detection signal. Out-of-range indexes
/// and fields that do not belong to a kind are silent no-ops.
#[derive(Debug, Default)]
pub struct FormController {
    profile: CompanyProfile,
    revision: u64,
}

impl FormController {
    /// A controller over the blank profile the page constructs on load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing from an existing draft.
    #[must_use]
    pub fn from_profile(profile: CompanyProfile) -> Self {
        Self {
            profile,
            revision: 0,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn into_profile(self) -> CompanyProfile {
        self.profile
    }

    /// Applies one command to the form state.
    pub fn apply(&mut self, command: FormCommand) {
        match command {
            FormCommand::SetField { field, value } => self.set_field(field, value),
            FormCommand::SetSocial { platform, value } => self.set_social(platform, value),
            FormCommand::AddItem { kind } => self.add_item(kind),
            FormCommand::RemoveItem { kind, index } => self.remove_item(kind, index),
            FormCommand::UpdateItem {
                kind,
                index,
                field,
                value,
            } => self.update_item(kind, index, field, value),
        }
    }

    /// Overwrites one scalar field. No validation happens here; the validator
    /// runs only on submit.
    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            ScalarField::CompanyName => &mut self.profile.company_name,
            ScalarField::Website => &mut self.profile.website,
            ScalarField::FoundingYear => &mut self.profile.founding_year,
            ScalarField::FounderName => &mut self.profile.founder_name,
            ScalarField::Industry => &mut self.profile.industry,
            ScalarField::EmployeeCount => &mut self.profile.employee_count,
            ScalarField::Mission => &mut self.profile.mission,
            ScalarField::Vision => &mut self.profile.vision,
        };
        *slot = value;
        self.revision += 1;
    }

    /// Overwrites one social link.
    pub fn set_social(&mut self, platform: SocialPlatform, value: impl Into<String>) {
        let links = &mut self.profile.social_media;
        let slot = match platform {
            SocialPlatform::Linkedin => &mut links.linkedin,
            SocialPlatform::Instagram => &mut links.instagram,
            SocialPlatform::Twitter => &mut links.twitter,
        };
        *slot = value.into();
        self.revision += 1;
    }

    /// Appends a blank item of the kind's shape.
    pub fn add_item(&mut self, kind: ListKind) {
        match kind {
            ListKind::Services => self.profile.services.push(ServiceEntry::default()),
            ListKind::WhyChooseUs => self.profile.why_choose_us.push(StatementEntry::default()),
            ListKind::Achievements => self.profile.achievements.push(AchievementEntry::default()),
        }
        self.revision += 1;
    }

    /// Removes the item at `index`, preserving the order of the rest.
    /// Out-of-range indexes are ignored.
    pub fn remove_item(&mut self, kind: ListKind, index: usize) {
        let removed = match kind {
            ListKind::Services => remove_at(&mut self.profile.services, index),
            ListKind::WhyChooseUs => remove_at(&mut self.profile.why_choose_us, index),
            ListKind::Achievements => remove_at(&mut self.profile.achievements, index),
        };
        if removed {
            self.revision += 1;
        } else {
            tracing::debug!(?kind, index, "remove for out-of-range index ignored");
        }
    }

    /// Replaces one field of the item at `index`, leaving every other entry
    /// untouched. Out-of-range indexes and fields that do not belong to the
    /// kind are ignored.
    pub fn update_item(
        &mut self,
        kind: ListKind,
        index: usize,
        field: ListField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        let updated = match (kind, field) {
            (ListKind::Services, ListField::Title) => {
                set_at(&mut self.profile.services, index, value, |e, v| e.title = v)
            }
            (ListKind::Services, ListField::Description) => {
                set_at(&mut self.profile.services, index, value, |e, v| {
                    e.description = v;
                })
            }
            (ListKind::WhyChooseUs, ListField::Statement) => {
                set_at(&mut self.profile.why_choose_us, index, value, |e, v| {
                    e.statement = v;
                })
            }
            (ListKind::Achievements, ListField::Title) => {
                set_at(&mut self.profile.achievements, index, value, |e, v| {
                    e.title = v;
                })
            }
            (ListKind::Achievements, ListField::Description) => {
                set_at(&mut self.profile.achievements, index, value, |e, v| {
                    e.description = v;
                })
            }
            _ => false,
        };
        if updated {
            self.revision += 1;
        } else {
            tracing::debug!(
                ?kind,
                ?field,
                index,
                "update for missing item or mismatched field ignored"
            );
        }
    }
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}

fn set_at<T>(list: &mut [T], index: usize, value: String, set: impl FnOnce(&mut T, String)) -> bool {
    match list.get_mut(index) {
        Some(entry) => {
            set(entry, value);
            true
        }
        None => false,
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
