//! MPIN evaluation sections
//!
//! Each section checks one source of weakness and yields at most one reason.

mod common;
mod demographic;

pub use common::commonly_used_section;
pub use demographic::{demographic_section, matches_date_pattern};

use secrecy::SecretString;

use crate::demographics::{DemographicField, Demographics};
use crate::profile::Profile;
use crate::types::Reason;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section found a weakness
/// - `None` - Section passed, or had nothing to check
pub type SectionResult = Option<Reason>;

/// One step of an evaluation, run in profile order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    CommonlyUsed,
    Demographic(DemographicField),
}

impl Section {
    /// Commonly-used first, then each profile field in declared order.
    pub(crate) fn for_profile(profile: Profile) -> Vec<Section> {
        std::iter::once(Section::CommonlyUsed)
            .chain(profile.fields().iter().copied().map(Section::Demographic))
            .collect()
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Section::CommonlyUsed => "commonly_used",
            Section::Demographic(field) => field.key(),
        }
    }

    pub(crate) fn run(
        &self,
        mpin: &SecretString,
        demographics: &Demographics,
        profile: Profile,
    ) -> SectionResult {
        match *self {
            Section::CommonlyUsed => commonly_used_section(mpin, profile),
            Section::Demographic(field) => demographic_section(mpin, demographics, field, profile),
        }
    }
}
