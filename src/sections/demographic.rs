//! Demographic section - checks whether the MPIN can be derived from a
//! personally significant date.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::dates::expand_date;
use crate::demographics::{DemographicField, Demographics};
use crate::profile::Profile;
use crate::types::Reason;

/// Whether `mpin` is derivable from a single date `pattern`.
///
/// Same length requires equality. A 4-digit MPIN also matches the first or
/// last four digits of a 6-digit pattern. No other combination matches.
pub fn matches_date_pattern(mpin: &str, pattern: &str) -> bool {
    if mpin.len() == pattern.len() {
        mpin == pattern
    } else if mpin.len() == 4 && pattern.len() == 6 {
        pattern.starts_with(mpin) || pattern.ends_with(mpin)
    } else {
        false
    }
}

/// Checks the MPIN against every pattern derived from `field`'s date.
///
/// # Returns
/// - `Some(Reason::Demographic(field))` if any pattern matches
/// - `None` if the date is absent, unparseable, or unrelated
pub fn demographic_section(
    mpin: &SecretString,
    demographics: &Demographics,
    field: DemographicField,
    profile: Profile,
) -> SectionResult {
    let pin = mpin.expose_secret();
    let patterns = expand_date(demographics.date(field), profile.date_layouts());

    if patterns.iter().any(|pattern| matches_date_pattern(pin, pattern)) {
        #[cfg(feature = "tracing")]
        tracing::debug!("MPIN derivable from demographic field: {}", field);
        return Some(Reason::Demographic(field));
    }
    None
}
