//! Commonly used section - checks the MPIN against the pattern catalogue.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::catalogue::matching_rule;
use crate::profile::Profile;
use crate::types::Reason;

/// Checks the MPIN against the profile's commonly-used rules.
///
/// The expected length is the MPIN's own length, so only non-digit input
/// can disqualify it.
///
/// # Returns
/// - `Some(Reason::CommonlyUsed)` if any rule matches
/// - `None` otherwise
pub fn commonly_used_section(mpin: &SecretString, profile: Profile) -> SectionResult {
    let pin = mpin.expose_secret();
    let _rule = matching_rule(pin, pin.len(), profile.rules())?;

    #[cfg(feature = "tracing")]
    tracing::debug!("MPIN matched commonly used rule: {}", _rule);

    Some(Reason::CommonlyUsed)
}
