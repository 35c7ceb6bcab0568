//! Evaluation profiles: which demographic fields, pattern rules and date
//! layouts take part in an evaluation.

use std::str::FromStr;

use thiserror::Error;

use crate::catalogue::{KEYPAD_RULES, PatternRule, STRUCTURAL_RULES};
use crate::dates::DateLayout;
use crate::demographics::DemographicField;

/// Environment variable selecting the profile used by [`Profile::from_env`].
pub const PROFILE_ENV_VAR: &str = "MPIN_PROFILE";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unknown MPIN profile: {0} (expected `standard` or `household`)")]
    Unknown(String),
}

/// Fixed rule and field set for an evaluation.
///
/// - `Standard`: own, spouse and anniversary dates; keypad lines are
///   commonly used; day/year date layouts included.
/// - `Household`: adds child and pet birth dates; structural patterns only;
///   no day/year date layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    #[default]
    Standard,
    Household,
}

const STANDARD_FIELDS: [DemographicField; 3] = [
    DemographicField::DobSelf,
    DemographicField::DobSpouse,
    DemographicField::Anniversary,
];

const HOUSEHOLD_LAYOUTS: [DateLayout; 13] = [
    DateLayout::MonthDay,
    DateLayout::DayMonth,
    DateLayout::YearMonth,
    DateLayout::MonthYear,
    DateLayout::FullYear,
    DateLayout::YearYear,
    DateLayout::MonthDayYear,
    DateLayout::DayMonthYear,
    DateLayout::FullYearMonth,
    DateLayout::FullYearDay,
    DateLayout::YearMonthDay,
    DateLayout::MonthYearDay,
    DateLayout::DayYearMonth,
];

impl Profile {
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Household => "household",
        }
    }

    /// Demographic fields checked, in reporting order.
    pub fn fields(&self) -> &'static [DemographicField] {
        match self {
            Profile::Standard => &STANDARD_FIELDS,
            Profile::Household => &DemographicField::ALL,
        }
    }

    /// Commonly-used rules, in evaluation order.
    pub fn rules(&self) -> &'static [PatternRule] {
        match self {
            Profile::Standard => &KEYPAD_RULES,
            Profile::Household => &STRUCTURAL_RULES,
        }
    }

    /// Date layouts expanded for each demographic date.
    pub fn date_layouts(&self) -> &'static [DateLayout] {
        match self {
            Profile::Standard => &DateLayout::ALL,
            Profile::Household => &HOUSEHOLD_LAYOUTS,
        }
    }

    /// Reads the profile from `MPIN_PROFILE`.
    ///
    /// Falls back to [`Profile::Standard`] when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Unknown`] if the variable names no profile.
    pub fn from_env() -> Result<Self, ProfileError> {
        let profile = match std::env::var(PROFILE_ENV_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => Profile::default(),
        };

        #[cfg(feature = "tracing")]
        tracing::info!("MPIN profile selected: {}", profile.name());

        Ok(profile)
    }
}

impl FromStr for Profile {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Profile::Standard),
            "household" => Ok(Profile::Household),
            _ => Err(ProfileError::Unknown(s.to_string())),
        }
    }
}
