//! MPIN strength evaluation library
//!
//! This library classifies a 4- or 6-digit MPIN as weak when it matches a
//! commonly used digit pattern or can be derived from the user's
//! demographic dates (own birth date, spouse's birth date, anniversary, ...).
//! It is advisory only: nothing is stored, hashed or verified.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and channel-based evaluation
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serializes evaluations and deserializes demographic records
//!
//! # Environment Variables
//!
//! - `MPIN_PROFILE`: Profile used by [`MpinAnalyser::from_env`]
//!   (`standard` or `household`, default: `standard`)
//!
//! # Example
//!
//! ```rust
//! use mpin_strength::{analyse_mpin_strength, DemographicField, Demographics, MpinStrength};
//! use secrecy::SecretString;
//!
//! let demographics = Demographics::new().with(DemographicField::DobSelf, "1998-01-02");
//! let mpin = SecretString::new("0102".to_string().into());
//!
//! let evaluation = analyse_mpin_strength(&mpin, &demographics);
//!
//! assert_eq!(evaluation.strength(), MpinStrength::Weak);
//! for reason in evaluation.reasons() {
//!     println!("{}", reason.humanize());
//! }
//! ```

// Internal modules
mod catalogue;
mod dates;
mod demographics;
mod evaluator;
mod input;
mod profile;
mod sections;
mod types;

// Public API
pub use catalogue::{is_commonly_used, PatternRule};
pub use dates::{expand_date, extract_date_patterns, parse_demographic_date, DateError, DateLayout};
pub use demographics::{DemographicField, Demographics, UnknownFieldError};
pub use evaluator::{analyse_mpin_strength, MpinAnalyser};
pub use input::{validate_mpin, MpinInputError, MpinLength};
pub use profile::{Profile, ProfileError, PROFILE_ENV_VAR};
pub use sections::matches_date_pattern;
pub use types::{MpinEvaluation, MpinStrength, Reason};

#[cfg(feature = "async")]
pub use evaluator::{analyse_mpin_strength_tx, EVALUATION_DEBOUNCE};
