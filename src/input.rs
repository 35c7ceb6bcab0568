//! Strict MPIN input validation for callers that want a diagnostic before
//! evaluating. Evaluation itself never requires it.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Supported MPIN lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpinLength {
    Four,
    Six,
}

impl MpinLength {
    pub fn digits(&self) -> usize {
        match self {
            MpinLength::Four => 4,
            MpinLength::Six => 6,
        }
    }

    pub fn from_digits(digits: usize) -> Option<Self> {
        match digits {
            4 => Some(MpinLength::Four),
            6 => Some(MpinLength::Six),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MpinInputError {
    #[error("MPIN is empty")]
    Empty,
    #[error("MPIN must be {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("MPIN must contain only digits")]
    NonDigit,
}

/// Checks that `mpin` is exactly `length` ASCII digits.
///
/// # Errors
///
/// Returns the first problem found: empty input, wrong length, then
/// non-digit characters.
pub fn validate_mpin(mpin: &SecretString, length: MpinLength) -> Result<(), MpinInputError> {
    let pin = mpin.expose_secret();
    if pin.is_empty() {
        return Err(MpinInputError::Empty);
    }
    let actual = pin.chars().count();
    if actual != length.digits() {
        return Err(MpinInputError::WrongLength {
            expected: length.digits(),
            actual,
        });
    }
    if !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(MpinInputError::NonDigit);
    }
    Ok(())
}
