//! Catalogue of commonly used MPIN patterns.
//!
//! Each weakness class is an independent rule; an MPIN is commonly used when
//! any rule of the active set matches.

mod keypad;
mod structural;

use crate::profile::Profile;

/// A named predicate over the MPIN's ASCII digits.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    check: fn(&[u8]) -> bool,
}

impl PatternRule {
    const fn new(name: &'static str, check: fn(&[u8]) -> bool) -> Self {
        Self { name, check }
    }

    pub fn matches(&self, digits: &[u8]) -> bool {
        (self.check)(digits)
    }
}

const STRUCTURAL: [PatternRule; 6] = [
    PatternRule::new("uniform", structural::is_uniform),
    PatternRule::new("sequential", structural::is_sequential),
    PatternRule::new("parity", structural::is_uniform_parity),
    PatternRule::new("periodic", structural::is_periodic),
    PatternRule::new("palindrome", structural::is_palindrome),
    PatternRule::new("paired", structural::is_paired),
];

pub(crate) static STRUCTURAL_RULES: [PatternRule; 6] = STRUCTURAL;

pub(crate) static KEYPAD_RULES: [PatternRule; 7] = [
    STRUCTURAL[0],
    STRUCTURAL[1],
    STRUCTURAL[2],
    STRUCTURAL[3],
    STRUCTURAL[4],
    STRUCTURAL[5],
    PatternRule::new("keypad", keypad::is_keypad_line),
];

/// Returns the first rule in `rules` that `mpin` matches.
///
/// `mpin` must be exactly `pin_length` ASCII digits, otherwise nothing matches.
pub fn matching_rule(mpin: &str, pin_length: usize, rules: &[PatternRule]) -> Option<&'static str> {
    let digits = mpin.as_bytes();
    if digits.is_empty() || digits.len() != pin_length || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    rules
        .iter()
        .find(|rule| rule.matches(digits))
        .map(|rule| rule.name)
}

/// Checks whether `mpin` matches a commonly used pattern, keypad lines included.
///
/// Never fails: input of the wrong length or with non-digit characters is
/// simply not commonly used.
pub fn is_commonly_used(mpin: &str, pin_length: usize) -> bool {
    matching_rule(mpin, pin_length, Profile::Standard.rules()).is_some()
}
