//! Evaluation result types: strength verdict and reason tags.

use std::fmt;

use crate::demographics::DemographicField;

/// Final verdict of an MPIN evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "UPPERCASE"))]
pub enum MpinStrength {
    Strong,
    Weak,
}

impl MpinStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            MpinStrength::Strong => "STRONG",
            MpinStrength::Weak => "WEAK",
        }
    }
}

impl fmt::Display for MpinStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an MPIN was judged weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Matches a catalogued guessable pattern.
    CommonlyUsed,
    /// Derivable from the date stored under this demographic field.
    Demographic(DemographicField),
}

impl Reason {
    /// Symbolic tag, e.g. `COMMONLY_USED` or `DEMOGRAPHIC_DOB_SELF`.
    pub fn tag(&self) -> &'static str {
        match self {
            Reason::CommonlyUsed => "COMMONLY_USED",
            Reason::Demographic(field) => field.reason_tag(),
        }
    }

    /// Display form for user interfaces: `DEMOGRAPHIC DOB SELF`.
    pub fn humanize(&self) -> String {
        self.tag().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Outcome of a single MPIN evaluation.
///
/// Reasons are kept in detection order and never repeat. The strength is
/// derived from them: any reason makes the MPIN weak.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpinEvaluation {
    reasons: Vec<Reason>,
}

impl MpinEvaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strength(&self) -> MpinStrength {
        if self.reasons.is_empty() {
            MpinStrength::Strong
        } else {
            MpinStrength::Weak
        }
    }

    pub fn is_weak(&self) -> bool {
        self.strength() == MpinStrength::Weak
    }

    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    pub fn has_reason(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }

    /// Records a reason unless it is already present.
    ///
    /// Returns `true` when the reason was newly added.
    pub(crate) fn push_reason(&mut self, reason: Reason) -> bool {
        if self.has_reason(reason) {
            return false;
        }
        self.reasons.push(reason);
        true
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MpinEvaluation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("MpinEvaluation", 2)?;
        state.serialize_field("strength", &self.strength())?;
        state.serialize_field("reasons", &self.reasons)?;
        state.end()
    }
}
