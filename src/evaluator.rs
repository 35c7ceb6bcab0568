//! MPIN strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::demographics::Demographics;
use crate::profile::{Profile, ProfileError};
use crate::sections::Section;
use crate::types::MpinEvaluation;

/// Delay before a channel evaluation starts, so rapid re-entry can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluator bound to a [`Profile`].
///
/// Holds no state between evaluations; a single analyser can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MpinAnalyser {
    profile: Profile,
}

impl MpinAnalyser {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Builds an analyser from the `MPIN_PROFILE` environment variable.
    pub fn from_env() -> Result<Self, ProfileError> {
        Profile::from_env().map(Self::new)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Evaluates an MPIN against the catalogue and the demographic dates.
    ///
    /// Malformed input never fails the evaluation: a non-digit MPIN is simply
    /// not commonly used, and a missing or unparseable date contributes nothing.
    pub fn analyse(&self, mpin: &SecretString, demographics: &Demographics) -> MpinEvaluation {
        let mut evaluation = MpinEvaluation::new();
        for section in Section::for_profile(self.profile) {
            self.run_section(section, mpin, demographics, &mut evaluation);
        }
        evaluation
    }

    /// Like [`MpinAnalyser::analyse`], checking `token` before each section.
    ///
    /// Returns `None` if the evaluation was cancelled.
    #[cfg(feature = "async")]
    pub fn analyse_cancellable(
        &self,
        mpin: &SecretString,
        demographics: &Demographics,
        token: &CancellationToken,
    ) -> Option<MpinEvaluation> {
        let mut evaluation = MpinEvaluation::new();
        for section in Section::for_profile(self.profile) {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("MPIN evaluation cancelled before section: {}", section.name());
                return None;
            }
            self.run_section(section, mpin, demographics, &mut evaluation);
        }
        Some(evaluation)
    }

    fn run_section(
        &self,
        section: Section,
        mpin: &SecretString,
        demographics: &Demographics,
        evaluation: &mut MpinEvaluation,
    ) {
        if let Some(reason) = section.run(mpin, demographics, self.profile) {
            let _added = evaluation.push_reason(reason);

            #[cfg(feature = "tracing")]
            {
                if _added {
                    tracing::debug!("Section {} reported {}", section.name(), reason);
                }
            }
        }
    }
}

/// Evaluates MPIN strength with the default profile.
///
/// # Arguments
/// * `mpin` - The MPIN to evaluate
/// * `demographics` - Personally significant dates to correlate against
///
/// # Returns
/// An `MpinEvaluation` with the triggered reasons in detection order.
pub fn analyse_mpin_strength(mpin: &SecretString, demographics: &Demographics) -> MpinEvaluation {
    MpinAnalyser::default().analyse(mpin, demographics)
}

/// Async version that sends the evaluation via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. Nothing is sent if `token` is
/// cancelled before the evaluation completes.
#[cfg(feature = "async")]
pub async fn analyse_mpin_strength_tx(
    analyser: MpinAnalyser,
    mpin: &SecretString,
    demographics: &Demographics,
    token: CancellationToken,
    tx: mpsc::Sender<MpinEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("MPIN evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;
    let Some(evaluation) = analyser.analyse_cancellable(mpin, demographics, &token) else {
        return;
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send MPIN evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::DemographicField;
    use crate::types::{MpinStrength, Reason};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn evaluate(mpin: &str, demographics: &Demographics) -> MpinEvaluation {
        analyse_mpin_strength(&secret(mpin), demographics)
    }

    #[test]
    fn test_evaluate_commonly_used() {
        let evaluation = evaluate("1234", &Demographics::new());
        assert_eq!(evaluation.strength(), MpinStrength::Weak);
        assert_eq!(evaluation.reasons(), &[Reason::CommonlyUsed]);
    }

    #[test]
    fn test_evaluate_strong_without_demographics() {
        for mpin in ["3841", "7263", "8059", "940281", "130948", "672154", "500593"] {
            let evaluation = evaluate(mpin, &Demographics::new());
            assert_eq!(evaluation.strength(), MpinStrength::Strong, "{mpin}");
            assert!(evaluation.reasons().is_empty());
        }
    }

    #[test]
    fn test_evaluate_dob_self_exactly_once() {
        // 0102 is both MMDD and the prefix of MMDDYY.
        let demographics = Demographics::new().with(DemographicField::DobSelf, "1998-01-02");
        let evaluation = evaluate("0102", &demographics);

        assert_eq!(evaluation.strength(), MpinStrength::Weak);
        assert_eq!(
            evaluation.reasons(),
            &[Reason::Demographic(DemographicField::DobSelf)]
        );
    }

    #[test]
    fn test_evaluate_partial_matches() {
        let demographics = Demographics::new().with(DemographicField::DobSelf, "1998-01-02");
        for mpin in ["0298", "9801"] {
            let evaluation = evaluate(mpin, &demographics);
            assert!(
                evaluation.has_reason(Reason::Demographic(DemographicField::DobSelf)),
                "{mpin}"
            );
        }
    }

    #[test]
    fn test_evaluate_six_digit_demographics() {
        let cases = [
            ("010298", DemographicField::DobSelf, "1998-01-02"),
            ("151297", DemographicField::DobSpouse, "1997-12-15"),
            ("202203", DemographicField::Anniversary, "2022-03-04"),
        ];
        for (mpin, field, date) in cases {
            let demographics = Demographics::new()
                .with(DemographicField::DobSelf, "1990-01-01")
                .with(field, date);
            let evaluation = evaluate(mpin, &demographics);
            assert_eq!(evaluation.strength(), MpinStrength::Weak, "{mpin}");
            assert!(evaluation.has_reason(Reason::Demographic(field)), "{mpin}");
        }
    }

    #[test]
    fn test_evaluate_only_matching_fields_reported() {
        let demographics = Demographics::new()
            .with(DemographicField::DobSelf, "1998-01-02")
            .with(DemographicField::Anniversary, "2022-03-04");
        let evaluation = evaluate("0102", &demographics);

        assert_eq!(
            evaluation.reasons(),
            &[Reason::Demographic(DemographicField::DobSelf)]
        );
    }

    #[test]
    fn test_evaluate_reasons_follow_field_order() {
        let demographics = Demographics::new()
            .with(DemographicField::Anniversary, "1998-07-08")
            .with(DemographicField::DobSpouse, "1998-05-06")
            .with(DemographicField::DobSelf, "1998-01-02");
        let evaluation = evaluate("1998", &demographics);

        assert_eq!(
            evaluation.reasons(),
            &[
                Reason::Demographic(DemographicField::DobSelf),
                Reason::Demographic(DemographicField::DobSpouse),
                Reason::Demographic(DemographicField::Anniversary),
            ]
        );
    }

    #[test]
    fn test_evaluate_commonly_used_reported_first() {
        let demographics = Demographics::new().with(DemographicField::DobSelf, "2012-12-01");
        let evaluation = evaluate("1212", &demographics);

        assert_eq!(
            evaluation.reasons(),
            &[
                Reason::CommonlyUsed,
                Reason::Demographic(DemographicField::DobSelf)
            ]
        );
    }

    #[test]
    fn test_evaluate_malformed_inputs_degrade() {
        let demographics = Demographics::new()
            .with(DemographicField::DobSelf, "not-a-date")
            .with(DemographicField::DobSpouse, "1998-02-30");

        for mpin in ["", "12a4", "1111 ", "٣٣٣٣"] {
            let evaluation = evaluate(mpin, &demographics);
            assert_eq!(evaluation.strength(), MpinStrength::Strong, "{mpin:?}");
        }
    }

    #[test]
    fn test_evaluate_five_digit_mpin() {
        // No catalogue class beyond the generic ones applies, and no date pattern has five digits.
        let demographics = Demographics::new().with(DemographicField::DobSelf, "1998-01-02");
        let evaluation = evaluate("19980", &demographics);
        assert_eq!(evaluation.strength(), MpinStrength::Strong);

        let evaluation = evaluate("77777", &demographics);
        assert_eq!(evaluation.reasons(), &[Reason::CommonlyUsed]);
    }

    #[test]
    fn test_standard_profile_ignores_household_fields() {
        let demographics = Demographics::new().with(DemographicField::ChildDob, "2010-05-20");
        let evaluation = evaluate("0520", &demographics);
        assert_eq!(evaluation.strength(), MpinStrength::Strong);
    }

    #[test]
    fn test_household_profile_fields() {
        let analyser = MpinAnalyser::new(Profile::Household);
        let demographics = Demographics::new()
            .with(DemographicField::ChildDob, "2010-05-20")
            .with(DemographicField::PetDob, "2015-11-01");

        let child = analyser.analyse(&secret("0520"), &demographics);
        assert_eq!(
            child.reasons(),
            &[Reason::Demographic(DemographicField::ChildDob)]
        );

        let pet = analyser.analyse(&secret("1101"), &demographics);
        assert_eq!(pet.reasons(), &[Reason::Demographic(DemographicField::PetDob)]);
    }

    #[test]
    fn test_household_profile_has_no_keypad_lines() {
        let analyser = MpinAnalyser::new(Profile::Household);
        let evaluation = analyser.analyse(&secret("2580"), &Demographics::new());
        assert_eq!(evaluation.strength(), MpinStrength::Strong);

        let evaluation = analyse_mpin_strength(&secret("2580"), &Demographics::new());
        assert_eq!(evaluation.reasons(), &[Reason::CommonlyUsed]);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let demographics = Demographics::new()
            .with(DemographicField::DobSelf, "1998-01-02")
            .with(DemographicField::Anniversary, "2022-03-04");
        let first = evaluate("0304", &demographics);
        let second = evaluate("0304", &demographics);
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyser_is_shareable_across_threads() {
        let analyser = MpinAnalyser::default();
        let demographics = Demographics::new().with(DemographicField::DobSelf, "1998-01-02");

        let results: Vec<MpinEvaluation> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["0102", "3841", "1111"]
                .into_iter()
                .map(|mpin| {
                    let demographics = &demographics;
                    scope.spawn(move || analyser.analyse(&secret(mpin), demographics))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("evaluation thread panicked"))
                .collect()
        });

        assert_eq!(results[0].strength(), MpinStrength::Weak);
        assert_eq!(results[1].strength(), MpinStrength::Strong);
        assert_eq!(results[2].reasons(), &[Reason::CommonlyUsed]);
    }
}
