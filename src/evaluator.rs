//! Password rule evaluator - runs the requirement table over a password.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{Requirement, REQUIREMENTS};
use crate::types::{Score, StrengthTier};

/// Outcome of a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementResult {
    pub requirement: &'static Requirement,
    pub satisfied: bool,
}

/// Ordered results, parallel to [`REQUIREMENTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    results: Vec<RequirementResult>,
}

impl Evaluation {
    pub fn results(&self) -> &[RequirementResult] {
        &self.results
    }

    /// Number of satisfied requirements.
    pub fn score(&self) -> Score {
        let met = self.results.iter().filter(|r| r.satisfied).count();
        Score::new(u8::try_from(met).unwrap_or(Score::MAX))
    }

    pub fn percent(&self) -> f64 {
        self.score().percent()
    }

    pub fn tier(&self) -> StrengthTier {
        self.score().tier()
    }
}

/// Evaluates a password against every requirement.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// An `Evaluation` with one result per requirement, in display order.
pub fn evaluate_password(password: &SecretString) -> Evaluation {
    let pwd = password.expose_secret();

    let results = REQUIREMENTS
        .iter()
        .map(|requirement| RequirementResult {
            requirement,
            satisfied: requirement.is_satisfied(pwd),
        })
        .collect();

    let evaluation = Evaluation { results };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score().value(),
        tier = %evaluation.tier(),
        "password evaluated"
    );

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn flags(evaluation: &Evaluation) -> Vec<bool> {
        evaluation.results().iter().map(|r| r.satisfied).collect()
    }

    #[test]
    fn test_evaluate_common_word_with_full_variety() {
        let evaluation = evaluate_password(&secret("Password1!"));

        assert_eq!(flags(&evaluation), vec![true, true, true, true, true, false]);
        assert_eq!(evaluation.score().value(), 5);
        assert_eq!(evaluation.tier(), StrengthTier::Strong);
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let evaluation = evaluate_password(&secret("abc"));

        assert_eq!(flags(&evaluation), vec![false, false, true, false, false, true]);
        assert_eq!(evaluation.score().value(), 2);
        assert_eq!(evaluation.tier(), StrengthTier::Weak);
    }

    #[test]
    fn test_evaluate_moderate_password() {
        let evaluation = evaluate_password(&secret("qwerty123"));

        assert_eq!(flags(&evaluation), vec![true, false, true, true, false, false]);
        assert_eq!(evaluation.score().value(), 3);
        assert_eq!(evaluation.tier(), StrengthTier::Moderate);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let evaluation = evaluate_password(&secret("Tr0ub4dor&Horse"));

        assert_eq!(evaluation.score().value(), 6);
        assert_eq!(evaluation.percent(), 100.0);
        assert_eq!(evaluation.tier(), StrengthTier::Strong);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate_password(&secret(""));

        assert_eq!(flags(&evaluation), vec![false, false, false, false, false, true]);
        assert_eq!(evaluation.score().value(), 1);
    }

    #[test]
    fn test_evaluate_length_boundary() {
        assert!(evaluate_password(&secret("aaaaaaaa")).results()[0].satisfied);
        assert!(!evaluate_password(&secret("aaaaaaa")).results()[0].satisfied);
    }

    #[test]
    fn test_evaluate_results_follow_requirement_order() {
        let evaluation = evaluate_password(&secret("anything"));
        for (result, requirement) in evaluation.results().iter().zip(REQUIREMENTS.iter()) {
            assert_eq!(result.requirement.label(), requirement.label());
        }
        assert_eq!(evaluation.results().len(), REQUIREMENTS.len());
    }

    proptest! {
        #[test]
        fn prop_short_passwords_fail_length(pwd in "\\PC{0,7}") {
            let evaluation = evaluate_password(&secret(&pwd));
            prop_assert!(!evaluation.results()[0].satisfied);
        }

        #[test]
        fn prop_score_and_percent_in_range(pwd in "\\PC*") {
            let evaluation = evaluate_password(&secret(&pwd));
            prop_assert!(evaluation.score().value() <= Score::MAX);
            prop_assert!((0.0..=100.0).contains(&evaluation.percent()));
        }

        #[test]
        fn prop_evaluation_is_idempotent(pwd in "\\PC*") {
            let first = evaluate_password(&secret(&pwd));
            let second = evaluate_password(&secret(&pwd));
            prop_assert_eq!(first, second);
        }
    }
}
