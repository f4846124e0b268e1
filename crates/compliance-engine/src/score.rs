//! Compliance score formula and verdict derivation.

/// Points deducted per impediment.
pub const IMPEDIMENT_PENALTY: f64 = 25.0;
/// Points deducted per warning.
pub const WARNING_PENALTY: f64 = 5.0;
/// Minimum score to pass, given zero impediments.
pub const PASSING_SCORE: f64 = 70.0;

/// `max(0, 100 - 25*impediments - 5*warnings)`.
///
/// Monotonically non-increasing in both counts, floored at zero.
pub fn compliance_score(impediments: usize, warnings: usize) -> f64 {
    let raw = 100.0
        - IMPEDIMENT_PENALTY * impediments as f64
        - WARNING_PENALTY * warnings as f64;
    raw.max(0.0)
}

/// Verdict: the score threshold alone is not sufficient; any impediment
/// fails the operation even when the score stays at or above 70.
pub fn passes(score: f64, impediments: usize) -> bool {
    score >= PASSING_SCORE && impediments == 0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_is_bounded(impediments in 0usize..1000, warnings in 0usize..1000) {
            let score = compliance_score(impediments, warnings);
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn score_is_monotone_in_impediments(impediments in 0usize..100, warnings in 0usize..100) {
            let a = compliance_score(impediments, warnings);
            let b = compliance_score(impediments + 1, warnings);
            prop_assert!(b <= a);
        }

        #[test]
        fn score_is_monotone_in_warnings(impediments in 0usize..100, warnings in 0usize..100) {
            let a = compliance_score(impediments, warnings);
            let b = compliance_score(impediments, warnings + 1);
            prop_assert!(b <= a);
        }

        #[test]
        fn never_passes_with_impediments(impediments in 1usize..100, warnings in 0usize..100) {
            let score = compliance_score(impediments, warnings);
            prop_assert!(!passes(score, impediments));
        }
    }
}
