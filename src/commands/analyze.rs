//! Guess analysis command
//!
//! Scores a guess against every possible secret and reports how the code
//! space splits by feedback.

use crate::core::{Code, Feedback};
use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_secrets: usize,
    /// Feedback groups, largest first
    pub partitions: Vec<(Feedback, usize)>,
    /// Expected number of secrets still consistent after seeing the feedback
    pub expected_remaining: f64,
}

impl AnalysisResult {
    /// Size of the largest group (worst case)
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.partitions.first().map_or(0, |&(_, count)| count)
    }
}

/// Analyze a guess against the full code space
///
/// # Errors
///
/// Returns an error if the guess is malformed.
pub fn analyze_guess(guess: &str) -> Result<AnalysisResult> {
    let guess: Code = guess.parse().context("Invalid guess")?;
    let secrets: Vec<Code> = Code::all().collect();

    Ok(analyze_against(guess, &secrets))
}

/// Analyze a guess against an explicit set of secrets
#[must_use]
pub fn analyze_against(guess: Code, secrets: &[Code]) -> AnalysisResult {
    let feedbacks: Vec<Feedback> = secrets
        .par_iter()
        .map(|secret| Feedback::score(secret, &guess))
        .collect();

    let partitions = group_by_feedback(&feedbacks);
    debug!(guess = %guess, groups = partitions.len(), "analyzed guess");

    let total = secrets.len();
    let expected_remaining = if total == 0 {
        0.0
    } else {
        partitions
            .iter()
            .map(|&(_, count)| (count * count) as f64)
            .sum::<f64>()
            / total as f64
    };

    AnalysisResult {
        guess,
        total_secrets: total,
        partitions,
        expected_remaining,
    }
}

/// Count feedbacks, largest group first, ties broken by glyph string
fn group_by_feedback(feedbacks: &[Feedback]) -> Vec<(Feedback, usize)> {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for &feedback in feedbacks {
        *counts.entry(feedback).or_insert(0) += 1;
    }

    let mut partitions: Vec<(Feedback, usize)> = counts.into_iter().collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.glyphs().cmp(&b.0.glyphs())));
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_SPACE;

    #[test]
    fn analyze_covers_whole_code_space() {
        let result = analyze_guess("aabb").unwrap();

        assert_eq!(result.total_secrets, CODE_SPACE);
        let covered: usize = result.partitions.iter().map(|&(_, c)| c).sum();
        assert_eq!(covered, CODE_SPACE);
    }

    #[test]
    fn perfect_feedback_has_exactly_one_secret() {
        let result = analyze_guess("abcd").unwrap();

        let perfect = result
            .partitions
            .iter()
            .find(|(f, _)| f.is_win())
            .map(|&(_, c)| c);
        assert_eq!(perfect, Some(1));
    }

    #[test]
    fn partitions_sorted_largest_first() {
        let result = analyze_guess("abcc").unwrap();

        assert!(result.partitions.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(result.worst_case(), result.partitions[0].1);
    }

    #[test]
    fn uniform_guess_groups_by_exact_count() {
        // AAAA can only ever produce exact or absent outcomes
        let result = analyze_guess("aaaa").unwrap();

        assert!(
            result
                .partitions
                .iter()
                .all(|(f, _)| f.misplaced_count() == 0)
        );
        // No A in any position: 5^4 secrets
        let none = result
            .partitions
            .iter()
            .find(|(f, _)| f.exact_count() == 0)
            .map(|&(_, c)| c);
        assert_eq!(none, Some(625));
    }

    #[test]
    fn expected_remaining_bounds() {
        let result = analyze_guess("abcd").unwrap();

        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.worst_case() as f64);
    }

    #[test]
    fn analyze_against_empty_set() {
        let result = analyze_against("abcd".parse().unwrap(), &[]);

        assert_eq!(result.total_secrets, 0);
        assert!(result.partitions.is_empty());
        assert_eq!(result.worst_case(), 0);
        assert!(result.expected_remaining.abs() < f64::EPSILON);
    }

    #[test]
    fn analyze_rejects_malformed_guess() {
        assert!(analyze_guess("abcdef").is_err());
    }
}
