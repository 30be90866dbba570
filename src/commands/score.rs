//! Score command
//!
//! Scores a single guess against a given secret.

use crate::core::{Code, Feedback};
use anyhow::{Context, Result};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score the guess
///
/// # Errors
///
/// Returns an error if either code is malformed.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret: Code = secret.parse().context("Invalid secret")?;
    let guess: Code = guess.parse().context("Invalid guess")?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback: Feedback::score(&secret, &guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_pair() {
        let result = score_guess("aabb", "abbb").unwrap();

        assert_eq!(result.secret.to_string(), "AABB");
        assert_eq!(result.guess.to_string(), "ABBB");
        assert_eq!(result.feedback.glyphs(), "O OO");
        assert_eq!(result.feedback.exact_count(), 3);
    }

    #[test]
    fn score_rejects_malformed_guess() {
        let err = score_guess("abcd", "ab").err().unwrap();
        assert!(err.to_string().contains("Invalid guess"));
    }

    #[test]
    fn score_rejects_malformed_secret() {
        let err = score_guess("abcx", "abcd").err().unwrap();
        assert!(err.to_string().contains("Invalid secret"));
    }
}
