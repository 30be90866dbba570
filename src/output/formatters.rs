//! Formatting utilities for terminal output

use crate::core::{Feedback, Outcome};

/// Peg character for one outcome
#[must_use]
pub const fn outcome_peg(outcome: Outcome) -> char {
    match outcome {
        Outcome::Exact => '●',
        Outcome::Misplaced => '○',
        Outcome::Absent => '·',
    }
}

/// Format feedback as a row of pegs, one per position
#[must_use]
pub fn feedback_to_pegs(feedback: &Feedback) -> String {
    feedback.outcomes().iter().map(|&o| outcome_peg(o)).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
