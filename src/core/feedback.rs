//! Feedback scoring for a guess against the secret
//!
//! Each guess position gets one of three outcomes:
//! - Exact: same symbol at the same position
//! - Misplaced: the symbol occurs at another, not yet claimed, secret position
//! - Absent: no unclaimed occurrence remains
//!
//! No secret position is ever claimed twice in one scoring pass, which is what
//! makes duplicate symbols score correctly.

use super::{BOARD_SIZE, Code};

/// Classification of one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Absent,
    Misplaced,
    Exact,
}

impl Outcome {
    /// Display glyph: `O` for exact, `X` for misplaced, a space for absent
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Exact => 'O',
            Self::Misplaced => 'X',
            Self::Absent => ' ',
        }
    }
}

/// Per-position outcomes of one guess, plus the exact-match count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    outcomes: [Outcome; BOARD_SIZE],
    exact_count: usize,
}

impl Feedback {
    /// Feedback for a guess that matches the secret everywhere
    pub const PERFECT: Self = Self {
        outcomes: [Outcome::Exact; BOARD_SIZE],
        exact_count: BOARD_SIZE,
    };

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: every position where the symbols agree is `Exact` and
    ///    its secret position is claimed. This pass completes before the next.
    /// 2. Misplaced pass: for each remaining guess position, claim the lowest
    ///    unclaimed secret position holding the same symbol (`Misplaced`), or
    ///    leave it `Absent` if there is none.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, Outcome};
    ///
    /// let secret: Code = "AAAA".parse().unwrap();
    /// let guess: Code = "AABB".parse().unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// use Outcome::{Absent, Exact};
    /// assert_eq!(feedback.outcomes(), &[Exact, Exact, Absent, Absent]);
    /// assert_eq!(feedback.exact_count(), 2);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let secret = secret.symbols();
        let guess = guess.symbols();

        let mut outcomes = [Outcome::Absent; BOARD_SIZE];
        let mut used = [false; BOARD_SIZE];
        let mut exact_count = 0;

        // Index needed to touch guess[i], secret[i], used[i] and outcomes[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..BOARD_SIZE {
            if guess[i] == secret[i] {
                outcomes[i] = Outcome::Exact;
                used[i] = true;
                exact_count += 1;
            }
        }

        for (i, outcome) in outcomes.iter_mut().enumerate() {
            if *outcome == Outcome::Exact {
                continue;
            }

            let claimed = (0..BOARD_SIZE).find(|&j| !used[j] && secret[j] == guess[i]);
            if let Some(j) = claimed {
                used[j] = true;
                *outcome = Outcome::Misplaced;
            }
        }

        Self {
            outcomes,
            exact_count,
        }
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[Outcome; BOARD_SIZE] {
        &self.outcomes
    }

    /// Number of `Exact` outcomes
    #[inline]
    #[must_use]
    pub const fn exact_count(&self) -> usize {
        self.exact_count
    }

    /// Number of `Misplaced` outcomes
    #[must_use]
    pub fn misplaced_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|&&o| o == Outcome::Misplaced)
            .count()
    }

    /// True when every position is exact
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.exact_count == BOARD_SIZE
    }

    /// One glyph per position, e.g. `"OX  "`
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.outcomes.iter().map(|o| o.glyph()).collect()
    }
}
