//! One game of Mastermind: secret, guess budget and turn history

use crate::core::{Code, Feedback, MAX_GUESS};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won { turns: usize },
    Exhausted,
}

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Error type for game actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game is already over")]
    Finished,
}

/// A single game session
///
/// The secret is fixed at construction and never changes. Each call to
/// [`Game::submit`] scores one guess and records it.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Code,
    max_guesses: usize,
    turns: Vec<Turn>,
    state: GameState,
}

impl Game {
    /// Start a game with the default budget of `MAX_GUESS` guesses
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self::with_max_guesses(secret, MAX_GUESS)
    }

    /// Start a game with a custom guess budget
    ///
    /// # Panics
    /// Panics in debug mode if `max_guesses` is zero
    #[must_use]
    pub fn with_max_guesses(secret: Code, max_guesses: usize) -> Self {
        debug_assert!(max_guesses > 0, "Guess budget must be positive");

        Self {
            secret,
            max_guesses,
            turns: Vec::with_capacity(max_guesses),
            state: GameState::Playing,
        }
    }

    /// Start a game with a randomly drawn secret
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_guesses: usize) -> Self {
        let game = Self::with_max_guesses(Code::random(rng), max_guesses);
        info!(max_guesses, "new game");
        game
    }

    /// Score a guess and record the turn
    ///
    /// # Errors
    /// Returns `GameError::Finished` if the game was already won or exhausted.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{Game, GameState};
    ///
    /// let mut game = Game::new("ABCD".parse().unwrap());
    /// let feedback = game.submit("ABDC".parse().unwrap()).unwrap();
    /// assert_eq!(feedback.glyphs(), "OOXX");
    ///
    /// game.submit("ABCD".parse().unwrap()).unwrap();
    /// assert_eq!(game.state(), GameState::Won { turns: 2 });
    /// assert!(game.submit("ABCD".parse().unwrap()).is_err());
    /// ```
    pub fn submit(&mut self, guess: Code) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }

        let feedback = Feedback::score(&self.secret, &guess);
        self.turns.push(Turn { guess, feedback });

        let turn = self.turns.len();
        debug!(
            turn,
            guess = %guess,
            exact = feedback.exact_count(),
            misplaced = feedback.misplaced_count(),
            "scored guess"
        );

        if feedback.is_win() {
            self.state = GameState::Won { turns: turn };
            info!(turns = turn, "game won");
        } else if turn >= self.max_guesses {
            self.state = GameState::Exhausted;
            info!(secret = %self.secret, "guess budget exhausted");
        }

        Ok(feedback)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.turns.len())
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn reveal(&self) -> Option<Code> {
        self.is_over().then_some(self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn new_game_is_playing() {
        let game = Game::new(code("ABCD"));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.max_guesses(), MAX_GUESS);
        assert_eq!(game.guesses_used(), 0);
        assert_eq!(game.guesses_remaining(), MAX_GUESS);
        assert!(game.reveal().is_none());
    }

    #[test]
    fn submit_records_turns() {
        let mut game = Game::new(code("ABCD"));
        let feedback = game.submit(code("DCBA")).unwrap();

        assert_eq!(feedback.misplaced_count(), 4);
        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.turns()[0].guess, code("DCBA"));
        assert_eq!(game.turns()[0].feedback, feedback);
        assert_eq!(game.guesses_remaining(), MAX_GUESS - 1);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn first_guess_win() {
        let mut game = Game::new(code("FEED"));
        let feedback = game.submit(code("feed")).unwrap();

        assert!(feedback.is_win());
        assert_eq!(game.state(), GameState::Won { turns: 1 });
        assert_eq!(game.reveal(), Some(code("FEED")));
    }

    #[test]
    fn budget_exhaustion() {
        let mut game = Game::with_max_guesses(code("ABCD"), 3);

        for _ in 0..3 {
            game.submit(code("AAAA")).unwrap();
        }

        assert_eq!(game.state(), GameState::Exhausted);
        assert_eq!(game.guesses_remaining(), 0);
        assert_eq!(game.reveal(), Some(code("ABCD")));
    }

    #[test]
    fn win_on_last_guess_is_a_win() {
        let mut game = Game::with_max_guesses(code("ABCD"), 2);
        game.submit(code("AAAA")).unwrap();
        game.submit(code("ABCD")).unwrap();

        assert_eq!(game.state(), GameState::Won { turns: 2 });
    }

    #[test]
    fn submit_after_game_over_fails() {
        let mut game = Game::new(code("ABCD"));
        game.submit(code("ABCD")).unwrap();

        assert_eq!(game.submit(code("ABCD")), Err(GameError::Finished));
        assert_eq!(game.turns().len(), 1);
    }

    #[test]
    fn random_game_is_reproducible() {
        let mut first = Game::random(&mut StdRng::seed_from_u64(42), MAX_GUESS);
        let mut second = Game::random(&mut StdRng::seed_from_u64(42), MAX_GUESS);

        let guess = code("ABCD");
        assert_eq!(first.submit(guess), second.submit(guess));
    }
}
