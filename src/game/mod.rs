//! Game session state
//!
//! Owns the secret and the turn history for one game.

mod session;

pub use session::{Game, GameError, GameState, Turn};
