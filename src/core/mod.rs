//! Core domain types for Mastermind
//!
//! Symbols, codes and the feedback scoring engine. Everything here is pure:
//! no I/O, no global state, no randomness beyond a caller-supplied RNG.

mod code;
mod feedback;

pub use code::{Code, CodeError, Symbol};
pub use feedback::{Feedback, Outcome};

/// Number of positions in a code
pub const BOARD_SIZE: usize = 4;

/// Number of distinct symbols (`A`..`F`)
pub const NUM_CODES: usize = 6;

/// Default guess budget for one game
pub const MAX_GUESS: usize = 8;

/// Number of distinct codes (`NUM_CODES ^ BOARD_SIZE`)
pub const CODE_SPACE: usize = NUM_CODES.pow(BOARD_SIZE as u32);
