//! Mastermind
//!
//! A Mastermind code-breaking game: guess the secret row of symbols, get one
//! exact/misplaced/absent outcome per position, crack it before the guess
//! budget runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback};
//!
//! let secret: Code = "ABCD".parse().unwrap();
//! let guess: Code = "DCBA".parse().unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.glyphs(), "XXXX");
//! assert_eq!(feedback.exact_count(), 0);
//! ```

// Core domain types and scoring
pub mod core;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
