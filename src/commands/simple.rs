//! Simple line-oriented game mode
//!
//! Plays one game over plain stdin/stdout without the TUI.

use crate::core::{BOARD_SIZE, Code, NUM_CODES};
use crate::game::{Game, GameState};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run one game on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if stdin closes before the game ends.
pub fn run_simple(game: &mut Game) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_simple(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Play one game, reading guesses from `input` and writing to `output`
///
/// Malformed guesses are answered with `Invalid input` and re-prompted; they
/// never cost a turn.
///
/// # Errors
///
/// Returns an error on I/O failure or if `input` ends before the game does.
pub fn play_simple<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "Size: {BOARD_SIZE}, Codes: {NUM_CODES}, Guesses: {}",
        game.max_guesses()
    )?;

    while !game.is_over() {
        writeln!(output, "Guess {}:", game.guesses_used() + 1)?;
        let guess = read_guess(input, output)?;

        let feedback = game.submit(guess)?;
        writeln!(output, "{}", feedback.glyphs())?;
    }

    match game.state() {
        GameState::Won { turns } => {
            debug!(turns, "simple game won");
            writeln!(output, "{}", "You won!".green().bold())?;
        }
        GameState::Exhausted => {
            if let Some(secret) = game.reveal() {
                writeln!(output, "Game over. Correct code: {secret}")?;
            }
        }
        GameState::Playing => unreachable!("loop exits only when the game is over"),
    }

    output.flush()?;
    Ok(())
}

/// Read lines until one parses as a code
fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Code> {
    let mut line = String::new();

    loop {
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }

        match line.parse::<Code>() {
            Ok(code) => return Ok(code),
            Err(e) => {
                debug!(input = line.trim_end(), error = %e, "rejected guess");
                writeln!(output, "Invalid input")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(secret: &str, max_guesses: usize, transcript: &str) -> (Result<()>, String, Game) {
        let mut game = Game::with_max_guesses(secret.parse().unwrap(), max_guesses);
        let mut input = Cursor::new(transcript.as_bytes());
        let mut output = Vec::new();

        let result = play_simple(&mut game, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn win_after_two_guesses() {
        let (result, output, game) = play("ABCD", 8, "dcba\nABCD\n");

        assert!(result.is_ok());
        assert!(output.starts_with("Size: 4, Codes: 6, Guesses: 8\n"));
        assert!(output.contains("Guess 1:\nXXXX\n"));
        assert!(output.contains("Guess 2:\nOOOO\n"));
        assert!(output.contains("You won!"));
        assert!(!output.contains("Game over"));
        assert_eq!(game.state(), GameState::Won { turns: 2 });
    }

    #[test]
    fn invalid_input_is_reprompted_without_costing_a_turn() {
        let (result, output, game) = play("ABCD", 8, "abc\n12ab\nzzzz\nabcd\n");

        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid input").count(), 3);
        assert!(!output.contains("Guess 2:"));
        assert_eq!(game.guesses_used(), 1);
    }

    #[test]
    fn exhausted_budget_reveals_secret() {
        let (result, output, game) = play("ABCD", 2, "aaaa\nbbbb\n");

        assert!(result.is_ok());
        assert!(output.contains("Guess 1:\nO   \n"));
        assert!(output.contains("Guess 2:\n O  \n"));
        assert!(output.contains("Game over. Correct code: ABCD"));
        assert!(!output.contains("You won!"));
        assert_eq!(game.state(), GameState::Exhausted);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, output, game) = play("ABCD", 8, "aaaa\n");

        assert!(result.is_err());
        assert!(output.contains("Guess 2:"));
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn crlf_input_is_accepted() {
        let (result, _, game) = play("CAFE", 8, "cafe\r\n");

        assert!(result.is_ok());
        assert_eq!(game.state(), GameState::Won { turns: 1 });
    }
}
