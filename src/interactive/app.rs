//! TUI application state and logic

use crate::core::{BOARD_SIZE, Code};
use crate::game::{Game, GameState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub rng: StdRng,
    pub max_guesses: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of turns taken
    pub turn_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(mut rng: StdRng, max_guesses: usize) -> Self {
        let game = Game::random(&mut rng, max_guesses);

        Self {
            game,
            rng,
            max_guesses,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Crack the secret code.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!("Type {BOARD_SIZE} letters from A-F and press Enter"),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                turn_distribution: vec![0; max_guesses + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guess,
        }
    }

    /// Parse the input buffer and score it
    ///
    /// Malformed input is reported as a message and never reaches the game.
    pub fn submit_guess(&mut self) {
        let guess = match self.input_buffer.parse::<Code>() {
            Ok(code) => code,
            Err(e) => {
                self.add_message(&format!("Invalid input: {e}"), MessageStyle::Error);
                return;
            }
        };

        let feedback = match self.game.submit(guess) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        match self.game.state() {
            GameState::Won { turns } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.turn_distribution.get_mut(turns) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match turns {
                    1 => "🎯 FIRST TRY! Unbelievable! 🌟",
                    2 => "🔥 MASTERMIND! Two guesses! 🔥",
                    3 | 4 => "✨ SPLENDID! Code cracked! ✨",
                    _ => "🎉 Code cracked! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::Exhausted => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;

                if let Some(secret) = self.game.reveal() {
                    self.add_message(
                        &format!("Game over. Correct code: {secret}"),
                        MessageStyle::Error,
                    );
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::Playing => {
                self.add_message(
                    &format!(
                        "{} exact, {} misplaced | {} guesses left",
                        feedback.exact_count(),
                        feedback.misplaced_count(),
                        self.game.guesses_remaining()
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::random(&mut self.rng, self.max_guesses);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message(
            "New game started! A fresh secret has been drawn.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Append a typed character to the guess, ignoring anything past the board size
    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.chars().count() < BOARD_SIZE && !c.is_whitespace() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guess => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) => app.push_char(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
