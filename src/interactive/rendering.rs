//! TUI rendering with ratatui
//!
//! Board, progress and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{BOARD_SIZE, Code, NUM_CODES, Outcome, Symbol};
use crate::game::GameState;
use crate::output::formatters::outcome_peg;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Display colour for a symbol
fn symbol_color(symbol: Symbol) -> Color {
    match symbol.index() {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        _ => Color::Cyan,
    }
}

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Exact => Color::Green,
        Outcome::Misplaced => Color::Yellow,
        Outcome::Absent => Color::DarkGray,
    }
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.symbols()
        .iter()
        .map(|&s| {
            Span::styled(
                format!(" {s} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(symbol_color(s))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .game
        .turns()
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let mut spans = vec![Span::raw(format!("{:>2}: ", i + 1))];
            spans.extend(code_spans(&turn.guess));
            spans.push(Span::raw("  "));
            spans.extend(turn.feedback.outcomes().iter().map(|&o| {
                Span::styled(
                    outcome_peg(o).to_string(),
                    Style::default().fg(outcome_color(o)),
                )
            }));
            Line::from(spans)
        })
        .collect();

    // Empty rows for the remaining budget
    for i in app.game.guesses_used()..app.game.max_guesses() {
        lines.push(Line::from(Span::styled(
            format!("{:>2}: {}", i + 1, " · ".repeat(BOARD_SIZE)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(secret) = app.game.reveal() {
        lines.push(Line::from(""));
        let mut spans = vec![Span::raw("Secret: ")];
        spans.extend(code_spans(&secret));
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guess budget gauge
            Constraint::Length(5), // Legend
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.guesses_used();
    let max = app.game.max_guesses();
    let progress_pct = (used * 100 / max.max(1)).min(100) as u16;

    let color = match app.game.state() {
        GameState::Won { .. } => Color::Green,
        GameState::Exhausted => Color::Red,
        GameState::Playing => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(progress_pct)
        .label(format!("{used}/{max}"));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let symbols: Vec<Span> = (0..NUM_CODES as u8)
        .filter_map(Symbol::new)
        .map(|s| Span::styled(s.to_string(), Style::default().fg(symbol_color(s))))
        .collect();

    let pegs = [Outcome::Exact, Outcome::Misplaced, Outcome::Absent]
        .into_iter()
        .zip(["exact", "misplaced", "absent"])
        .flat_map(|(o, label)| {
            [
                Span::styled(
                    outcome_peg(o).to_string(),
                    Style::default().fg(outcome_color(o)),
                ),
                Span::raw(format!(" {label}  ")),
            ]
        })
        .collect::<Vec<_>>();

    let mut symbol_line = vec![Span::raw("Symbols: ")];
    symbol_line.extend(symbols);

    let legend = Paragraph::new(vec![Line::from(symbol_line), Line::from(pegs)]).block(
        Block::default()
            .title(" Legend ")
            .borders(Borders::ALL),
    );

    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            " Enter Guess (letters A-F) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let remaining_text = format!("Guesses left: {}", app.game.guesses_remaining());
    let remaining = Paragraph::new(remaining_text).alignment(Alignment::Center);
    f.render_widget(remaining, chunks[1]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Delete"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
