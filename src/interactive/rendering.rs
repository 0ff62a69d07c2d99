//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and a stats bar.

use super::app::{App, MessageStyle};
use crate::core::{Cell, KEYBOARD_ROWS, LetterStatus};
use crate::game::GameState;
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(2),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Colours for a tile in the given status
fn tile_style(status: LetterStatus) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        LetterStatus::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => base.fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Empty => base.fg(Color::White),
    }
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mode = if app.session.is_official() {
        ""
    } else {
        " (practice)"
    };
    let title = format!(
        "🟩 WORDLE DAILY #{} - {}{mode}",
        app.session.puzzle_number(),
        app.session.date()
    );

    let header = Paragraph::new(title)
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

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let grid = app.session.grid();

    let mut lines = Vec::with_capacity(grid.len() * 2);
    for row in &grid {
        let spans: Vec<Span> = row
            .iter()
            .flat_map(|&cell: &Cell| {
                [
                    Span::styled(format!(" {} ", cell.letter_char()), tile_style(cell.status)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(letter)),
                            tile_style(keyboard.display_status(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.session.stats();
    let engine = app.session.engine();

    let summary = format!(
        "Played: {} | Win: {:.0}% | Streak: {} (max {}) | State: {} | Guesses left: {}",
        stats.played,
        stats.win_percentage(),
        stats.streak,
        stats.max_streak,
        engine.state(),
        engine.remaining_guesses()
    );

    let help_text = if engine.state() == GameState::Playing {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    } else {
        "p: Practice | Esc: Quit"
    };

    let status = Paragraph::new(vec![
        Line::from(summary),
        Line::styled(help_text, Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    f.render_widget(status, area);
}
