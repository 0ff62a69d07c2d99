//! TUI application state and logic

use crate::game::{GameState, GuessError, KeyOutcome, KeyToken};
use crate::session::DailySession;
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S> {
    pub session: DailySession<S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore> App<S> {
    #[must_use]
    pub fn new(session: DailySession<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message(
            &format!(
                "Puzzle #{}: guess the word in six tries.",
                app.session.puzzle_number()
            ),
            MessageStyle::Info,
        );
        if !app.session.is_official() {
            app.add_message(
                "Already finished today - this round is practice.",
                MessageStyle::Info,
            );
        }

        app
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.session.state().is_terminal() {
            if key.code == KeyCode::Char('p') {
                self.new_practice_round();
            }
            return;
        }

        let token = match key.code {
            KeyCode::Enter => KeyToken::Submit,
            KeyCode::Backspace => KeyToken::Delete,
            KeyCode::Char(c) => match KeyToken::from_char(c) {
                Some(token) => token,
                None => return,
            },
            _ => return,
        };

        self.handle_token(token);
    }

    fn handle_token(&mut self, token: KeyToken) {
        match self.session.press(token) {
            Ok(KeyOutcome::Submitted(_)) => self.announce_result(),
            Ok(KeyOutcome::Edited | KeyOutcome::Ignored) => {}
            Err(GuessError::InvalidGuessLength(_)) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn announce_result(&mut self) {
        let guesses = self.session.engine().guesses_used();

        match self.session.state() {
            GameState::Won => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'p' to practice or Esc to quit.", MessageStyle::Info);
            }
            GameState::Lost => {
                let text = format!("The word was {}", self.session.engine().target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'p' to practice or Esc to quit.", MessageStyle::Info);
            }
            GameState::Playing => {}
        }
    }

    pub fn new_practice_round(&mut self) {
        if !self.session.practice() {
            return;
        }
        self.messages.clear();
        self.add_message(
            "Practice round - same word, results not recorded.",
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
}

/// Run the TUI application
///
/// Returns the session so the caller can print the share text after the
/// terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<S>) -> Result<DailySession<S>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<DailySession<S>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{EPOCH, PuzzleSelector};
    use crate::storage::MemoryStore;

    fn app() -> App<MemoryStore> {
        let selector = PuzzleSelector::new(["CRANE"]).unwrap();
        App::new(DailySession::new(MemoryStore::new(), &selector, EPOCH).unwrap())
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = app();
        type_word(&mut app, "slate");
        assert_eq!(app.session.engine().guesses_used(), 1);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.pending(), "C");
    }

    #[test]
    fn short_word_shows_error() {
        let mut app = app();
        type_word(&mut app, "cra");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.session.engine().guesses_used(), 0);
    }

    #[test]
    fn win_then_practice() {
        let mut app = app();
        type_word(&mut app, "crane");
        assert_eq!(app.session.state(), GameState::Won);
        let successes = app
            .messages
            .iter()
            .filter(|m| m.style == MessageStyle::Success)
            .count();
        assert_eq!(successes, 1);

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.pending(), "");

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.session.state(), GameState::Playing);
        assert!(!app.session.is_official());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for _ in 0..10 {
            type_word(&mut app, "c");
        }
        assert_eq!(app.messages.len(), 5);
    }
}
