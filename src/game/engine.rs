//! Attempt loop and win/loss state machine

use super::error::GuessError;
use crate::core::{Cell, GuessRow, KeyboardStatusMap, WORD_LENGTH, Word};
use std::fmt;

/// Attempts allowed per game
pub const MAX_GUESSES: usize = 6;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Won or lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Scores guesses against one target and tracks the game
///
/// Transitions: `Playing -> Won` on an exact match, `Playing -> Lost` when
/// the sixth guess misses, and `Won | Lost -> Playing` only via [`reset`].
///
/// [`reset`]: GuessEngine::reset
#[derive(Debug, Clone)]
pub struct GuessEngine {
    target: Word,
    history: Vec<GuessRow>,
    keyboard: KeyboardStatusMap,
    state: GameState,
}

impl GuessEngine {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            history: Vec::with_capacity(MAX_GUESSES),
            keyboard: KeyboardStatusMap::new(),
            state: GameState::Playing,
        }
    }

    /// Score one guess and advance the game
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `InvalidGuessLength` unless the candidate has five characters
    /// - `InvalidCharacter` for anything outside A-Z (lowercase is accepted)
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    /// use wordle_daily::game::{GameState, GuessEngine, GuessError};
    ///
    /// let mut engine = GuessEngine::new(Word::new("CRANE").unwrap());
    /// assert_eq!(engine.submit_guess("CRAN"), Err(GuessError::InvalidGuessLength(4)));
    ///
    /// let row = engine.submit_guess("crane").unwrap();
    /// assert!(row.is_solved());
    /// assert_eq!(engine.state(), GameState::Won);
    /// ```
    pub fn submit_guess(&mut self, candidate: &str) -> Result<GuessRow, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::GameAlreadyOver);
        }

        let guess = Word::new(candidate)?;
        let row = GuessRow::score(&guess, &self.target);

        self.history.push(row);
        self.keyboard.apply(&row);

        if guess == self.target {
            self.state = GameState::Won;
        } else if self.history.len() == MAX_GUESSES {
            self.state = GameState::Lost;
        }

        log::debug!(
            "guess {}/{MAX_GUESSES}: {} {} ({})",
            self.history.len(),
            guess,
            row.to_emoji(),
            self.state
        );

        Ok(row)
    }

    /// Start over against the same target
    pub fn reset(&mut self) {
        self.history.clear();
        self.keyboard.clear();
        self.state = GameState::Playing;
    }

    /// Share grid: one line of glyphs per guess, no letters
    #[must_use]
    pub fn encode_share_summary(&self) -> String {
        self.history
            .iter()
            .map(GuessRow::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full board for rendering
    ///
    /// Scored rows first, then `pending` (up to five letters) on the next free
    /// row while the game is still running, then blank rows.
    #[must_use]
    pub fn grid(&self, pending: &str) -> [[Cell; WORD_LENGTH]; MAX_GUESSES] {
        let mut grid = [[Cell::EMPTY; WORD_LENGTH]; MAX_GUESSES];

        for (row, scored) in grid.iter_mut().zip(&self.history) {
            *row = *scored.cells();
        }

        if self.state == GameState::Playing
            && let Some(row) = grid.get_mut(self.history.len())
        {
            for (cell, letter) in row.iter_mut().zip(pending.bytes()) {
                *cell = Cell::pending(letter.to_ascii_uppercase());
            }
        }

        grid
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRow] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatusMap {
        &self.keyboard
    }

    /// The word being guessed, for reveal after a loss
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}
