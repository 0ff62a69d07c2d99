//! Daily session: wires input into the engine and records results
//!
//! The first game finished on a given date is the official one and updates
//! the stored stats. Any later game that day (after a restart, or via
//! [`DailySession::practice`]) is practice and is not recorded.

use crate::core::{Cell, GuessRow, KeyboardStatusMap, WORD_LENGTH};
use crate::game::{GameState, GuessEngine, GuessError, KeyOutcome, KeyToken, Keypad, MAX_GUESSES};
use crate::puzzle::{ConfigurationError, PuzzleSelector};
use crate::stats::{Stats, StatsStore};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;

/// Title prefix used in share text
pub const SHARE_TITLE: &str = "Wordle Daily";

/// One player's game for one calendar day
#[derive(Debug)]
pub struct DailySession<S> {
    date: NaiveDate,
    puzzle_number: u64,
    engine: GuessEngine,
    keypad: Keypad,
    stats_store: StatsStore<S>,
    stats: Stats,
    official: bool,
}

impl<S: KeyValueStore> DailySession<S> {
    /// Start the puzzle for `date`
    ///
    /// # Errors
    /// Returns `ConfigurationError::DateBeforeEpoch` if `date` has no puzzle.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::puzzle::{EPOCH, PuzzleSelector};
    /// use wordle_daily::session::DailySession;
    /// use wordle_daily::storage::MemoryStore;
    ///
    /// let selector = PuzzleSelector::new(["CRANE"]).unwrap();
    /// let mut session = DailySession::new(MemoryStore::new(), &selector, EPOCH).unwrap();
    ///
    /// session.submit("CRANE").unwrap();
    /// assert_eq!(session.stats().won, 1);
    /// ```
    pub fn new(
        store: S,
        selector: &PuzzleSelector,
        date: NaiveDate,
    ) -> Result<Self, ConfigurationError> {
        let target = selector.select(date)?.clone();
        let puzzle_number = selector.puzzle_number(date)?;

        let stats_store = StatsStore::new(store);
        let stats = stats_store.load();
        let official = !stats_store.is_solved(date);

        log::info!(
            "puzzle #{puzzle_number} for {date} ({})",
            if official { "official" } else { "practice" }
        );

        Ok(Self {
            date,
            puzzle_number,
            engine: GuessEngine::new(target),
            keypad: Keypad::new(),
            stats_store,
            stats,
            official,
        })
    }

    /// Feed one key
    ///
    /// # Errors
    /// See [`Keypad::press`].
    pub fn press(&mut self, token: KeyToken) -> Result<KeyOutcome, GuessError> {
        let outcome = self.keypad.press(&mut self.engine, token)?;
        if matches!(outcome, KeyOutcome::Submitted(_)) {
            self.after_guess();
        }
        Ok(outcome)
    }

    /// Submit a whole word, bypassing the keypad
    ///
    /// # Errors
    /// See [`GuessEngine::submit_guess`].
    pub fn submit(&mut self, candidate: &str) -> Result<GuessRow, GuessError> {
        let row = self.engine.submit_guess(candidate)?;
        self.keypad.clear();
        self.after_guess();
        Ok(row)
    }

    /// Replay today's word without touching stats
    ///
    /// Only a finished game can be replaced; returns `false` and changes
    /// nothing while the current game is still in play.
    pub fn practice(&mut self) -> bool {
        if !self.engine.state().is_terminal() {
            return false;
        }
        self.engine.reset();
        self.keypad.clear();
        self.official = false;
        log::info!("practice round for puzzle #{}", self.puzzle_number);
        true
    }

    fn after_guess(&mut self) {
        let state = self.engine.state();
        if !state.is_terminal() || !self.official {
            return;
        }

        self.official = false;
        match state {
            GameState::Won => self.stats.record_win(self.engine.guesses_used()),
            GameState::Lost => self.stats.record_loss(),
            GameState::Playing => {}
        }

        log::info!(
            "puzzle #{} {state} in {} guesses; streak {}",
            self.puzzle_number,
            self.engine.guesses_used(),
            self.stats.streak
        );

        // The game result stands even if it cannot be persisted
        if let Err(err) = self.stats_store.save(&self.stats) {
            log::error!("failed to save stats: {err}");
        }
        if let Err(err) = self.stats_store.mark_solved(self.date) {
            log::error!("failed to mark {} solved: {err}", self.date);
        }
    }

    /// Share text titled with the puzzle number
    #[must_use]
    pub fn share_text(&self) -> String {
        crate::game::share_text(&format!("{SHARE_TITLE} #{}", self.puzzle_number), &self.engine)
    }

    /// Board with the pending word filled in
    #[must_use]
    pub fn grid(&self) -> [[Cell; WORD_LENGTH]; MAX_GUESSES] {
        self.engine.grid(self.keypad.pending())
    }

    #[must_use]
    pub const fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatusMap {
        self.engine.keyboard()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.engine.state()
    }

    #[must_use]
    pub fn pending(&self) -> &str {
        self.keypad.pending()
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// True until the day's first game is finished
    #[must_use]
    pub const fn is_official(&self) -> bool {
        self.official
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn puzzle_number(&self) -> u64 {
        self.puzzle_number
    }
}
