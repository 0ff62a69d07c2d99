//! Persisted player statistics
//!
//! `Stats` is stored as JSON in a [`KeyValueStore`] next to a flag holding
//! the last date whose official puzzle was finished.

mod record;

pub use record::Stats;

use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use std::io;

/// Key holding the JSON-encoded `Stats`
pub const STATS_KEY: &str = "wordle-daily-stats";

/// Key holding the date (YYYY-MM-DD) of the last finished official puzzle
pub const SOLVED_KEY: &str = "wordle-daily-solved";

/// Stats and solved-today flag on top of any key-value store
#[derive(Debug)]
pub struct StatsStore<S> {
    store: S,
}

impl<S: KeyValueStore> StatsStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved stats, or zeros when nothing usable is stored
    pub fn load(&self) -> Stats {
        let Some(json) = self.store.get(STATS_KEY) else {
            return Stats::default();
        };

        serde_json::from_str(&json).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable stats ({err}), starting from zero");
            Stats::default()
        })
    }

    /// # Errors
    ///
    /// Returns an I/O error if the store cannot be written.
    pub fn save(&mut self, stats: &Stats) -> io::Result<()> {
        let json = serde_json::to_string(stats)?;
        self.store.set(STATS_KEY, &json)
    }

    /// Whether the official puzzle for `date` was already finished
    pub fn is_solved(&self, date: NaiveDate) -> bool {
        self.store
            .get(SOLVED_KEY)
            .is_some_and(|value| value == date.to_string())
    }

    /// # Errors
    ///
    /// Returns an I/O error if the store cannot be written.
    pub fn mark_solved(&mut self, date: NaiveDate) -> io::Result<()> {
        self.store.set(SOLVED_KEY, &date.to_string())
    }

    /// Forget stats and the solved flag
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the store cannot be written.
    pub fn clear(&mut self) -> io::Result<()> {
        self.store.remove(STATS_KEY)?;
        self.store.remove(SOLVED_KEY)
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }
}
