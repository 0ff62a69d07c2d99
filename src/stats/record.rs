//! Cumulative results record

use crate::game::MAX_GUESSES;
use serde::{Deserialize, Serialize};

/// Lifetime results
///
/// Invariants: `won <= played`, `streak <= max_streak`, and the sum of
/// `distribution` equals `won`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    pub streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses; index 0 is a first-guess win
    #[serde(default)]
    pub distribution: [u32; MAX_GUESSES],
}

impl Stats {
    /// Count a win that took `guesses` attempts (1-6)
    pub fn record_win(&mut self, guesses: usize) {
        self.played += 1;
        self.won += 1;
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);

        if let Some(bucket) = guesses
            .checked_sub(1)
            .and_then(|i| self.distribution.get_mut(i))
        {
            *bucket += 1;
        }
    }

    /// Count a loss
    pub fn record_loss(&mut self) {
        self.played += 1;
        self.streak = 0;
    }

    /// Share of games won, 0-100
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_updates_every_counter() {
        let mut stats = Stats::default();
        stats.record_win(3);

        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.distribution, [0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn loss_resets_streak_but_keeps_max() {
        let mut stats = Stats::default();
        stats.record_win(2);
        stats.record_win(4);
        stats.record_loss();

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.max_streak, 2);

        stats.record_win(6);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.distribution.iter().sum::<u32>(), stats.won);
    }

    #[test]
    fn win_percentage() {
        let mut stats = Stats::default();
        assert!(stats.win_percentage().abs() < f64::EPSILON);

        stats.record_win(1);
        stats.record_loss();
        assert!((stats.win_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn json_uses_camel_case() {
        let mut stats = Stats::default();
        stats.record_win(1);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"maxStreak\":1"));
    }

    #[test]
    fn missing_distribution_defaults_to_zero() {
        let stats: Stats =
            serde_json::from_str(r#"{"played":5,"won":4,"streak":2,"maxStreak":3}"#).unwrap();
        assert_eq!(stats.played, 5);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.distribution, [0; MAX_GUESSES]);
    }
}
