//! Today's puzzle summary

use crate::puzzle::{ConfigurationError, PuzzleSelector};
use crate::stats::StatsStore;
use crate::storage::KeyValueStore;
use chrono::NaiveDate;

/// Puzzle details for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub date: NaiveDate,
    pub puzzle_number: u64,
    pub word_count: usize,
    pub solved: bool,
    pub target: String,
}

/// Look up the puzzle for `date`
///
/// # Errors
///
/// Returns `ConfigurationError::DateBeforeEpoch` if `date` has no puzzle.
pub fn today_info<S: KeyValueStore>(
    selector: &PuzzleSelector,
    stats_store: &StatsStore<S>,
    date: NaiveDate,
) -> Result<TodayInfo, ConfigurationError> {
    Ok(TodayInfo {
        date,
        puzzle_number: selector.puzzle_number(date)?,
        word_count: selector.len(),
        solved: stats_store.is_solved(date),
        target: selector.select(date)?.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::EPOCH;
    use crate::storage::MemoryStore;

    #[test]
    fn reports_puzzle_and_solved_flag() {
        let selector = PuzzleSelector::new(["CRANE", "SLATE"]).unwrap();
        let mut stats_store = StatsStore::new(MemoryStore::new());
        let date = EPOCH.succ_opt().unwrap();

        let info = today_info(&selector, &stats_store, date).unwrap();
        assert_eq!(info.puzzle_number, 1);
        assert_eq!(info.word_count, 2);
        assert_eq!(info.target, "SLATE");
        assert!(!info.solved);

        stats_store.mark_solved(date).unwrap();
        assert!(today_info(&selector, &stats_store, date).unwrap().solved);
    }
}
