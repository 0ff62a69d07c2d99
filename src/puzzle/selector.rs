//! Date-seeded target selection

use super::ConfigurationError;
use crate::core::Word;
use chrono::NaiveDate;

/// Day zero of the puzzle calendar
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Picks the same word for everyone on the same calendar day
///
/// The word for a date is `words[days_since_epoch % words.len()]`, so the
/// list order fixes the whole schedule and it repeats every `len` days.
#[derive(Debug, Clone)]
pub struct PuzzleSelector {
    words: Vec<Word>,
    epoch: NaiveDate,
}

impl PuzzleSelector {
    /// Build a selector over `words` using the built-in epoch
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the list is empty or any entry is not
    /// five uppercase letters A-Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::puzzle::{EPOCH, PuzzleSelector};
    ///
    /// let selector = PuzzleSelector::new(["CRANE", "SLATE"]).unwrap();
    /// assert_eq!(selector.select(EPOCH).unwrap().text(), "CRANE");
    ///
    /// let next_day = EPOCH.succ_opt().unwrap();
    /// assert_eq!(selector.select(next_day).unwrap().text(), "SLATE");
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_epoch(words, EPOCH)
    }

    /// Build a selector with a custom day zero
    ///
    /// # Errors
    /// Same as [`PuzzleSelector::new`].
    pub fn with_epoch<I, S>(words: I, epoch: NaiveDate) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, entry)| validate_entry(index, entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigurationError::EmptyWordList);
        }

        log::debug!("puzzle selector ready: {} words, epoch {epoch}", words.len());

        Ok(Self { words, epoch })
    }

    /// Whole days from the epoch to `date`
    ///
    /// # Errors
    /// Returns `ConfigurationError::DateBeforeEpoch` for dates before the epoch.
    pub fn day_offset(&self, date: NaiveDate) -> Result<u64, ConfigurationError> {
        let days = date.signed_duration_since(self.epoch).num_days();
        u64::try_from(days).map_err(|_| ConfigurationError::DateBeforeEpoch {
            date,
            epoch: self.epoch,
        })
    }

    /// Public puzzle number for `date` (the epoch is puzzle #0)
    ///
    /// # Errors
    /// Returns `ConfigurationError::DateBeforeEpoch` for dates before the epoch.
    pub fn puzzle_number(&self, date: NaiveDate) -> Result<u64, ConfigurationError> {
        self.day_offset(date)
    }

    /// Target word for `date`
    ///
    /// # Errors
    /// Returns `ConfigurationError::DateBeforeEpoch` for dates before the epoch.
    pub fn select(&self, date: NaiveDate) -> Result<&Word, ConfigurationError> {
        let offset = self.day_offset(date)?;
        // len() fits in u64 on every supported target
        let index = (offset % self.words.len() as u64) as usize;
        log::debug!("puzzle for {date}: day {offset}, index {index}");
        Ok(&self.words[index])
    }

    /// Day zero of this selector
    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Number of words in the rotation
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn validate_entry(index: usize, entry: &str) -> Result<Word, ConfigurationError> {
    let word = Word::new(entry).map_err(|source| ConfigurationError::InvalidWord {
        index,
        word: entry.to_string(),
        source,
    })?;

    if word.text() != entry {
        return Err(ConfigurationError::NotUppercase {
            index,
            word: entry.to_string(),
        });
    }

    Ok(word)
}
