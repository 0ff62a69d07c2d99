//! Daily puzzle selection
//!
//! Derives today's target word from the calendar date and a fixed word list.

mod selector;

pub use selector::{EPOCH, PuzzleSelector};

use crate::core::WordError;
use chrono::NaiveDate;
use std::fmt;

/// Word list or date cannot produce a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    EmptyWordList,
    InvalidWord {
        index: usize,
        word: String,
        source: WordError,
    },
    NotUppercase {
        index: usize,
        word: String,
    },
    DateBeforeEpoch {
        date: NaiveDate,
        epoch: NaiveDate,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::InvalidWord {
                index,
                word,
                source,
            } => write!(f, "Word list entry {index} ({word:?}) is invalid: {source}"),
            Self::NotUppercase { index, word } => {
                write!(f, "Word list entry {index} ({word:?}) must be uppercase")
            }
            Self::DateBeforeEpoch { date, epoch } => {
                write!(f, "No puzzle for {date}: the first puzzle is {epoch}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}
