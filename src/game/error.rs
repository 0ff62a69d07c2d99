//! Guess rejection reasons

use crate::core::{WORD_LENGTH, WordError};
use std::fmt;

/// Why a guess was rejected
///
/// Every variant is reported before any state changes, so a rejected guess
/// never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Candidate did not have exactly five characters
    InvalidGuessLength(usize),
    /// Candidate contained something other than A-Z
    InvalidCharacter(char),
    /// The game is already won or lost
    GameAlreadyOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Guess may only contain letters A-Z, found {ch:?}")
            }
            Self::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidGuessLength(len),
            WordError::InvalidCharacter(ch) => Self::InvalidCharacter(ch),
        }
    }
}
