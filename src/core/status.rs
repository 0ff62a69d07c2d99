//! Per-letter feedback classification
//!
//! Variant order is significant: `Empty < Absent < Present < Correct` is the
//! precedence the on-screen keyboard uses when merging rows.

use std::fmt;

/// Feedback for a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// No guess has reached this cell yet
    #[default]
    Empty,
    /// Letter is not in any unclaimed position of the target
    Absent,
    /// Letter is in the target at a different, unclaimed position
    Present,
    /// Letter is in its exact target position
    Correct,
}

impl LetterStatus {
    /// Share glyph for this status
    ///
    /// Scored rows only ever contain the three non-empty glyphs.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '·',
        }
    }

    /// Parse a feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[cfg(test)]
    #[must_use]
    pub(crate) const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// One grid cell: an uppercase letter (or blank) and its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub letter: Option<u8>,
    pub status: LetterStatus,
}

impl Cell {
    /// Cell with no letter typed into it
    pub const EMPTY: Self = Self {
        letter: None,
        status: LetterStatus::Empty,
    };

    /// Scored cell
    #[must_use]
    pub const fn scored(letter: u8, status: LetterStatus) -> Self {
        Self {
            letter: Some(letter),
            status,
        }
    }

    /// Typed but not yet submitted
    #[must_use]
    pub const fn pending(letter: u8) -> Self {
        Self {
            letter: Some(letter),
            status: LetterStatus::Empty,
        }
    }

    /// Letter as a displayable char, space when blank
    #[must_use]
    pub fn letter_char(self) -> char {
        self.letter.map_or(' ', char::from)
    }
}
