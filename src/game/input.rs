//! Key-by-key input surface
//!
//! Letters build up a pending candidate, `Delete` removes the last letter and
//! `Submit` hands the candidate to the engine.

use super::engine::GuessEngine;
use super::error::GuessError;
use crate::core::{GuessRow, WORD_LENGTH};

/// One keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// Uppercase letter A-Z
    Letter(u8),
    Submit,
    Delete,
}

impl KeyToken {
    /// Letter token for an ASCII letter (either case)
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self::Letter((ch as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Pending word changed
    Edited,
    /// Key had no effect (full row, or delete on an empty row)
    Ignored,
    /// Pending word was scored
    Submitted(GuessRow),
}

/// Pending candidate being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keypad {
    pending: String,
}

impl Keypad {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key to `engine`
    ///
    /// # Errors
    /// Returns `GameAlreadyOver` for any key once the game has ended, and
    /// whatever [`GuessEngine::submit_guess`] reports on `Submit`. The
    /// pending word is kept when a submission is rejected.
    pub fn press(
        &mut self,
        engine: &mut GuessEngine,
        token: KeyToken,
    ) -> Result<KeyOutcome, GuessError> {
        if engine.is_over() {
            return Err(GuessError::GameAlreadyOver);
        }

        match token {
            KeyToken::Letter(letter) => {
                if self.pending.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
                    return Ok(KeyOutcome::Ignored);
                }
                self.pending.push(char::from(letter.to_ascii_uppercase()));
                Ok(KeyOutcome::Edited)
            }
            KeyToken::Delete => Ok(if self.pending.pop().is_some() {
                KeyOutcome::Edited
            } else {
                KeyOutcome::Ignored
            }),
            KeyToken::Submit => {
                let row = engine.submit_guess(&self.pending)?;
                self.pending.clear();
                Ok(KeyOutcome::Submitted(row))
            }
        }
    }

    /// Letters typed so far
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameState;

    fn engine() -> GuessEngine {
        GuessEngine::new(Word::new("CRANE").unwrap())
    }

    fn type_word(keypad: &mut Keypad, engine: &mut GuessEngine, word: &str) {
        for ch in word.chars() {
            keypad
                .press(engine, KeyToken::from_char(ch).unwrap())
                .unwrap();
        }
    }

    #[test]
    fn from_char_normalizes_case() {
        assert_eq!(KeyToken::from_char('q'), Some(KeyToken::Letter(b'Q')));
        assert_eq!(KeyToken::from_char('Q'), Some(KeyToken::Letter(b'Q')));
        assert_eq!(KeyToken::from_char('1'), None);
        assert_eq!(KeyToken::from_char('é'), None);
    }

    #[test]
    fn letters_are_capped_at_five() {
        let mut engine = engine();
        let mut keypad = Keypad::new();
        type_word(&mut keypad, &mut engine, "SLATE");

        assert_eq!(
            keypad.press(&mut engine, KeyToken::Letter(b'X')),
            Ok(KeyOutcome::Ignored)
        );
        assert_eq!(keypad.pending(), "SLATE");
    }

    #[test]
    fn delete_removes_last_letter() {
        let mut engine = engine();
        let mut keypad = Keypad::new();
        type_word(&mut keypad, &mut engine, "sla");

        assert_eq!(
            keypad.press(&mut engine, KeyToken::Delete),
            Ok(KeyOutcome::Edited)
        );
        assert_eq!(keypad.pending(), "SL");

        keypad.clear();
        assert_eq!(
            keypad.press(&mut engine, KeyToken::Delete),
            Ok(KeyOutcome::Ignored)
        );
    }

    #[test]
    fn short_submit_is_rejected_and_kept() {
        let mut engine = engine();
        let mut keypad = Keypad::new();
        type_word(&mut keypad, &mut engine, "CRA");

        assert_eq!(
            keypad.press(&mut engine, KeyToken::Submit),
            Err(GuessError::InvalidGuessLength(3))
        );
        assert_eq!(keypad.pending(), "CRA");
        assert_eq!(engine.guesses_used(), 0);
    }

    #[test]
    fn submit_scores_and_clears() {
        let mut engine = engine();
        let mut keypad = Keypad::new();
        type_word(&mut keypad, &mut engine, "CRANE");

        let outcome = keypad.press(&mut engine, KeyToken::Submit).unwrap();
        assert!(matches!(outcome, KeyOutcome::Submitted(row) if row.is_solved()));
        assert_eq!(keypad.pending(), "");
        assert_eq!(engine.state(), GameState::Won);
    }

    #[test]
    fn no_keys_accepted_after_game_over() {
        let mut engine = engine();
        let mut keypad = Keypad::new();
        type_word(&mut keypad, &mut engine, "CRANE");
        keypad.press(&mut engine, KeyToken::Submit).unwrap();

        for token in [KeyToken::Letter(b'A'), KeyToken::Delete, KeyToken::Submit] {
            assert_eq!(
                keypad.press(&mut engine, token),
                Err(GuessError::GameAlreadyOver)
            );
        }
        assert_eq!(keypad.pending(), "");
    }
}
