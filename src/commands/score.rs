//! Score a single guess against a chosen target

use crate::core::{GuessRow, Word, WordError};

/// Feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub target: String,
    pub row: GuessRow,
}

/// Score `guess` against `target` without starting a game
///
/// # Errors
///
/// Returns `WordError` if either word is not five letters A-Z.
pub fn score_words(target: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;

    Ok(ScoreResult {
        row: GuessRow::score(&guess, &target),
        target: target.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_case_insensitively() {
        let result = score_words("level", "alley").unwrap();
        assert_eq!(result.target, "LEVEL");
        assert_eq!(result.row.to_emoji(), "⬜🟨🟨🟩⬜");
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!(
            score_words("LEVELS", "ALLEY"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            score_words("LEVEL", "AL1EY"),
            Err(WordError::InvalidCharacter('1'))
        );
    }
}
