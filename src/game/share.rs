//! Share text for posting results outside the game

use super::engine::{GuessEngine, MAX_GUESSES};

/// `"<title>\n<rows>/6\n\n<grid>"`
///
/// The grid comes from [`GuessEngine::encode_share_summary`] and never
/// contains letters.
///
/// # Examples
/// ```
/// use wordle_daily::core::Word;
/// use wordle_daily::game::{GuessEngine, share_text};
///
/// let mut engine = GuessEngine::new(Word::new("CRANE").unwrap());
/// engine.submit_guess("SLATE").unwrap();
/// engine.submit_guess("CRANE").unwrap();
///
/// assert_eq!(
///     share_text("Wordle Daily #7", &engine),
///     "Wordle Daily #7\n2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"
/// );
/// ```
#[must_use]
pub fn share_text(title: &str, engine: &GuessEngine) -> String {
    format!(
        "{title}\n{}/{MAX_GUESSES}\n\n{}",
        engine.guesses_used(),
        engine.encode_share_summary()
    )
}
