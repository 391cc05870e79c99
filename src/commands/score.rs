//! Score command
//!
//! Scores one guess against a chosen target without starting a game.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring a pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns a `WordError` if either word is not five ASCII letters.
pub fn score_pair(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    Ok(ScoreResult {
        feedback: Feedback::calculate(&guess, &target),
        guess: guess.text().to_string(),
        target: target.text().to_string(),
    })
}
