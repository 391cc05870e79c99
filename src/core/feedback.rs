//! Wordle feedback calculation and representation
//!
//! Each guess position gets one [`LetterStatus`]:
//! - `Correct` = letter in the right position (green)
//! - `Present` = letter in the word, wrong position (yellow)
//! - `Absent` = letter not in the word, or every copy already accounted for (gray)

use super::word::{WORD_LENGTH, Word, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Whether this mark proves the letter occurs in the target
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, positionally aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Wrap raw statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's exact rules for duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and remove them from the
    ///    target's letter pool
    /// 2. Second pass: mark a remaining position present while its letter
    ///    still has copies left in the pool, consuming one copy each time
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::calculate(&guess, &target).statuses(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut pool = target.letter_counts();

        // Index needed to compare guess[i], target[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                result[i] = LetterStatus::Correct;
                if let Some(count) = pool.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = pool.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at one position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score a raw guess string against a raw target string
///
/// Both inputs must be five ASCII letters (any case).
///
/// # Errors
/// Returns the first `WordError` found, checking the guess before the target.
///
/// # Examples
/// ```
/// use wordle_game::core::score;
///
/// let feedback = score("speed", "erase").unwrap();
/// assert_eq!(feedback.to_emoji(), "🟨⬜🟨🟨⬜");
/// assert!(score("spee", "erase").is_err());
/// ```
pub fn score(guess: &str, target: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Feedback::calculate(&guess, &target))
}
