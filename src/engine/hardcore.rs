//! Hardcore mode validation
//!
//! In hardcore mode every guess must agree with everything the earlier
//! feedback revealed. Per prior record `(g, f)`:
//!
//! 1. `f[i] = correct`: the new guess keeps `g[i]` at position `i`
//! 2. `f[i] = present`: the new guess does not put `g[i]` at `i` again
//! 3. Each letter's correct/present marks give a lower bound on how many
//!    times it must appear; an absent mark for the same letter makes that
//!    bound exact
//! 4. An absent mark for a letter that is otherwise in the word rules out
//!    that position for the letter
//!
//! A guess passes all four exactly when re-scoring each prior guess against
//! it (as if it were the target) reproduces the recorded feedback.

use super::session::GuessRecord;
use crate::core::{LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Which revealed constraint a guess broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    /// A green letter was moved or dropped
    MissingCorrect { position: usize, letter: char },
    /// A letter was placed where feedback already showed it does not go
    MisplacedLetter { position: usize, letter: char },
    /// A revealed letter is missing, or appears fewer times than revealed
    MissingLetter { letter: char, required: usize },
    /// A letter appears more often than the word contains it
    ExcessLetter { letter: char, allowed: usize },
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MissingCorrect { position, letter } => {
                write!(f, "position {} must be {letter}", position + 1)
            }
            Self::MisplacedLetter { position, letter } => {
                write!(f, "{letter} cannot go in position {}", position + 1)
            }
            Self::MissingLetter {
                letter,
                required: 1,
            } => write!(f, "guess must contain {letter}"),
            Self::MissingLetter { letter, required } => {
                write!(f, "guess must contain {letter} at least {required} times")
            }
            Self::ExcessLetter { letter, allowed: 0 } => {
                write!(f, "{letter} is not in the word")
            }
            Self::ExcessLetter { letter, allowed } => {
                write!(f, "the word contains {letter} only {allowed} time(s)")
            }
        }
    }
}

/// A rejected hardcore guess, with the earlier guess that revealed the constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hardcore mode: {reason} (revealed by guess {})", .offending_guess_index + 1)]
pub struct HardcoreViolation {
    pub reason: ViolationReason,
    /// Zero-based index into the session history
    pub offending_guess_index: usize,
}

/// Check `guess` against every record in `history`, oldest first
///
/// # Errors
/// Returns the first violated constraint together with the index of the
/// record that revealed it.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::engine::{GuessRecord, validate_hardcore};
///
/// let target = Word::new("crane").unwrap();
/// let history = vec![GuessRecord::score(Word::new("trace").unwrap(), &target)];
///
/// assert!(validate_hardcore(&Word::new("crane").unwrap(), &history).is_ok());
/// assert!(validate_hardcore(&Word::new("slate").unwrap(), &history).is_err());
/// ```
pub fn validate(guess: &Word, history: &[GuessRecord]) -> Result<(), HardcoreViolation> {
    for (index, record) in history.iter().enumerate() {
        check_record(guess, record).map_err(|reason| HardcoreViolation {
            reason,
            offending_guess_index: index,
        })?;
    }
    Ok(())
}

/// What one record says about a single letter's count in the target
#[derive(Debug, Clone, Copy, Default)]
struct LetterBound {
    min: usize,
    exact: bool,
}

fn letter_bounds(record: &GuessRecord) -> FxHashMap<u8, LetterBound> {
    let mut bounds: FxHashMap<u8, LetterBound> = FxHashMap::default();
    for (&letter, &status) in record
        .guess()
        .letters()
        .iter()
        .zip(record.feedback().statuses())
    {
        let bound = bounds.entry(letter).or_default();
        if status.is_hit() {
            bound.min += 1;
        } else {
            bound.exact = true;
        }
    }
    bounds
}

fn check_record(guess: &Word, record: &GuessRecord) -> Result<(), ViolationReason> {
    let prior = record.guess();
    let feedback = record.feedback();

    for position in 0..WORD_LENGTH {
        let letter = prior.letter_at(position);
        let placed = guess.letter_at(position);
        match feedback.status_at(position) {
            LetterStatus::Correct if placed != letter => {
                return Err(ViolationReason::MissingCorrect {
                    position,
                    letter: char::from(letter),
                });
            }
            LetterStatus::Present if placed == letter => {
                return Err(ViolationReason::MisplacedLetter {
                    position,
                    letter: char::from(letter),
                });
            }
            _ => {}
        }
    }

    let bounds = letter_bounds(record);

    // Walk letters in the prior guess's order so the reported reason is stable
    for &letter in prior.letters() {
        let bound = bounds[&letter];
        let count = guess.count_of(letter);
        if count < bound.min {
            return Err(ViolationReason::MissingLetter {
                letter: char::from(letter),
                required: bound.min,
            });
        }
        if bound.exact && count > bound.min {
            return Err(ViolationReason::ExcessLetter {
                letter: char::from(letter),
                allowed: bound.min,
            });
        }
    }

    for position in 0..WORD_LENGTH {
        let letter = prior.letter_at(position);
        if feedback.status_at(position) == LetterStatus::Absent
            && bounds[&letter].min > 0
            && guess.letter_at(position) == letter
        {
            return Err(ViolationReason::MisplacedLetter {
                position,
                letter: char::from(letter),
            });
        }
    }

    Ok(())
}
