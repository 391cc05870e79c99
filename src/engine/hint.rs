//! Hint policy
//!
//! Hints narrow the search without spelling the target. The policy prefers
//! naming an undiscovered letter, then revealing one unknown position. Once a
//! single position is left unknown it says nothing new. The caller owns the
//! budget.

use super::error::EngineError;
use super::session::Session;
use crate::core::{LetterStatus, WORD_LENGTH};
use serde::Serialize;
use std::fmt;

/// Budget a new game starts with
pub const DEFAULT_HINT_BUDGET: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hint {
    /// The target contains this letter
    ContainsLetter { letter: char },
    /// The target has `letter` at zero-based `position`
    LetterAt { position: usize, letter: char },
    /// Everything a hint may reveal is already known
    NothingNew,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ContainsLetter { letter } => {
                write!(f, "The word contains the letter {letter}.")
            }
            Self::LetterAt { position, letter } => {
                write!(f, "Letter {} is {letter}.", position + 1)
            }
            Self::NothingNew => f.write_str(
                "You have already uncovered everything a hint can reveal. Trust the board!",
            ),
        }
    }
}

/// What the player already knows, from feedback and earlier hints
#[derive(Debug, Default)]
struct Revealed {
    letters: [bool; 26],
    positions: [bool; WORD_LENGTH],
}

impl Revealed {
    fn from_session(session: &Session) -> Self {
        let mut revealed = Self::default();

        for record in session.history() {
            for (position, (&letter, &status)) in record
                .guess()
                .letters()
                .iter()
                .zip(record.feedback().statuses())
                .enumerate()
            {
                if status.is_hit() {
                    revealed.mark_letter(letter);
                }
                if status == LetterStatus::Correct {
                    revealed.positions[position] = true;
                }
            }
        }

        for hint in session.hints() {
            match *hint {
                Hint::ContainsLetter { letter } => revealed.mark_letter(letter as u8),
                Hint::LetterAt { position, letter } => {
                    revealed.mark_letter(letter as u8);
                    revealed.positions[position] = true;
                }
                Hint::NothingNew => {}
            }
        }

        revealed
    }

    fn mark_letter(&mut self, letter: u8) {
        self.letters[usize::from(letter - b'A')] = true;
    }

    fn knows_letter(&self, letter: u8) -> bool {
        self.letters[usize::from(letter - b'A')]
    }
}

/// Compute the next hint for `session`
///
/// Deterministic: the same session state always yields the same hint.
///
/// # Errors
/// - `SessionTerminated` if the game already ended
/// - `NoHintsRemaining` if `hints_remaining` is zero
pub fn hint(session: &Session, hints_remaining: u8) -> Result<Hint, EngineError> {
    if session.is_over() {
        return Err(EngineError::SessionTerminated(session.status()));
    }
    if hints_remaining == 0 {
        return Err(EngineError::NoHintsRemaining);
    }

    let target = session.target();
    let revealed = Revealed::from_session(session);

    let unknown: Vec<usize> = (0..WORD_LENGTH)
        .filter(|&position| !revealed.positions[position])
        .collect();

    // With one unknown position left, any new fact about it spells the answer
    if unknown.len() <= 1 {
        return Ok(Hint::NothingNew);
    }

    if let Some(&letter) = target
        .letters()
        .iter()
        .find(|&&letter| !revealed.knows_letter(letter))
    {
        return Ok(Hint::ContainsLetter {
            letter: char::from(letter),
        });
    }

    let position = unknown[0];
    Ok(Hint::LetterAt {
        position,
        letter: char::from(target.letter_at(position)),
    })
}
