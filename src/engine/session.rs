//! Game session state machine
//!
//! A session moves `InProgress -> Won` or `InProgress -> Lost` and never
//! leaves a terminal state. Every operation validates first and mutates
//! last, so a rejected call leaves the session exactly as it was.

use super::error::EngineError;
use super::hardcore;
use super::hint::{self, Hint};
use crate::core::{Feedback, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Whether hardcore validation runs on each guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Hardcore,
}

impl GameMode {
    #[must_use]
    pub const fn from_hardcore_flag(hardcore: bool) -> Self {
        if hardcore { Self::Hardcore } else { Self::Normal }
    }

    #[must_use]
    pub const fn is_hardcore(self) -> bool {
        matches!(self, Self::Hardcore)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One scored guess. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Score `guess` against `target` and keep both
    #[must_use]
    pub fn score(guess: Word, target: &Word) -> Self {
        let feedback = Feedback::calculate(&guess, target);
        Self { guess, feedback }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Outcome of a finished game, handed to score persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    pub status: GameStatus,
    /// Guesses used; a loss always counts the full six
    pub guesses: usize,
}

impl FinalScore {
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }
}

/// One game: the hidden target plus everything played so far
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    mode: GameMode,
    history: Vec<GuessRecord>,
    hints: Vec<Hint>,
    status: GameStatus,
}

impl Session {
    #[must_use]
    pub const fn new(target: Word, mode: GameMode) -> Self {
        Self {
            target,
            mode,
            history: Vec::new(),
            hints: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Hints issued so far, oldest first
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Submit a guess and return its feedback
    ///
    /// # Errors
    /// - `SessionTerminated` if the game already ended
    /// - `InvalidInput` if the guess is not five ASCII letters
    /// - `HardcoreViolation` if hardcore mode is on and the guess contradicts
    ///   earlier feedback
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::engine::{GameMode, GameStatus, Session};
    ///
    /// let mut session = Session::new(Word::new("crane").unwrap(), GameMode::Normal);
    /// let feedback = session.submit("trace").unwrap();
    /// assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    /// assert_eq!(session.status(), GameStatus::InProgress);
    ///
    /// assert!(session.submit("crane").unwrap().is_perfect());
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn submit(&mut self, guess: &str) -> Result<Feedback, EngineError> {
        if self.is_over() {
            return Err(EngineError::SessionTerminated(self.status));
        }
        self.submit_word(&Word::new(guess)?)
    }

    /// Submit an already parsed guess
    ///
    /// # Errors
    /// `SessionTerminated` or `HardcoreViolation`, as for [`Session::submit`].
    pub fn submit_word(&mut self, guess: &Word) -> Result<Feedback, EngineError> {
        if self.is_over() {
            return Err(EngineError::SessionTerminated(self.status));
        }

        if self.mode.is_hardcore() {
            hardcore::validate(guess, &self.history)?;
        }

        let record = GuessRecord::score(guess.clone(), &self.target);
        let feedback = *record.feedback();
        self.history.push(record);

        self.status = if feedback.is_perfect() {
            GameStatus::Won
        } else if self.history.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        Ok(feedback)
    }

    /// Issue a hint and remember it so the next one reveals something new
    ///
    /// `hints_remaining` is the caller's budget before this hint.
    ///
    /// # Errors
    /// - `SessionTerminated` if the game already ended
    /// - `NoHintsRemaining` if `hints_remaining` is zero
    pub fn take_hint(&mut self, hints_remaining: u8) -> Result<Hint, EngineError> {
        let hint = hint::hint(self, hints_remaining)?;
        self.hints.push(hint);
        Ok(hint)
    }

    /// Final status and guess count, once the game is over
    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.is_over().then(|| FinalScore {
            status: self.status,
            guesses: self.history.len(),
        })
    }
}
