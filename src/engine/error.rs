//! Engine error taxonomy
//!
//! Every error is terminal for the call that produced it and leaves the
//! session untouched.

use super::hardcore::HardcoreViolation;
use super::session::GameStatus;
use crate::core::WordError;
use thiserror::Error;

/// Errors returned by session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Guess (or target) is not five ASCII letters
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),

    /// The session already finished
    #[error("game is over ({0})")]
    SessionTerminated(GameStatus),

    /// Hardcore mode rejected a guess that contradicts revealed information
    #[error(transparent)]
    HardcoreViolation(#[from] HardcoreViolation),

    /// Caller reported an exhausted hint budget
    #[error("no hints remaining")]
    NoHintsRemaining,
}

impl EngineError {
    /// Stable machine-readable name for this error
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::SessionTerminated(_) => "session_terminated",
            Self::HardcoreViolation(_) => "hardcore_violation",
            Self::NoHintsRemaining => "no_hints_remaining",
        }
    }
}
