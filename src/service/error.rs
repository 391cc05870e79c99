//! Service error taxonomy and its wire mapping

use super::SessionId;
use crate::engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("unknown session {0}")]
    UnknownSession(SessionId),

    #[error("{0} is not in the word list")]
    NotInWordList(String),

    #[error("game is still in progress")]
    GameInProgress,

    #[error("score for this game was already saved")]
    ScoreAlreadySaved,

    #[error("too many active games, try again later")]
    CapacityReached,

    #[error("word list is empty")]
    EmptyDictionary,

    #[error("failed to save score: {0}")]
    ScoreSink(String),
}

impl ServiceError {
    /// Stable machine-readable name for this error
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Engine(engine) => engine.kind(),
            Self::UnknownSession(_) => "unknown_session",
            Self::NotInWordList(_) => "not_in_word_list",
            Self::GameInProgress => "game_in_progress",
            Self::ScoreAlreadySaved => "score_already_saved",
            Self::CapacityReached => "capacity_reached",
            Self::EmptyDictionary => "empty_dictionary",
            Self::ScoreSink(_) => "score_sink",
        }
    }

    /// HTTP-style status code for the error body
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Engine(EngineError::InvalidInput(_) | EngineError::HardcoreViolation(_))
            | Self::NotInWordList(_) => 400,
            Self::UnknownSession(_) => 404,
            Self::Engine(EngineError::SessionTerminated(_) | EngineError::NoHintsRemaining)
            | Self::GameInProgress
            | Self::ScoreAlreadySaved => 409,
            Self::ScoreSink(_) => 500,
            Self::CapacityReached | Self::EmptyDictionary => 503,
        }
    }

    /// Zero-based history index for hardcore violations
    #[must_use]
    pub const fn offending_guess_index(&self) -> Option<usize> {
        match self {
            Self::Engine(EngineError::HardcoreViolation(v)) => Some(v.offending_guess_index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use crate::engine::GameStatus;

    #[test]
    fn client_errors_map_to_400() {
        let invalid = ServiceError::from(EngineError::InvalidInput(WordError::InvalidLength(3)));
        assert_eq!(invalid.status_code(), 400);
        assert_eq!(invalid.kind(), "invalid_input");
        assert_eq!(ServiceError::NotInWordList("QQQQQ".into()).status_code(), 400);
    }

    #[test]
    fn state_conflicts_map_to_409() {
        let done = ServiceError::from(EngineError::SessionTerminated(GameStatus::Won));
        assert_eq!(done.status_code(), 409);
        assert_eq!(done.kind(), "session_terminated");
        assert_eq!(
            ServiceError::from(EngineError::NoHintsRemaining).status_code(),
            409
        );
    }

    #[test]
    fn unknown_session_maps_to_404() {
        let err = ServiceError::UnknownSession(SessionId::nil());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.offending_guess_index(), None);
    }
}
