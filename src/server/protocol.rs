//! Protocol module - JSON message types for the game server
//!
//! One JSON object per line in each direction. Every message carries a
//! `type` field; replies echo the request type or use `error`.

use serde::{Deserialize, Serialize};

use crate::service::{
    CheckOutcome, GameStarted, HintOutcome, ScoreEntry, ServiceError, SessionId, SessionView,
};

// ============== Client -> Server Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Request {
    /// Start a game
    Word {
        #[serde(default)]
        hardcore_mode: bool,
        #[serde(default)]
        emoji_mode: bool,
    },
    Check {
        session_id: SessionId,
        guess: String,
    },
    Hint {
        session_id: SessionId,
    },
    SaveScore {
        session_id: SessionId,
        #[serde(default)]
        player: Option<String>,
    },
    /// Snapshot a game
    State {
        session_id: SessionId,
    },
}

// ============== Server -> Client Messages ==============

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Response {
    Word(GameStarted),
    Check(CheckOutcome),
    Hint(HintOutcome),
    SaveScore(ScoreEntry),
    State(SessionView),
    Error(ErrorBody),
}

/// Wire form of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: String,
    pub status: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offending_guess_index: Option<usize>,
}

impl From<&ServiceError> for ErrorBody {
    fn from(err: &ServiceError) -> Self {
        Self {
            kind: err.kind().to_string(),
            status: err.status_code(),
            error: err.to_string(),
            offending_guess_index: err.offending_guess_index(),
        }
    }
}

impl From<ServiceError> for Response {
    fn from(err: ServiceError) -> Self {
        Self::Error(ErrorBody::from(&err))
    }
}

/// Reply for a line that is not a valid request
#[must_use]
pub fn bad_request(message: &str) -> Response {
    Response::Error(ErrorBody {
        kind: "bad_request".to_string(),
        status: 400,
        error: message.to_string(),
        offending_guess_index: None,
    })
}

/// Parse one request line
///
/// # Errors
/// Returns the serde error when the line is not a known request.
pub fn parse_request(line: &str) -> Result<Request, serde_json::Error> {
    serde_json::from_str(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineError;

    #[test]
    fn parse_word_request_with_defaults() {
        assert_eq!(
            parse_request(r#"{"type":"word"}"#).unwrap(),
            Request::Word {
                hardcore_mode: false,
                emoji_mode: false
            }
        );
        assert_eq!(
            parse_request(r#"{"type":"word","hardcore_mode":true}"#).unwrap(),
            Request::Word {
                hardcore_mode: true,
                emoji_mode: false
            }
        );
    }

    #[test]
    fn parse_check_request() {
        let id = SessionId::new_v4();
        let line = format!(r#"{{"type":"check","session_id":"{id}","guess":"crane"}}"#);
        assert_eq!(
            parse_request(&line).unwrap(),
            Request::Check {
                session_id: id,
                guess: "crane".to_string()
            }
        );
    }

    #[test]
    fn parse_save_score_uses_kebab_case() {
        let id = SessionId::new_v4();
        let line = format!(r#"{{"type":"save-score","session_id":"{id}"}}"#);
        assert_eq!(
            parse_request(&line).unwrap(),
            Request::SaveScore {
                session_id: id,
                player: None
            }
        );
    }

    #[test]
    fn target_is_not_a_request_field() {
        // A client-supplied target is ignored rather than honoured
        let req = parse_request(r#"{"type":"word","word":"CRANE"}"#).unwrap();
        assert!(matches!(req, Request::Word { .. }));
    }

    #[test]
    fn rejects_unknown_type_and_bad_id() {
        assert!(parse_request(r#"{"type":"solve"}"#).is_err());
        assert!(parse_request(r#"{"type":"hint","session_id":"nope"}"#).is_err());
        assert!(parse_request("not json").is_err());
    }

    #[test]
    fn error_response_shape() {
        let resp = Response::from(ServiceError::from(EngineError::NoHintsRemaining));
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["type"], "error");
        assert_eq!(v["kind"], "no_hints_remaining");
        assert_eq!(v["status"], 409);
        assert!(v.get("offending_guess_index").is_none());
    }

    #[test]
    fn bad_request_shape() {
        let v = serde_json::to_value(bad_request("expected value")).unwrap();
        assert_eq!(v["type"], "error");
        assert_eq!(v["kind"], "bad_request");
        assert_eq!(v["status"], 400);
    }
}
