//! Guess evaluation and session validation
//!
//! The session state machine, the hardcore validator and the hint policy.
//! Nothing here keeps state between calls except the [`Session`] the caller
//! passes in.

mod error;
mod hardcore;
mod hint;
mod session;

pub use error::EngineError;
pub use hardcore::{HardcoreViolation, ViolationReason, validate as validate_hardcore};
pub use hint::{DEFAULT_HINT_BUDGET, Hint, hint};
pub use session::{FinalScore, GameMode, GameStatus, GuessRecord, MAX_GUESSES, Session};
