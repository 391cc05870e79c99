//! Core domain types for Wordle
//!
//! Words and the letter scorer. Everything here is pure: no I/O, no shared
//! state, safe to call from any number of threads.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, score};
pub use word::{WORD_LENGTH, Word, WordError};
