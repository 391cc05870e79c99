//! Command implementations

pub mod score;
pub mod serve;
pub mod simple;

pub use score::{ScoreResult, score_pair};
pub use serve::run_serve;
pub use simple::run_simple;
