//! Score persistence seam
//!
//! Finished games are handed to a [`ScoreSink`]. Storage design lives
//! outside this crate; the in-memory sink backs the CLI and the tests.

use crate::engine::GameMode;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// Player name recorded when none is given
pub const ANONYMOUS: &str = "anonymous";

/// One saved result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub player: String,
    pub word: String,
    /// Guesses used; six for a loss
    pub score: usize,
    pub won: bool,
    pub mode: GameMode,
}

/// Destination for finished game results
pub trait ScoreSink: Send + Sync {
    /// Store one result
    ///
    /// # Errors
    /// Returns an error if the result could not be stored.
    fn record(&self, entry: &ScoreEntry) -> anyhow::Result<()>;
}

/// Keeps results in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryScores {
    entries: Mutex<Vec<ScoreEntry>>,
}

impl MemoryScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn entries(&self) -> Vec<ScoreEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ScoreSink for MemoryScores {
    fn record(&self, entry: &ScoreEntry) -> anyhow::Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}
