//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile, e.g. ` C ` on green
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| colored_tile(letter, status).to_string())
        .collect()
}
