//! Terminal output formatting
//!
//! Coloured tiles and result printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_score_result};
