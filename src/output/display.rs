//! Display functions for command results

use super::formatters::colored_row;
use crate::commands::ScoreResult;
use crate::engine::{GameStatus, MAX_GUESSES};
use crate::service::SessionView;
use colored::Colorize;

/// Print the feedback for one guess/target pair
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.bright_white().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.feedback));
    println!("  {}\n", result.feedback.to_emoji());
}

/// Print the board so far
pub fn print_board(view: &SessionView) {
    for (i, row) in view.guesses.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            colored_row(&row.guess, &row.feedback)
        );
    }
    for i in view.guesses.len()..MAX_GUESSES {
        println!(
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            " _ ".repeat(5).bright_black()
        );
    }
}

/// Print the end-of-game banner with the emoji summary
pub fn print_game_over(view: &SessionView) {
    let turns = view.guesses.len();
    let answer = view.answer.as_deref().unwrap_or("?????");

    println!("\n{}", "═".repeat(60).bright_cyan());
    match view.status {
        GameStatus::Won => {
            println!(
                "{}",
                "        🎉  Y O U   G O T   I T !  🎉        ".bright_green().bold()
            );
            let performance = match turns {
                1 => "🏆 Incredible hole-in-one!",
                2 => "⭐ Outstanding!",
                3 => "💫 Very well played!",
                4 => "✨ Nice work!",
                5 => "👍 Got it!",
                _ => "😅 Phew!",
            };
            println!("\n  {}", performance.bright_yellow().bold());
            println!(
                "  Solved {} in {} {}",
                answer.bright_cyan().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("{}", "        Out of guesses        ".red().bold());
            println!("\n  The word was {}", answer.bright_yellow().bold());
        }
        GameStatus::InProgress => {}
    }

    let tally = if view.status == GameStatus::Won {
        turns.to_string()
    } else {
        "X".to_string()
    };
    println!("\n  {} {tally}/{MAX_GUESSES}", "Wordle".bold());
    for row in &view.guesses {
        println!("  {}", row.feedback.to_emoji());
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
