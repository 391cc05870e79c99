//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::engine::MAX_GUESSES;
use crate::output::{print_board, print_game_over};
use crate::service::{GameService, NewGame, ServiceError, SessionId};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or no game can be started.
pub fn run_simple(service: &GameService, options: NewGame) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_GUESSES} tries.");
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} in the word, wrong spot", " Y ".black().on_yellow());
    println!("  - {} not in the word", " - ".white().on_bright_black());
    if options.hardcore {
        println!(
            "\n{} revealed hints must be used in later guesses.",
            "Hardcore:".red().bold()
        );
    }
    println!("\nCommands: 'hint', 'new' for a new game, 'quit' to exit\n");

    let mut session_id = start(service, options)?;

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                service.end_game(session_id)?;
                session_id = start(service, options)?;
                continue;
            }
            "hint" | "h" => {
                match service.hint(session_id) {
                    Ok(outcome) => println!(
                        "💡 {} ({} left)\n",
                        outcome.hint.bright_white(),
                        outcome.hints_remaining
                    ),
                    Err(e) => print_rejection(&e),
                }
                continue;
            }
            _ => {}
        }

        match service.check(session_id, &input) {
            Ok(outcome) => {
                let view = service.view(session_id)?;
                println!();
                print_board(&view);
                println!();

                if outcome.status.is_terminal() {
                    print_game_over(&view);
                    if !play_again(service, session_id)? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    service.end_game(session_id)?;
                    session_id = start(service, options)?;
                }
            }
            Err(e) => print_rejection(&e),
        }
    }
}

fn start(service: &GameService, options: NewGame) -> Result<SessionId> {
    let started = service.new_game(options)?;
    println!("{}", "─".repeat(60).cyan());
    match started.emoji {
        Some(clue) => println!("New game! Your clue: {clue}"),
        None => println!("New game!"),
    }
    println!("{}", "─".repeat(60).cyan());
    Ok(started.session_id)
}

/// Offer to save the score, then ask about another round
fn play_again(service: &GameService, session_id: SessionId) -> Result<bool> {
    if let Some(name) = get_user_input("Name for the scoreboard (blank to skip)")?
        && !name.is_empty()
    {
        match service.save_score(session_id, Some(&name)) {
            Ok(entry) => println!("✓ Saved score {} for {}", entry.score, entry.player),
            Err(e) => print_rejection(&e),
        }
    }

    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

fn print_rejection(err: &ServiceError) {
    println!("❌ {}\n", err.to_string().red());
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
