//! Wordle - CLI
//!
//! Play Wordle in a TUI, a plain terminal loop, or serve games over TCP.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_serve, run_simple, score_pair},
    interactive::{App, run_tui},
    output::print_score_result,
    server::ServerConfig,
    service::{GameService, NewGame, ServiceConfig},
    wordlists::{BUILTIN, Dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle with hardcore mode, hints and a JSON game server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Revealed letters must be reused in later guesses
    #[arg(long, global = true)]
    hardcore: bool,

    /// Pick themed words and show an emoji clue
    #[arg(long, global = true)]
    emoji: bool,

    /// Wordlist: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = BUILTIN)]
    wordlist: String,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Serve games as line-delimited JSON over TCP
    Serve {
        /// Listen host (overrides WORDLE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides WORDLE_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Hints per game (overrides WORDLE_HINT_BUDGET)
        #[arg(long)]
        hint_budget: Option<u8>,

        /// Live games kept before new ones are refused (overrides WORDLE_MAX_SESSIONS)
        #[arg(long)]
        max_sessions: Option<usize>,

        /// Accept any five letters, not just dictionary words
        #[arg(long)]
        allow_any_word: bool,
    },

    /// Score one guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn init_logging(verbose: bool, tui: bool) {
    let from_env = EnvFilter::try_from_default_env().ok();

    // The TUI owns the terminal unless RUST_LOG asks for logs
    if tui && from_env.is_none() {
        return;
    }

    let filter = from_env.unwrap_or_else(|| {
        EnvFilter::new(if verbose { "wordle_game=debug" } else { "wordle_game=info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary =
        Dictionary::load(wordlist).with_context(|| format!("cannot load wordlist '{wordlist}'"))?;
    debug!(source = wordlist, words = dictionary.len(), "wordlist loaded");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let options = NewGame {
        hardcore: cli.hardcore,
        emoji: cli.emoji,
    };

    match command {
        Commands::Play => {
            let service =
                GameService::new(load_dictionary(&cli.wordlist)?, ServiceConfig::default());
            run_tui(App::new(&service, options)?)
        }
        Commands::Simple => {
            let service =
                GameService::new(load_dictionary(&cli.wordlist)?, ServiceConfig::default());
            run_simple(&service, options)
        }
        Commands::Serve {
            host,
            port,
            hint_budget,
            max_sessions,
            allow_any_word,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(budget) = hint_budget {
                config.hint_budget = budget;
            }
            if let Some(limit) = max_sessions {
                config.max_sessions = limit;
            }
            if allow_any_word {
                config.strict_dictionary = false;
            }
            run_serve(config, load_dictionary(&cli.wordlist)?)
        }
        Commands::Score { guess, target } => {
            let result = score_pair(&guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
