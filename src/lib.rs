//! Wordle Game
//!
//! A Wordle engine with exact duplicate-letter scoring, hardcore validation,
//! a bounded hint policy and a session service that keeps targets private.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus::*, score};
//! use wordle_game::engine::{GameMode, GameStatus, Session};
//! use wordle_game::core::Word;
//!
//! // Score a single pair
//! let feedback = score("speed", "erase").unwrap();
//! assert_eq!(feedback.statuses(), &[Present, Absent, Present, Present, Absent]);
//!
//! // Play a game
//! let mut session = Session::new(Word::new("crane").unwrap(), GameMode::Hardcore);
//! session.submit("trace").unwrap();
//! session.submit("crane").unwrap();
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game rules: sessions, hardcore validation, hints
pub mod engine;

// Word lists
pub mod wordlists;

// Session store and score saving
pub mod service;

// Line-delimited JSON server
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
