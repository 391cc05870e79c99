//! Interactive TUI interface

pub mod app;
mod rendering;

pub use app::{App, InputMode, Statistics, run_tui};
