//! TUI application state and logic

use crate::core::{LetterStatus, WORD_LENGTH};
use crate::engine::{GameStatus, MAX_GUESSES};
use crate::service::{GameService, GameStarted, NewGame, SessionId, SessionView};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub service: &'a GameService,
    pub options: NewGame,
    pub session_id: SessionId,
    pub view: SessionView,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guess count; index 0 is unused
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }
}

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot start a game.
    pub fn new(service: &'a GameService, options: NewGame) -> Result<Self> {
        let started = service.new_game(options)?;
        Self::from_started(service, options, &started)
    }

    fn from_started(
        service: &'a GameService,
        options: NewGame,
        started: &GameStarted,
    ) -> Result<Self> {
        let mut app = Self {
            service,
            options,
            session_id: started.session_id,
            view: service.view(started.session_id)?,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce(started);
        Ok(app)
    }

    fn announce(&mut self, started: &GameStarted) {
        self.add_message(
            &format!("Guess the word in {MAX_GUESSES} tries."),
            MessageStyle::Info,
        );
        if let Some(clue) = started.emoji {
            self.add_message(&format!("Your clue: {clue}"), MessageStyle::Info);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && self.input_buffer.len() < WORD_LENGTH
            && c.is_ascii_alphabetic()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        match self.service.check(self.session_id, &guess) {
            Ok(outcome) => {
                self.refresh();
                if outcome.status.is_terminal() {
                    self.stats.record(outcome.status, outcome.guesses_used);
                    self.input_mode = InputMode::GameOver;

                    if outcome.is_correct {
                        let celebration = match outcome.guesses_used {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    } else {
                        let answer = outcome.answer.unwrap_or_default();
                        self.add_message(&format!("The word was {answer}."), MessageStyle::Error);
                    }
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = guess;
            }
        }
    }

    pub fn request_hint(&mut self) {
        match self.service.hint(self.session_id) {
            Ok(outcome) => {
                self.refresh();
                self.add_message(
                    &format!("💡 {} ({} left)", outcome.hint, outcome.hints_remaining),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        let started = match self.service.new_game(self.options) {
            Ok(started) => started,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        if let Err(e) = self.service.end_game(self.session_id) {
            debug!(id = %self.session_id, error = %e, "previous game already gone");
        }
        self.session_id = started.session_id;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.refresh();
        self.announce(&started);
    }

    fn refresh(&mut self) {
        match self.service.view(self.session_id) {
            Ok(view) => self.view = view,
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best status seen for each letter A-Z, for the keyboard panel
    #[must_use]
    pub fn letter_states(&self) -> [Option<LetterStatus>; 26] {
        let mut states = [None; 26];
        for row in &self.view.guesses {
            for (c, &status) in row.guess.bytes().zip(row.feedback.statuses()) {
                let Some(slot) = states.get_mut(usize::from(c.wrapping_sub(b'A'))) else {
                    continue;
                };
                *slot = Some(match (*slot, status) {
                    (Some(LetterStatus::Correct), _) | (_, LetterStatus::Correct) => {
                        LetterStatus::Correct
                    }
                    (Some(LetterStatus::Present), _) | (_, LetterStatus::Present) => {
                        LetterStatus::Present
                    }
                    _ => LetterStatus::Absent,
                });
            }
        }
        states
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.request_hint(),
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
