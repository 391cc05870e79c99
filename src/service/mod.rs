//! Game orchestration
//!
//! Owns every live [`Session`], keyed by an opaque id, and applies the rules
//! that sit around the engine: target selection, the dictionary check, hint
//! budgets and score saving. Targets never leave the service while a game is
//! in progress.
//!
//! Each session sits behind its own mutex. `check`, `hint` and `save_score`
//! hold it for the whole validate-then-append sequence, so concurrent calls
//! on one game are serialised while different games proceed independently.

mod error;
pub mod scores;

pub use error::ServiceError;
pub use scores::{ANONYMOUS, MemoryScores, ScoreEntry, ScoreSink};

use crate::core::{Feedback, Word};
use crate::engine::{
    DEFAULT_HINT_BUDGET, EngineError, GameMode, GameStatus, Hint, MAX_GUESSES, Session,
};
use crate::wordlists::{Dictionary, emoji};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Opaque handle for one game
pub type SessionId = Uuid;

/// Rules applied around the engine
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Hints each game may take
    pub hint_budget: u8,
    /// Live sessions kept before new games are refused
    pub max_sessions: usize,
    /// Reject guesses that are not in the dictionary
    pub strict_dictionary: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            hint_budget: DEFAULT_HINT_BUDGET,
            max_sessions: 10_000,
            strict_dictionary: true,
        }
    }
}

/// Options for starting a game
#[derive(Debug, Clone, Copy, Default)]
pub struct NewGame {
    pub hardcore: bool,
    /// Pick a themed word and return its emoji clue
    pub emoji: bool,
}

/// Returned when a game starts
#[derive(Debug, Clone, Serialize)]
pub struct GameStarted {
    pub session_id: SessionId,
    pub mode: GameMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
    pub hints_remaining: u8,
    pub max_guesses: usize,
}

/// Result of one accepted guess
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub feedback: Feedback,
    pub is_correct: bool,
    pub status: GameStatus,
    pub guesses_used: usize,
    pub guesses_remaining: usize,
    /// Revealed once the game is over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HintOutcome {
    pub hint: String,
    pub detail: Hint,
    pub hints_remaining: u8,
}

/// One row of a [`SessionView`]
#[derive(Debug, Clone, Serialize)]
pub struct GuessRow {
    pub guess: String,
    pub feedback: Feedback,
}

/// Read-only snapshot of a game for front ends
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub mode: GameMode,
    pub status: GameStatus,
    pub guesses: Vec<GuessRow>,
    pub hints: Vec<String>,
    pub hints_remaining: u8,
    pub guesses_remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
    /// Revealed once the game is over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

struct GameEntry {
    session: Session,
    hints_remaining: u8,
    emoji: Option<&'static str>,
    score_saved: bool,
}

/// Owns live games and applies service rules around the engine
pub struct GameService {
    config: ServiceConfig,
    dictionary: Dictionary,
    sessions: RwLock<FxHashMap<SessionId, Arc<Mutex<GameEntry>>>>,
    scores: Arc<dyn ScoreSink>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl GameService {
    /// Create a service that keeps scores in memory
    #[must_use]
    pub fn new(dictionary: Dictionary, config: ServiceConfig) -> Self {
        Self::with_score_sink(dictionary, config, Arc::new(MemoryScores::new()))
    }

    #[must_use]
    pub fn with_score_sink(
        dictionary: Dictionary,
        config: ServiceConfig,
        scores: Arc<dyn ScoreSink>,
    ) -> Self {
        Self {
            config,
            dictionary,
            sessions: RwLock::new(FxHashMap::default()),
            scores,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of sessions currently held, finished ones included
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Start a game with a random target
    ///
    /// # Errors
    /// `EmptyDictionary` if there is nothing to pick from, `CapacityReached`
    /// if the store is full of unfinished games.
    pub fn new_game(&self, options: NewGame) -> Result<GameStarted, ServiceError> {
        let mut rng = rand::rng();
        let target = if options.emoji {
            self.dictionary.random_themed_target(&mut rng)
        } else {
            self.dictionary.random_target(&mut rng)
        }
        .ok_or(ServiceError::EmptyDictionary)?
        .clone();

        let emoji = options.emoji.then(|| emoji::emoji_for(&target));
        self.start(target, GameMode::from_hardcore_flag(options.hardcore), emoji)
    }

    /// Start a game with a chosen target
    ///
    /// # Errors
    /// `CapacityReached` if the store is full of unfinished games.
    pub fn new_game_with_target(
        &self,
        target: Word,
        mode: GameMode,
    ) -> Result<GameStarted, ServiceError> {
        self.start(target, mode, None)
    }

    fn start(
        &self,
        target: Word,
        mode: GameMode,
        emoji: Option<&'static str>,
    ) -> Result<GameStarted, ServiceError> {
        let session_id = Uuid::new_v4();
        let entry = GameEntry {
            session: Session::new(target, mode),
            hints_remaining: self.config.hint_budget,
            emoji,
            score_saved: false,
        };

        {
            let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
            if sessions.len() >= self.config.max_sessions {
                let before = sessions.len();
                sessions.retain(|_, entry| !lock(entry).session.is_over());
                debug!(pruned = before - sessions.len(), "pruned finished sessions");
            }
            if sessions.len() >= self.config.max_sessions {
                warn!(limit = self.config.max_sessions, "session store full");
                return Err(ServiceError::CapacityReached);
            }
            sessions.insert(session_id, Arc::new(Mutex::new(entry)));
        }

        info!(%session_id, ?mode, "new game");
        Ok(GameStarted {
            session_id,
            mode,
            emoji,
            hints_remaining: self.config.hint_budget,
            max_guesses: MAX_GUESSES,
        })
    }

    fn entry(&self, id: SessionId) -> Result<Arc<Mutex<GameEntry>>, ServiceError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(ServiceError::UnknownSession(id))
    }

    /// Submit a guess
    ///
    /// # Errors
    /// Engine errors pass through; `NotInWordList` when strict dictionary
    /// checking is on; `UnknownSession` for a bad id.
    pub fn check(&self, id: SessionId, guess: &str) -> Result<CheckOutcome, ServiceError> {
        let entry = self.entry(id)?;
        let mut entry = lock(&entry);
        let session = &mut entry.session;

        if session.is_over() {
            return Err(EngineError::SessionTerminated(session.status()).into());
        }

        let word = Word::new(guess.trim()).map_err(EngineError::from)?;
        if self.config.strict_dictionary && !self.dictionary.contains(&word) {
            debug!(%id, guess = word.text(), "rejected: not in word list");
            return Err(ServiceError::NotInWordList(word.text().to_string()));
        }

        let feedback = session.submit_word(&word).inspect_err(|err| {
            debug!(%id, guess = word.text(), %err, "guess rejected");
        })?;

        let status = session.status();
        debug!(%id, guess = word.text(), feedback = %feedback, ?status, "guess scored");
        if status.is_terminal() {
            info!(%id, ?status, guesses = session.guesses_used(), "game over");
        }

        Ok(CheckOutcome {
            feedback,
            is_correct: feedback.is_perfect(),
            status,
            guesses_used: session.guesses_used(),
            guesses_remaining: session.guesses_remaining(),
            answer: status
                .is_terminal()
                .then(|| session.target().text().to_string()),
        })
    }

    /// Spend one hint from the game's budget
    ///
    /// # Errors
    /// `NoHintsRemaining` once the budget is spent, `SessionTerminated` after
    /// the game ends, `UnknownSession` for a bad id.
    pub fn hint(&self, id: SessionId) -> Result<HintOutcome, ServiceError> {
        let entry = self.entry(id)?;
        let mut entry = lock(&entry);

        let budget = entry.hints_remaining;
        let hint = entry.session.take_hint(budget)?;
        entry.hints_remaining -= 1;
        debug!(%id, ?hint, remaining = entry.hints_remaining, "hint issued");

        Ok(HintOutcome {
            hint: hint.to_string(),
            detail: hint,
            hints_remaining: entry.hints_remaining,
        })
    }

    /// Snapshot a game
    ///
    /// # Errors
    /// `UnknownSession` for a bad id.
    pub fn view(&self, id: SessionId) -> Result<SessionView, ServiceError> {
        let entry = self.entry(id)?;
        let entry = lock(&entry);
        let session = &entry.session;

        Ok(SessionView {
            session_id: id,
            mode: session.mode(),
            status: session.status(),
            guesses: session
                .history()
                .iter()
                .map(|record| GuessRow {
                    guess: record.guess().text().to_string(),
                    feedback: *record.feedback(),
                })
                .collect(),
            hints: session.hints().iter().map(ToString::to_string).collect(),
            hints_remaining: entry.hints_remaining,
            guesses_remaining: session.guesses_remaining(),
            emoji: entry.emoji,
            answer: session
                .is_over()
                .then(|| session.target().text().to_string()),
        })
    }

    /// Record a finished game with the score sink
    ///
    /// # Errors
    /// `GameInProgress` before the game ends, `ScoreAlreadySaved` on a second
    /// save, `ScoreSink` if storage fails, `UnknownSession` for a bad id.
    pub fn save_score(
        &self,
        id: SessionId,
        player: Option<&str>,
    ) -> Result<ScoreEntry, ServiceError> {
        let entry = self.entry(id)?;
        let mut entry = lock(&entry);

        let final_score = entry
            .session
            .final_score()
            .ok_or(ServiceError::GameInProgress)?;
        if entry.score_saved {
            return Err(ServiceError::ScoreAlreadySaved);
        }

        let player = player
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(ANONYMOUS);
        let record = ScoreEntry {
            player: player.to_string(),
            word: entry.session.target().text().to_string(),
            score: final_score.guesses,
            won: final_score.won(),
            mode: entry.session.mode(),
        };

        self.scores.record(&record).map_err(|err| {
            warn!(%id, %err, "score sink failed");
            ServiceError::ScoreSink(err.to_string())
        })?;
        entry.score_saved = true;
        info!(%id, player = %record.player, score = record.score, won = record.won, "score saved");

        Ok(record)
    }

    /// Drop a game, finished or not
    ///
    /// # Errors
    /// `UnknownSession` for a bad id.
    pub fn end_game(&self, id: SessionId) -> Result<(), ServiceError> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::UnknownSession(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn service() -> GameService {
        GameService::new(Dictionary::builtin(), ServiceConfig::default())
    }

    fn start(service: &GameService, target: &str, mode: GameMode) -> SessionId {
        service
            .new_game_with_target(Word::new(target).unwrap(), mode)
            .unwrap()
            .session_id
    }

    #[test]
    fn random_game_starts_with_full_budget() {
        let service = service();
        let started = service.new_game(NewGame::default()).unwrap();
        assert_eq!(started.mode, GameMode::Normal);
        assert_eq!(started.hints_remaining, DEFAULT_HINT_BUDGET);
        assert_eq!(started.max_guesses, MAX_GUESSES);
        assert!(started.emoji.is_none());
        assert_eq!(service.session_count(), 1);
    }

    #[test]
    fn emoji_game_returns_clue() {
        let service = service();
        let started = service
            .new_game(NewGame {
                hardcore: true,
                emoji: true,
            })
            .unwrap();
        assert_eq!(started.mode, GameMode::Hardcore);
        assert!(started.emoji.is_some_and(|e| e != emoji::UNKNOWN_EMOJI));
    }

    #[test]
    fn check_scores_and_finishes() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);

        let first = service.check(id, "trace").unwrap();
        assert!(!first.is_correct);
        assert_eq!(first.status, GameStatus::InProgress);
        assert_eq!(first.guesses_used, 1);
        assert!(first.answer.is_none());

        let second = service.check(id, "CRANE").unwrap();
        assert!(second.is_correct);
        assert_eq!(second.status, GameStatus::Won);
        assert_eq!(second.answer.as_deref(), Some("CRANE"));

        let err = service.check(id, "slate").unwrap_err();
        assert_eq!(err.kind(), "session_terminated");
    }

    #[test]
    fn strict_dictionary_rejects_unknown_words() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);

        let err = service.check(id, "qxzvj").unwrap_err();
        assert!(matches!(err, ServiceError::NotInWordList(ref w) if w == "QXZVJ"));
        assert_eq!(service.view(id).unwrap().guesses.len(), 0);
    }

    #[test]
    fn relaxed_dictionary_accepts_any_shape() {
        let config = ServiceConfig {
            strict_dictionary: false,
            ..ServiceConfig::default()
        };
        let service = GameService::new(Dictionary::builtin(), config);
        let id = start(&service, "crane", GameMode::Normal);
        assert!(service.check(id, "qxzvj").is_ok());
    }

    #[test]
    fn malformed_guess_is_invalid_input() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);
        let err = service.check(id, "cran").unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn hardcore_violation_carries_index() {
        let service = service();
        let id = start(&service, "crane", GameMode::Hardcore);
        service.check(id, "slate").unwrap();

        let err = service.check(id, "audio").unwrap_err();
        assert_eq!(err.kind(), "hardcore_violation");
        assert_eq!(err.offending_guess_index(), Some(0));
        assert_eq!(service.view(id).unwrap().guesses.len(), 1);
    }

    #[test]
    fn hint_does_not_spell_out_a_nearly_solved_word() {
        let service = GameService::new(
            Dictionary::builtin(),
            ServiceConfig {
                strict_dictionary: false,
                ..ServiceConfig::default()
            },
        );
        let id = start(&service, "crane", GameMode::Normal);
        service.check(id, "brane").unwrap();

        let outcome = service.hint(id).unwrap();
        assert_eq!(outcome.detail, Hint::NothingNew);
        assert_eq!(outcome.hints_remaining, DEFAULT_HINT_BUDGET - 1);
    }

    #[test]
    fn hint_budget_is_enforced() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);

        for remaining in (0..DEFAULT_HINT_BUDGET).rev() {
            let outcome = service.hint(id).unwrap();
            assert_eq!(outcome.hints_remaining, remaining);
        }
        let err = service.hint(id).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Engine(EngineError::NoHintsRemaining)
        ));
        assert_eq!(service.view(id).unwrap().hints.len(), 3);
    }

    #[test]
    fn view_hides_answer_until_game_over() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);
        assert!(service.view(id).unwrap().answer.is_none());

        service.check(id, "crane").unwrap();
        assert_eq!(service.view(id).unwrap().answer.as_deref(), Some("CRANE"));
    }

    #[test]
    fn save_score_requires_finished_game_once() {
        let scores = Arc::new(MemoryScores::new());
        let service = GameService::with_score_sink(
            Dictionary::builtin(),
            ServiceConfig::default(),
            scores.clone(),
        );
        let id = start(&service, "crane", GameMode::Normal);

        assert!(matches!(
            service.save_score(id, Some("ana")),
            Err(ServiceError::GameInProgress)
        ));

        service.check(id, "trace").unwrap();
        service.check(id, "crane").unwrap();

        let saved = service.save_score(id, Some("ana")).unwrap();
        assert_eq!(saved.score, 2);
        assert!(saved.won);
        assert_eq!(saved.word, "CRANE");

        assert!(matches!(
            service.save_score(id, Some("ana")),
            Err(ServiceError::ScoreAlreadySaved)
        ));
        assert_eq!(scores.entries(), vec![saved]);
    }

    #[test]
    fn blank_player_is_anonymous() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);
        service.check(id, "crane").unwrap();
        assert_eq!(service.save_score(id, Some("  ")).unwrap().player, ANONYMOUS);
    }

    #[test]
    fn unknown_session_is_reported() {
        let service = service();
        let id = Uuid::new_v4();
        assert!(matches!(
            service.check(id, "crane"),
            Err(ServiceError::UnknownSession(got)) if got == id
        ));
        assert!(service.end_game(id).is_err());
    }

    #[test]
    fn full_store_prunes_finished_games_first() {
        let config = ServiceConfig {
            max_sessions: 2,
            ..ServiceConfig::default()
        };
        let service = GameService::new(Dictionary::builtin(), config);
        let done = start(&service, "crane", GameMode::Normal);
        service.check(done, "crane").unwrap();
        let live = start(&service, "slate", GameMode::Normal);

        // The finished game makes room
        let third = start(&service, "trace", GameMode::Normal);
        assert_eq!(service.session_count(), 2);
        assert!(service.view(done).is_err());
        assert!(service.view(live).is_ok());
        assert!(service.view(third).is_ok());

        // Both remaining games are live
        assert!(matches!(
            service.new_game(NewGame::default()),
            Err(ServiceError::CapacityReached)
        ));
    }

    #[test]
    fn concurrent_guesses_never_exceed_six() {
        let service = Arc::new(service());
        let id = start(&service, "crane", GameMode::Normal);

        let handles: Vec<_> = (0..12)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || service.check(id, "slate").is_ok())
            })
            .collect();
        let accepted = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|&ok| ok)
            .count();

        assert_eq!(accepted, MAX_GUESSES);
        let view = service.view(id).unwrap();
        assert_eq!(view.guesses.len(), MAX_GUESSES);
        assert_eq!(view.status, GameStatus::Lost);
    }

    #[test]
    fn end_game_removes_session() {
        let service = service();
        let id = start(&service, "crane", GameMode::Normal);
        service.end_game(id).unwrap();
        assert_eq!(service.session_count(), 0);
    }
}
