use std::sync::Arc;

use wordle_game::core::{LetterStatus, Word};
use wordle_game::engine::{GameMode, GameStatus, MAX_GUESSES};
use wordle_game::service::{
    GameService, MemoryScores, NewGame, ServiceConfig, ServiceError,
};
use wordle_game::wordlists::Dictionary;

fn service_with_scores() -> (GameService, Arc<MemoryScores>) {
    let scores = Arc::new(MemoryScores::new());
    let service = GameService::with_score_sink(
        Dictionary::builtin(),
        ServiceConfig::default(),
        scores.clone(),
    );
    (service, scores)
}

#[test]
fn hardcore_game_from_start_to_saved_score() {
    let (service, scores) = service_with_scores();
    let id = service
        .new_game_with_target(Word::new("crane").unwrap(), GameMode::Hardcore)
        .unwrap()
        .session_id;

    let first = service.check(id, "trace").unwrap();
    assert_eq!(
        first.feedback.statuses(),
        &[
            LetterStatus::Absent,
            LetterStatus::Correct,
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Correct
        ]
    );

    // Drops the green R
    let err = service.check(id, "slate").unwrap_err();
    assert_eq!(err.kind(), "hardcore_violation");
    assert_eq!(err.offending_guess_index(), Some(0));

    let hint = service.hint(id).unwrap();
    assert_eq!(hint.hint, "The word contains the letter N.");
    assert_eq!(hint.hints_remaining, 2);

    let last = service.check(id, "crane").unwrap();
    assert!(last.is_correct);
    assert_eq!(last.status, GameStatus::Won);
    assert_eq!(last.guesses_used, 2);

    let saved = service.save_score(id, Some("robin")).unwrap();
    assert_eq!(saved.score, 2);
    assert_eq!(saved.mode, GameMode::Hardcore);
    assert_eq!(scores.entries().len(), 1);
}

#[test]
fn losing_game_scores_six_and_reveals_answer() {
    let (service, scores) = service_with_scores();
    let id = service
        .new_game_with_target(Word::new("crane").unwrap(), GameMode::Normal)
        .unwrap()
        .session_id;

    for _ in 0..MAX_GUESSES {
        assert!(service.view(id).unwrap().answer.is_none());
        service.check(id, "slate").unwrap();
    }

    let view = service.view(id).unwrap();
    assert_eq!(view.status, GameStatus::Lost);
    assert_eq!(view.answer.as_deref(), Some("CRANE"));
    assert!(matches!(
        service.hint(id),
        Err(ServiceError::Engine(_))
    ));

    let saved = service.save_score(id, None).unwrap();
    assert_eq!(saved.score, MAX_GUESSES);
    assert!(!saved.won);
    assert_eq!(scores.entries()[0].player, "anonymous");
}

#[test]
fn random_games_use_dictionary_words() {
    let (service, _) = service_with_scores();
    let dictionary = Dictionary::builtin();

    for _ in 0..10 {
        let id = service.new_game(NewGame::default()).unwrap().session_id;
        // Guessing until the game ends reveals the target
        while !service.view(id).unwrap().status.is_terminal() {
            service.check(id, "slate").unwrap();
        }
        let answer = service.view(id).unwrap().answer.unwrap();
        assert!(dictionary.contains(&Word::new(&answer).unwrap()));
    }
}

#[test]
fn session_view_serializes_without_target_while_playing() {
    let (service, _) = service_with_scores();
    let id = service
        .new_game_with_target(Word::new("crane").unwrap(), GameMode::Normal)
        .unwrap()
        .session_id;
    service.check(id, "trace").unwrap();

    let json = serde_json::to_string(&service.view(id).unwrap()).unwrap();
    assert!(!json.contains("CRANE"));
    assert!(json.contains("TRACE"));
}
