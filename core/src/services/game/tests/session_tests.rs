//! Tests for the session state machine

use crate::domain::entities::morpheme::Morpheme;
use crate::domain::entities::word::Word;
use crate::domain::value_objects::GameMode;
use crate::errors::GameError;
use crate::services::game::{GameEvent, GameSession};

fn morphemes() -> Vec<Morpheme> {
    vec![
        Morpheme::new(2, "re", "De nouveau ou en arrière"),
        Morpheme::new(5, "faire", "Accomplir une action"),
    ]
}

fn session() -> GameSession {
    GameSession::new(1, GameMode::MainGame, morphemes(), 10)
}

#[test]
fn test_toggle_selects_then_deselects() {
    let mut session = session();
    let re = morphemes()[0].clone();

    assert!(session.toggle_morpheme(&re).unwrap());
    assert!(session.is_selected(&re));
    assert!(!session.toggle_morpheme(&re).unwrap());
    assert!(!session.is_selected(&re));

    assert_eq!(
        session.drain_events(),
        vec![
            GameEvent::MorphemeSelected { morpheme_id: 2 },
            GameEvent::MorphemeDeselected { morpheme_id: 2 },
        ]
    );
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_selection_keeps_order() {
    let mut session = session();
    let [re, faire]: [Morpheme; 2] = morphemes().try_into().unwrap();

    session.toggle_morpheme(&faire).unwrap();
    session.toggle_morpheme(&re).unwrap();
    assert_eq!(session.current_text(), "fairere");

    session.toggle_morpheme(&faire).unwrap();
    session.toggle_morpheme(&faire).unwrap();
    assert_eq!(session.current_text(), "refaire");
}

#[test]
fn test_unavailable_morpheme_rejected() {
    let mut session = session();
    let foreign = Morpheme::new(9, "tion", "Action ou procédé");
    assert_eq!(
        session.toggle_morpheme(&foreign),
        Err(GameError::MorphemeNotAvailable { id: 9 })
    );
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_record_constructed_word() {
    let mut session = session();
    let word = Word {
        id: 1,
        text: "refaire".to_string(),
        morpheme_ids: vec![2, 5],
        points: 5,
        definition: String::new(),
    };

    session.record_constructed_word(&word);
    assert_eq!(session.score(), 15);
    assert_eq!(session.constructed_words()[0].word_id, Some(1));
    assert_eq!(
        session.drain_events(),
        vec![GameEvent::WordConstructed {
            text: "refaire".to_string(),
            points: 5
        }]
    );
}

#[test]
fn test_update_score_only_reports_changes() {
    let mut session = session();
    session.update_score(10);
    assert!(session.drain_events().is_empty());

    session.update_score(13);
    assert_eq!(session.drain_events(), vec![GameEvent::ScoreUpdated { score: 13 }]);
}

#[test]
fn test_free_build_record() {
    let mut session = GameSession::new(1, GameMode::FreeBuild, morphemes(), 0);
    session.record_free_build("refaire".to_string(), 3);

    assert_eq!(session.score(), 3);
    assert_eq!(session.constructed_words()[0].word_id, None);
    assert_eq!(session.drain_events(), vec![GameEvent::ScoreUpdated { score: 3 }]);
}

#[test]
fn test_reset_for_new_round() {
    let mut session = session();
    session.toggle_morpheme(&morphemes()[0]).unwrap();
    session.drain_events();

    session.reset_for_new_round();
    assert!(session.selected_morphemes().is_empty());
    assert_eq!(
        session.drain_events(),
        vec![GameEvent::SelectionCleared, GameEvent::RoundReset]
    );
}
