//! Undo/redo tests.
//!
//! These tests verify that every recorded intent can be undone to the exact
//! pre-intent snapshot and redone to the exact post-intent snapshot.

use flip_engine::cards::{Card, Color, Deck, Face, Rank, FULL_SET_SIZE};
use flip_engine::core::{Difficulty, Direction, EngineConfig, GameRng, SeatId};
use flip_engine::engine::GameEngine;
use flip_engine::events::EventLog;

fn seat(i: u8) -> SeatId {
    SeatId::new(i)
}

fn card(color: Color, rank: Rank) -> Card {
    Card::standard(color, rank)
}

fn stacked(top: &[Card]) -> GameEngine {
    let config = EngineConfig::new(2, &[], Difficulty::Medium)
        .with_hand_size(3)
        .with_seed(21);
    let deck = Deck::with_top_cards(&mut GameRng::new(4), top).unwrap();
    GameEngine::with_deck(config, deck).unwrap()
}

fn reverse_and_flip() -> GameEngine {
    stacked(&[
        card(Color::Red, Rank::Reverse),
        card(Color::Red, Rank::Flip),
        card(Color::Red, Rank::Two),
        card(Color::Blue, Rank::One),
        card(Color::Blue, Rank::Two),
        card(Color::Blue, Rank::Three),
        card(Color::Red, Rank::Seven),
    ])
}

/// Test that undo/redo on a fresh engine are silent no-ops.
#[test]
fn test_empty_history_is_noop() {
    let mut engine = reverse_and_flip();
    let log = EventLog::new();
    engine.add_listener(log.clone());

    assert!(!engine.undo());
    assert!(!engine.redo());

    engine.start_game().unwrap();
    let state = engine.state();
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
    assert!(!engine.undo());
    assert!(!engine.redo());
    assert_eq!(engine.state(), state);
    assert_eq!(log.kinds(), vec!["initialized"]);
}

/// Test undo and redo of a play that reverses direction.
#[test]
fn test_undo_redo_play() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();

    let before = engine.state();
    engine.play_card(seat(0), 0, None).unwrap();
    let after = engine.state();
    assert_eq!(after.direction(), Direction::Backward);

    assert!(engine.undo());
    let undone = engine.state();
    assert_eq!(undone, before);
    assert_eq!(undone.hand_sizes(), before.hand_sizes());
    assert_eq!(undone.current_seat(), before.current_seat());
    assert_eq!(undone.direction(), Direction::Forward);
    assert_eq!(undone.top_discard(), before.top_discard());
    assert!(engine.can_redo());

    assert!(engine.redo());
    assert_eq!(engine.state(), after);
    assert!(!engine.can_redo());
    assert_eq!(engine.total_cards(), FULL_SET_SIZE);
}

/// Test undo of draw and end of turn.
#[test]
fn test_undo_draw_and_end_turn() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();

    let start = engine.state();
    engine.draw_card(seat(0)).unwrap();
    let drawn = engine.state();
    engine.end_turn().unwrap();
    let ended = engine.state();

    assert!(engine.undo());
    assert_eq!(engine.state(), drawn);
    assert!(engine.undo());
    assert_eq!(engine.state(), start);
    assert_eq!(engine.state().deck_size(), start.deck_size());

    assert!(engine.redo());
    assert!(engine.redo());
    assert_eq!(engine.state(), ended);
}

/// Test that undo across a flip restores every light face.
#[test]
fn test_undo_flip() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();
    let before = engine.state();

    engine.play_card(seat(0), 1, None).unwrap();
    assert_eq!(engine.state().face(), Face::Dark);

    assert!(engine.undo());
    let state = engine.state();
    assert_eq!(state.face(), Face::Light);
    assert!(state
        .players()
        .iter()
        .all(|p| p.hand().iter().all(|c| c.face() == Face::Light)));
    assert!(engine.discard_pile().iter().all(|c| c.face() == Face::Light));
    assert_eq!(state, before);
}

/// Test that a new intent after undo discards the redo branch.
#[test]
fn test_new_intent_clears_redo() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();

    engine.play_card(seat(0), 0, None).unwrap();
    assert!(engine.undo());
    assert!(engine.can_redo());

    engine.play_card(seat(0), 2, None).unwrap();
    assert!(!engine.can_redo());
    assert_eq!(engine.undo_depth(), 1);
}

/// Test that rejected intents record nothing.
#[test]
fn test_rejected_intent_not_recorded() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();

    assert!(engine.play_card(seat(1), 0, None).is_err());
    assert!(engine.play_card(seat(0), 9, None).is_err());
    assert!(!engine.can_undo());

    engine.play_card(seat(0), 2, None).unwrap();
    assert!(engine.play_card(seat(0), 0, None).is_err());
    assert_eq!(engine.undo_depth(), 1);
}

/// Test that undo notifies listeners with the restored snapshot.
#[test]
fn test_undo_notifies() {
    let mut engine = reverse_and_flip();
    let log = EventLog::new();
    engine.add_listener(log.clone());
    engine.start_game().unwrap();
    let before = engine.state();

    engine.play_card(seat(0), 2, None).unwrap();
    log.clear();
    engine.undo();

    assert_eq!(log.kinds(), vec!["state_updated"]);
    assert_eq!(log.last().and_then(|e| e.state().cloned()), Some(before));
}

/// Test that history entries are unaffected by later mutation.
#[test]
fn test_history_entries_do_not_alias() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();

    let s0 = engine.state();
    engine.play_card(seat(0), 1, None).unwrap();
    let s1 = engine.state();
    engine.end_turn().unwrap();
    let s2 = engine.state();
    engine.draw_card(seat(1)).unwrap();
    let s3 = engine.state();

    assert!(engine.undo());
    assert_eq!(engine.state(), s2);
    assert!(engine.undo());
    assert_eq!(engine.state(), s1);
    assert!(engine.undo());
    assert_eq!(engine.state(), s0);

    assert!(engine.redo());
    assert!(engine.redo());
    assert!(engine.redo());
    assert_eq!(engine.state(), s3);
    assert_eq!(engine.total_cards(), FULL_SET_SIZE);
}

/// Test that a restart can be undone back to the previous game.
#[test]
fn test_undo_restart() {
    let mut engine = reverse_and_flip();
    engine.start_game().unwrap();
    engine.play_card(seat(0), 2, None).unwrap();
    let before = engine.state();

    engine.restart_game();
    assert!(engine.undo());
    assert_eq!(engine.state(), before);
}
