//! AI seat tests.
//!
//! These tests verify that AI moves stay legal, that AI turns are deferred
//! until the host ticks the engine, and that all-AI tables play to an end.

use std::time::Duration;

use flip_engine::ai::{AiMove, MoveSelector};
use flip_engine::cards::{Card, Color, Deck, Rank, FULL_SET_SIZE};
use flip_engine::core::{Difficulty, EngineConfig, GameRng, Phase, SeatConfig, SeatId};
use flip_engine::engine::GameEngine;

fn seat(i: u8) -> SeatId {
    SeatId::new(i)
}

fn card(color: Color, rank: Rank) -> Card {
    Card::standard(color, rank)
}

fn all_ai(seats: usize, difficulty: Difficulty, seed: u64) -> GameEngine {
    let flags = vec![true; seats];
    let config = EngineConfig::new(seats, &flags, difficulty)
        .with_target_score(150)
        .with_seed(seed);
    GameEngine::new(config).unwrap()
}

/// Test that every tier only picks from the legal set, drawing when empty.
#[test]
fn test_moves_stay_legal() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..5 {
            let mut engine = all_ai(3, difficulty, seed);
            engine.start_game().unwrap();
            let mut rng = GameRng::new(seed + 100);

            for _ in 0..150 {
                let state = engine.state();
                if state.phase() != Phase::InProgress {
                    break;
                }
                match difficulty.select_move(&state, &mut rng) {
                    AiMove::Play(i) => assert!(state.playable_indices().contains(&i)),
                    AiMove::Draw => assert!(state.playable_indices().is_empty()),
                }
                if engine.run_ai_turns(1) == 0 {
                    break;
                }
            }
        }
    }
}

/// Test that all-AI tables keep every card and finish or keep cycling.
#[test]
fn test_all_ai_games_run() {
    for seats in 2..=4 {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut engine = all_ai(seats, difficulty, seats as u64 * 31);
            engine.start_game().unwrap();

            let limit = 5_000;
            let ran = engine.run_ai_turns(limit);

            assert_eq!(engine.total_cards(), FULL_SET_SIZE);
            let state = engine.state();
            assert!(state.phase() == Phase::GameOver || ran == limit);
            if state.phase() == Phase::GameOver {
                assert!(state.players().iter().any(|p| p.score() >= 150));
                assert!(engine.pending_ai_turn().is_none());
            }
        }
    }
}

/// Test that an AI turn waits for its thinking time.
#[test]
fn test_tick_respects_delay() {
    let config = EngineConfig::new(2, &[true, false], Difficulty::Medium)
        .with_ai_delay(Duration::from_millis(250))
        .with_seed(5);
    let mut engine = GameEngine::new(config).unwrap();
    engine.start_game().unwrap();

    let turn = engine.pending_ai_turn().expect("AI seat 0 is armed");
    assert_eq!(turn.seat, seat(0));

    let early = turn.not_before - Duration::from_millis(100);
    assert!(!engine.tick(early));
    assert_eq!(engine.state().current_seat(), seat(0));
    assert!(engine.pending_ai_turn().is_some());

    assert!(engine.tick(turn.not_before));
    assert!(engine.can_undo());
}

/// Test that host intents keep working while an AI turn is pending.
#[test]
fn test_undo_disarms_pending_turn() {
    let config = EngineConfig::new(2, &[false, true], Difficulty::Easy)
        .with_ai_delay(Duration::from_secs(60))
        .with_seed(8);
    let mut engine = GameEngine::new(config).unwrap();
    engine.start_game().unwrap();
    assert!(engine.pending_ai_turn().is_none());

    engine.draw_card(seat(0)).unwrap();
    engine.end_turn().unwrap();
    assert_eq!(engine.pending_ai_turn().map(|t| t.seat), Some(seat(1)));

    assert!(engine.undo());
    assert!(engine.pending_ai_turn().is_none());
    assert_eq!(engine.state().current_seat(), seat(0));
}

/// Test that an AI wild takes the color it holds most of, then ends its turn.
#[test]
fn test_ai_declares_majority_color() {
    let config = EngineConfig::with_seats(vec![
        SeatConfig::ai("Bot", Difficulty::Medium),
        SeatConfig::human("Ann"),
    ])
    .with_hand_size(3)
    .with_seed(2);
    let deck = Deck::with_top_cards(
        &mut GameRng::new(3),
        &[
            card(Color::Wild, Rank::Wild),
            card(Color::Blue, Rank::Three),
            card(Color::Blue, Rank::Four),
            card(Color::Green, Rank::One),
            card(Color::Green, Rank::Two),
            card(Color::Green, Rank::Three),
            card(Color::Red, Rank::Seven),
        ],
    )
    .unwrap();
    let mut engine = GameEngine::with_deck(config, deck).unwrap();
    engine.start_game().unwrap();

    assert_eq!(engine.run_ai_turns(10), 1);
    let state = engine.state();
    let top = state.top_discard().unwrap();
    assert_eq!(top.rank(), Rank::Wild);
    assert_eq!(top.color(), Color::Blue);
    assert_eq!(state.current_seat(), seat(1));
    assert_eq!(state.player(seat(0)).hand_size(), 2);
}

/// Test that an AI with nothing to play draws, and plays the draw if it fits.
#[test]
fn test_ai_draws_then_plays() {
    let config = EngineConfig::with_seats(vec![
        SeatConfig::ai("Bot", Difficulty::Hard),
        SeatConfig::human("Ann"),
    ])
    .with_hand_size(2)
    .with_seed(2);
    let deck = Deck::with_top_cards(
        &mut GameRng::new(3),
        &[
            card(Color::Blue, Rank::Three),
            card(Color::Blue, Rank::Four),
            card(Color::Green, Rank::One),
            card(Color::Green, Rank::Two),
            card(Color::Red, Rank::Seven),
            card(Color::Red, Rank::Two),
        ],
    )
    .unwrap();
    let mut engine = GameEngine::with_deck(config, deck).unwrap();
    engine.start_game().unwrap();

    assert_eq!(engine.run_ai_turns(10), 1);
    let state = engine.state();
    assert_eq!(state.top_discard(), Some(&card(Color::Red, Rank::Two)));
    assert_eq!(state.player(seat(0)).hand_size(), 2);
    assert_eq!(state.current_seat(), seat(1));
}
