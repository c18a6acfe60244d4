//! Engine error types.
//!
//! Each failure class gets its own enum so hosts can tell them apart:
//! - `EngineError`: rejected intents and deck exhaustion
//! - `ConfigError`: invalid table setup, caught before any state exists
//! - `PersistError`: save/load failures

use std::time::Duration;

use thiserror::Error;

use super::player::SeatId;
use crate::cards::{Card, Color, Face};

/// An intent the engine refused. State is unchanged when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("the game has not been started")]
    NotStarted,

    #[error("the game is over")]
    GameOver,

    #[error("the game has already been started")]
    AlreadyStarted,

    #[error("it is not {seat}'s turn ({current} is to act)")]
    NotYourTurn { seat: SeatId, current: SeatId },

    #[error("the turn has already been taken; end the turn")]
    TurnAlreadyActed,

    #[error("invalid card index: {index} (hand has {hand_size} cards)")]
    InvalidHandIndex { index: usize, hand_size: usize },

    #[error("cannot play {card} on {top}")]
    IllegalPlay { card: Card, top: Card },

    #[error("a color must be chosen for this card")]
    ColorRequired,

    #[error("{color} is not a {face} color")]
    InvalidColor { color: Color, face: Face },

    #[error("deck is empty")]
    DeckEmpty,
}

/// Invalid table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("game requires 2-4 seats, got {0}")]
    SeatCount(usize),

    #[error("AI flags must match seat count ({flags} flags for {seats} seats)")]
    AiFlagMismatch { seats: usize, flags: usize },

    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("hand size {hand_size} leaves no starter card for {seats} seats")]
    HandSizeTooLarge { hand_size: usize, seats: usize },

    #[error("target score must be at least 1")]
    ZeroTargetScore,

    #[error("AI delay {0:?} is longer than the allowed maximum")]
    AiDelayTooLong(Duration),

    #[error("deck is not a fresh full set ({cards} cards)")]
    IncompleteDeck { cards: usize },
}

/// Save or load failure.
///
/// A failed load never touches the live engine.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode save data: {0}")]
    Encode(#[source] bincode::Error),

    #[error("could not decode save data: {0}")]
    Decode(#[source] bincode::Error),

    #[error("not a save file")]
    BadMagic,

    #[error("unsupported save format version {0}")]
    UnsupportedVersion(u16),

    #[error("save data is inconsistent: {0}")]
    Inconsistent(String),
}
