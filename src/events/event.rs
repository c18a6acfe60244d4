//! Game event types.
//!
//! Events are the notifications the engine hands to its listeners. Each one
//! that describes a state change carries a fresh `GameState` snapshot, so a
//! listener never needs to reach back into the engine.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, SeatId};

/// A lifecycle notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A game was dealt by `start_game` or `restart_game`.
    Initialized(GameState),

    /// Anything changed that observers should redraw.
    StateUpdated(GameState),

    /// Control passed to `seat`.
    TurnAdvanced { seat: SeatId, state: GameState },

    /// `winner` emptied their hand and scored `points`.
    RoundWon {
        winner: SeatId,
        points: u32,
        state: GameState,
    },

    /// `winner` reached the target score. No further round is dealt.
    GameWon { winner: SeatId, state: GameState },

    /// An intent was rejected, or an effect ran out of cards.
    Error(String),
}

impl GameEvent {
    /// Snapshot carried by this event, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        match self {
            GameEvent::Initialized(state)
            | GameEvent::StateUpdated(state)
            | GameEvent::TurnAdvanced { state, .. }
            | GameEvent::RoundWon { state, .. }
            | GameEvent::GameWon { state, .. } => Some(state),
            GameEvent::Error(_) => None,
        }
    }

    /// Short name of the event kind, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::Initialized(_) => "initialized",
            GameEvent::StateUpdated(_) => "state_updated",
            GameEvent::TurnAdvanced { .. } => "turn_advanced",
            GameEvent::RoundWon { .. } => "round_won",
            GameEvent::GameWon { .. } => "game_won",
            GameEvent::Error(_) => "error",
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, GameEvent::Error(_))
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnAdvanced { seat, .. } => write!(f, "turn advanced to {}", seat),
            GameEvent::RoundWon { winner, points, .. } => {
                write!(f, "{} won the round for {} points", winner, points)
            }
            GameEvent::GameWon { winner, .. } => write!(f, "{} won the game", winner),
            GameEvent::Error(msg) => write!(f, "error: {}", msg),
            other => f.write_str(other.kind()),
        }
    }
}
