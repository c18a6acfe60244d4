//! # flip-engine
//!
//! A rules-enforcing engine for a two-faced UNO-family card game, 2-4 seats,
//! each human or AI.
//!
//! ## Design Principles
//!
//! 1. **Intents In, Snapshots Out**: Hosts submit intents (`play_card`,
//!    `draw_card`, `end_turn`, ...) and observe frozen `GameState` copies.
//!    Nothing outside the engine can reach the live table.
//!
//! 2. **One Owner**: The engine exclusively owns deck, hands, discard pile,
//!    history and listeners. Every intent runs to completion before the next.
//!
//! 3. **Full Snapshots**: Undo/redo and save files store complete copies of
//!    the table, so restoring is exact and never aliases live data.
//!
//! ## Architecture
//!
//! - **Two Faces**: Every card carries a light and a dark face. A flip card
//!   turns over every card in play at once.
//!
//! - **Persistent Data Structures**: Hands, deck and discard pile use `im`
//!   vectors, so history snapshots are cheap structural copies.
//!
//! - **Deferred AI**: AI turns are armed as `ScheduledTurn`s and run from the
//!   host's loop via `tick`, never by sleeping.
//!
//! ## Modules
//!
//! - `core`: Seats, players, snapshots, RNG, configuration, errors
//! - `cards`: Two-faced cards and the deck
//! - `rules`: Play legality
//! - `effects`: Special-card effects and their resolution
//! - `ai`: Tiered move selection and wild color choice
//! - `events`: Notifications and listeners
//! - `engine`: The game engine, history, persistence and AI scheduling

pub mod core;
pub mod cards;
pub mod rules;
pub mod effects;
pub mod ai;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    SeatId, Player, PlayerKind, Difficulty,
    GameRng, GameRngState,
    EngineConfig, SeatConfig,
    EngineError, ConfigError, PersistError,
    Direction, GameState, HandIndices, Phase,
};

pub use crate::cards::{Card, Color, Deck, Face, FaceValue, Rank, FULL_SET_SIZE};

pub use crate::rules::{is_playable, playable_indices};

pub use crate::effects::Effect;

pub use crate::ai::{AiMove, MoveSelector};

pub use crate::events::{EventLog, GameEvent, GameListener, ListenerId, Listeners};

pub use crate::engine::{GameEngine, History, PlayOutcome, ScheduledTurn};
