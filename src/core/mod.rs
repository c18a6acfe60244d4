//! Core engine types: seats, players, snapshots, RNG, configuration, errors.
//!
//! These are the building blocks the rules, AI and engine modules share.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, SeatConfig};
pub use error::{ConfigError, EngineError, PersistError};
pub use player::{Difficulty, Player, PlayerKind, SeatId};
pub use rng::{GameRng, GameRngState};
pub use state::{Direction, GameState, HandIndices, Phase};
