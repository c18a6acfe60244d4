//! AI move selection.
//!
//! AI seats are ordinary `Player`s tagged `PlayerKind::Ai(difficulty)`.
//! `Difficulty` implements `MoveSelector`, so the engine asks the seat's
//! tier for a move and applies it through the same intents a human uses.

pub mod color;
pub mod strategy;

pub use color::{choose_color, choose_dark_color, choose_light_color};
pub use strategy::{AiMove, MoveSelector, THREAT_HAND_SIZE};
