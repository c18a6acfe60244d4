//! Play legality.
//!
//! Legality depends only on the card and the discard top, so it is kept
//! free of engine state and shared by the engine, snapshots and the AI.

pub mod legality;

pub use legality::{is_playable, playable_indices};
