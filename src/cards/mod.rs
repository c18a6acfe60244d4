//! Card system: two-faced cards and the draw pile.
//!
//! ## Key Types
//!
//! - `Color`, `Rank`: printed values, with the light→dark mapping
//! - `Face`: which printed side is up
//! - `Card`: a physical card carrying both faces
//! - `Deck`: the ordered draw pile built from the full set

pub mod card;
pub mod deck;

pub use card::{Card, Color, Face, FaceValue, Rank};
pub use deck::{Deck, FULL_SET_SIZE};
