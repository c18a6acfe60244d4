//! The orchestrating engine.
//!
//! - `GameEngine`: intents, effects, scoring, AI turns, notifications
//! - `History`: snapshot undo/redo stacks
//! - `ScheduledTurn`: a deferred AI turn
//! - save files (`GameEngine::save`/`load`), framed by `MAGIC` and `FORMAT_VERSION`

mod game;
mod history;
mod persist;
mod scheduler;
mod table;

pub use game::{GameEngine, PlayOutcome};
pub use history::History;
pub use persist::{FORMAT_VERSION, MAGIC};
pub use scheduler::ScheduledTurn;
pub(crate) use table::Table;
