//! Engine notifications.
//!
//! - `GameEvent`: one notification, with its snapshot
//! - `GameListener`: callback surface a host implements
//! - `Listeners`: the engine-owned registry
//! - `EventLog`: a recording listener for hosts and tests

mod event;
mod listener;

pub use event::GameEvent;
pub use listener::{EventLog, GameListener, ListenerId, Listeners};
