//! Listener registry.
//!
//! Listeners are owned by one engine and called in registration order.
//! A listener that panics is logged and skipped; the engine's state and the
//! remaining listeners are unaffected.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::warn;

use crate::core::{GameState, SeatId};

use super::GameEvent;

/// Receiver of engine notifications. Every method defaults to doing nothing.
pub trait GameListener {
    fn on_initialized(&mut self, _state: &GameState) {}

    fn on_state_updated(&mut self, _state: &GameState) {}

    fn on_turn_advanced(&mut self, _seat: SeatId, _state: &GameState) {}

    fn on_round_won(&mut self, _winner: SeatId, _points: u32, _state: &GameState) {}

    fn on_game_won(&mut self, _winner: SeatId, _state: &GameState) {}

    fn on_error(&mut self, _message: &str) {}
}

/// Handle returned by `add_listener`, used to remove that registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

/// Registered listeners, in registration order.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Box<dyn GameListener>)>,
    next_id: u64,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Registering the same kind twice yields two
    /// independent entries.
    pub fn add(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a registration. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `event` to every listener in order.
    pub fn notify(&mut self, event: &GameEvent) {
        for (id, listener) in &mut self.entries {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| dispatch(listener.as_mut(), event)));
            if outcome.is_err() {
                warn!(listener = %id, event = event.kind(), "listener panicked");
            }
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

fn dispatch(listener: &mut dyn GameListener, event: &GameEvent) {
    match event {
        GameEvent::Initialized(state) => listener.on_initialized(state),
        GameEvent::StateUpdated(state) => listener.on_state_updated(state),
        GameEvent::TurnAdvanced { seat, state } => listener.on_turn_advanced(*seat, state),
        GameEvent::RoundWon {
            winner,
            points,
            state,
        } => listener.on_round_won(*winner, *points, state),
        GameEvent::GameWon { winner, state } => listener.on_game_won(*winner, state),
        GameEvent::Error(message) => listener.on_error(message),
    }
}

/// Listener that records every notification.
///
/// Clones share one log, so a test keeps a clone and hands the other to
/// the engine.
///
/// ```
/// use flip_engine::events::{EventLog, GameEvent, GameListener};
///
/// let log = EventLog::new();
/// let mut handle = log.clone();
/// handle.on_error("deck is empty");
/// assert_eq!(log.events(), vec![GameEvent::Error("deck is empty".to_string())]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Kinds of everything recorded so far, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(GameEvent::kind).collect()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.events.borrow().iter().filter(|e| e.is_error()).count()
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<GameEvent> {
        self.events.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl GameListener for EventLog {
    fn on_initialized(&mut self, state: &GameState) {
        self.push(GameEvent::Initialized(state.clone()));
    }

    fn on_state_updated(&mut self, state: &GameState) {
        self.push(GameEvent::StateUpdated(state.clone()));
    }

    fn on_turn_advanced(&mut self, seat: SeatId, state: &GameState) {
        self.push(GameEvent::TurnAdvanced {
            seat,
            state: state.clone(),
        });
    }

    fn on_round_won(&mut self, winner: SeatId, points: u32, state: &GameState) {
        self.push(GameEvent::RoundWon {
            winner,
            points,
            state: state.clone(),
        });
    }

    fn on_game_won(&mut self, winner: SeatId, state: &GameState) {
        self.push(GameEvent::GameWon {
            winner,
            state: state.clone(),
        });
    }

    fn on_error(&mut self, message: &str) {
        self.push(GameEvent::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Panicker;

    impl GameListener for Panicker {
        fn on_error(&mut self, _message: &str) {
            panic!("listener failure");
        }
    }

    #[test]
    fn test_registration_order() {
        let first = EventLog::new();
        let second = EventLog::new();
        let mut listeners = Listeners::new();
        listeners.add(Box::new(first.clone()));
        listeners.add(Box::new(second.clone()));

        listeners.notify(&GameEvent::Error("a".to_string()));

        assert_eq!(first.error_count(), 1);
        assert_eq!(second.error_count(), 1);
    }

    #[test]
    fn test_remove() {
        let log = EventLog::new();
        let mut listeners = Listeners::new();
        let id = listeners.add(Box::new(log.clone()));

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert!(listeners.is_empty());

        listeners.notify(&GameEvent::Error("a".to_string()));
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_duplicate_registration() {
        let log = EventLog::new();
        let mut listeners = Listeners::new();
        let a = listeners.add(Box::new(log.clone()));
        let b = listeners.add(Box::new(log.clone()));
        assert_ne!(a, b);

        listeners.notify(&GameEvent::Error("a".to_string()));
        assert_eq!(log.error_count(), 2);
    }

    #[test]
    fn test_panicking_listener_is_contained() {
        let log = EventLog::new();
        let mut listeners = Listeners::new();
        listeners.add(Box::new(Panicker));
        listeners.add(Box::new(log.clone()));

        listeners.notify(&GameEvent::Error("a".to_string()));

        assert_eq!(log.error_count(), 1);
        assert_eq!(listeners.len(), 2);
    }
}
