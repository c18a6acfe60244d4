//! Deferred AI turns.
//!
//! When control reaches an AI seat with a fresh turn the engine arms a
//! single `ScheduledTurn`. The host polls `GameEngine::tick` from its own
//! loop; nothing here sleeps or blocks, so human intents keep flowing while
//! an AI is "thinking". Any intent that moves control disarms or replaces
//! the pending turn.

use std::time::{Duration, Instant};

use crate::core::SeatId;

/// An AI turn waiting for its thinking time to pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTurn {
    /// Seat that will act.
    pub seat: SeatId,
    /// Earliest instant the turn may run.
    pub not_before: Instant,
}

impl ScheduledTurn {
    /// Arm a turn for `seat`, due `delay` after `now`.
    ///
    /// A delay past what `Instant` can represent makes the turn due at once.
    #[must_use]
    pub fn new(seat: SeatId, now: Instant, delay: Duration) -> Self {
        Self {
            seat,
            not_before: now.checked_add(delay).unwrap_or(now),
        }
    }

    /// Check if the turn may run at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.not_before
    }

    /// Time left before the turn is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.not_before.saturating_duration_since(now)
    }
}
