//! Table configuration.
//!
//! Hosts describe the table once, up front:
//! - `SeatConfig`: name and controller for each seat
//! - `EngineConfig`: seats plus rule settings and AI pacing
//!
//! `EngineConfig::validate` runs before the engine allocates any state, so
//! a bad configuration never produces a half-built engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Difficulty, Player, PlayerKind};
use crate::cards::FULL_SET_SIZE;

/// Smallest supported table.
pub const MIN_SEATS: usize = 2;

/// Largest supported table.
pub const MAX_SEATS: usize = 4;

/// Cards dealt to each seat at the start of a round.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Cumulative score that wins the game.
pub const DEFAULT_TARGET_SCORE: u32 = 500;

/// Most cards a forced-color draw can make the target take.
pub const DEFAULT_FORCED_DRAW_CAP: usize = 20;

/// Longest thinking time an AI seat may be given.
pub const MAX_AI_DELAY: Duration = Duration::from_secs(60 * 60);

/// Check that dealing `hand_size` cards to `seats` seats leaves a starter.
pub(crate) fn hand_size_fits(hand_size: usize, seats: usize) -> bool {
    hand_size
        .checked_mul(seats)
        .is_some_and(|dealt| dealt < FULL_SET_SIZE)
}

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    pub name: String,
    /// Human or AI (with difficulty).
    pub kind: PlayerKind,
}

impl SeatConfig {
    /// A human-controlled seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// An AI-controlled seat.
    pub fn ai(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Ai(difficulty),
        }
    }

    pub(crate) fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.kind)
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,

    /// Cards dealt per seat each round.
    pub hand_size: usize,

    /// Score that ends the game.
    pub target_score: u32,

    /// Cap on cards drawn by a forced-color draw.
    pub forced_draw_cap: usize,

    /// Thinking time before a scheduled AI turn becomes due.
    pub ai_delay: Duration,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Seat count and AI flag count as given to `new`, checked by `validate`.
    requested: Option<(usize, usize)>,
}

impl EngineConfig {
    /// Describe a table of `seat_count` seats.
    ///
    /// `ai_flags[i]` marks seat `i` as AI-controlled at `difficulty`. An empty
    /// slice means every seat is human. Seats are named "Player N" or
    /// "AI Player N" (1-based). Seat and flag counts are checked by
    /// `validate`, not here.
    ///
    /// ```
    /// use flip_engine::core::{Difficulty, EngineConfig};
    ///
    /// let config = EngineConfig::new(3, &[false, true, true], Difficulty::Hard);
    /// assert!(config.validate().is_ok());
    /// assert_eq!(config.seats[1].name, "AI Player 2");
    /// ```
    pub fn new(seat_count: usize, ai_flags: &[bool], difficulty: Difficulty) -> Self {
        let seats = (0..seat_count)
            .map(|i| {
                if ai_flags.get(i).copied().unwrap_or(false) {
                    SeatConfig::ai(format!("AI Player {}", i + 1), difficulty)
                } else {
                    SeatConfig::human(format!("Player {}", i + 1))
                }
            })
            .collect();

        let flags = if ai_flags.is_empty() { seat_count } else { ai_flags.len() };

        Self {
            requested: Some((seat_count, flags)),
            ..Self::with_seats(seats)
        }
    }

    /// Describe a table from explicit seat configurations.
    pub fn with_seats(seats: Vec<SeatConfig>) -> Self {
        Self {
            seats,
            hand_size: DEFAULT_HAND_SIZE,
            target_score: DEFAULT_TARGET_SCORE,
            forced_draw_cap: DEFAULT_FORCED_DRAW_CAP,
            ai_delay: Duration::ZERO,
            seed: None,
            requested: None,
        }
    }

    /// Set the hand size dealt each round.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the score that ends the game.
    #[must_use]
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Set the forced-color draw cap.
    #[must_use]
    pub fn with_forced_draw_cap(mut self, cap: usize) -> Self {
        self.forced_draw_cap = cap;
        self
    }

    /// Set the AI thinking delay.
    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    /// Seed the engine RNG for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((seats, flags)) = self.requested {
            if seats != flags {
                return Err(ConfigError::AiFlagMismatch { seats, flags });
            }
        }

        let seats = self.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(ConfigError::SeatCount(seats));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if !hand_size_fits(self.hand_size, seats) {
            return Err(ConfigError::HandSizeTooLarge {
                hand_size: self.hand_size,
                seats,
            });
        }
        if self.target_score == 0 {
            return Err(ConfigError::ZeroTargetScore);
        }
        if self.ai_delay > MAX_AI_DELAY {
            return Err(ConfigError::AiDelayTooLong(self.ai_delay));
        }
        Ok(())
    }
}
