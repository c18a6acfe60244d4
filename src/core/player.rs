//! Seats and the players sitting in them.
//!
//! ## SeatId
//!
//! Type-safe seat index for 2-4 seats.
//!
//! ## Player
//!
//! A named hand holder with a cumulative score. Human and AI seats share the
//! same `Player` type; `PlayerKind` tags which one it is, and AI seats carry
//! their difficulty. Move selection itself lives in `crate::ai`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Seat identifier. Seats are 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a table of `seat_count` seats.
    ///
    /// ```
    /// use flip_engine::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(3).collect();
    /// assert_eq!(seats, vec![SeatId::new(0), SeatId::new(1), SeatId::new(2)]);
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// AI strength tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Ai(Difficulty),
}

/// A seat's occupant: name, hand and score.
///
/// The hand keeps draw order; it is never re-sorted. Only the engine
/// mutates a seated player's hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    hand: Vector<Card>,
    score: u32,
}

impl Player {
    /// Create a human-controlled player with an empty hand.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    /// Create an AI-controlled player with an empty hand.
    pub fn ai(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self::new(name, PlayerKind::Ai(difficulty))
    }

    /// Create a player of the given kind with an empty hand.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Vector::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Difficulty if this seat is AI-controlled.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            PlayerKind::Ai(difficulty) => Some(difficulty),
            PlayerKind::Human => None,
        }
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        matches!(self.kind, PlayerKind::Ai(_))
    }

    /// Cards in draw order.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add a drawn card to the end of the hand. `None` is ignored.
    pub fn draw_card(&mut self, card: Option<Card>) {
        if let Some(card) = card {
            self.hand.push_back(card);
        }
    }

    /// Remove and return the card at `index`, or `None` if out of range.
    pub(crate) fn take_card(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Sum of point values of every held card.
    #[must_use]
    pub fn hand_value(&self) -> u32 {
        self.hand.iter().map(Card::point_value).sum()
    }

    /// Flip every held card.
    pub fn flip_hand(&mut self) {
        for card in self.hand.iter_mut() {
            card.flip();
        }
    }

    pub(crate) fn clear_hand(&mut self) {
        self.hand.clear();
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} cards)", self.name, self.hand.len())
    }
}
