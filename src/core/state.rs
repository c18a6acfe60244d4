//! Game state snapshots.
//!
//! ## GameState
//!
//! A frozen, self-contained copy of everything a collaborator may observe:
//! - Seats (each a full copy of the player: name, kind, hand, score)
//! - Current seat, direction, active face, "turn acted" flag, phase
//! - Top of the discard pile (a copy) and the deck size (count only)
//! - Indices of legal plays in the current seat's hand
//!
//! Snapshots are built by the engine and never change afterwards. Fields are
//! private and exposed through accessors; holding a snapshot can never
//! affect the live table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, SeatId};
use crate::cards::{Card, Face};

/// Indices into a hand. Most hands hold fewer than 16 cards.
pub type HandIndices = SmallVec<[usize; 16]>;

/// Turn order around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index.
    #[default]
    Forward,
    /// Decreasing seat index.
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// The seat after `seat` in this direction.
    #[must_use]
    pub fn next(self, seat: SeatId, seat_count: usize) -> SeatId {
        let i = seat.index();
        let next = match self {
            Direction::Forward => (i + 1) % seat_count,
            Direction::Backward => (i + seat_count - 1) % seat_count,
        };
        SeatId::new(next as u8)
    }
}

/// Lifecycle phase of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Built but not yet dealt.
    #[default]
    NotStarted,
    /// A round is being played.
    InProgress,
    /// A seat reached the target score.
    GameOver,
}

/// Frozen snapshot of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    seats: Vec<Player>,
    current_seat: SeatId,
    top_discard: Option<Card>,
    deck_size: usize,
    playable: HandIndices,
    direction: Direction,
    turn_acted: bool,
    face: Face,
    phase: Phase,
}

impl GameState {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        seats: Vec<Player>,
        current_seat: SeatId,
        top_discard: Option<Card>,
        deck_size: usize,
        playable: HandIndices,
        direction: Direction,
        turn_acted: bool,
        face: Face,
        phase: Phase,
    ) -> Self {
        Self {
            seats,
            current_seat,
            top_discard,
            deck_size,
            playable,
            direction,
            turn_acted,
            face,
            phase,
        }
    }

    /// All seats in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.seats
    }

    /// The player in `seat`.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not at this table.
    #[must_use]
    pub fn player(&self, seat: SeatId) -> &Player {
        &self.seats[seat.index()]
    }

    /// The player in `seat`, or `None` if the seat is not at this table.
    #[must_use]
    pub fn get_player(&self, seat: SeatId) -> Option<&Player> {
        self.seats.get(seat.index())
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current_seat
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_seat)
    }

    /// Seat that follows the current one in the current direction.
    #[must_use]
    pub fn next_seat(&self) -> SeatId {
        self.direction.next(self.current_seat, self.seats.len())
    }

    /// Copy of the card on top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.top_discard.as_ref()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Indices of legal plays in the current seat's hand, ascending.
    #[must_use]
    pub fn playable_indices(&self) -> &[usize] {
        &self.playable
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the current seat has already acted this turn.
    #[must_use]
    pub fn turn_acted(&self) -> bool {
        self.turn_acted
    }

    /// Face showing on every card.
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Hand sizes in seat order.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.seats.iter().map(Player::hand_size).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Rank};
    use crate::core::Difficulty;

    fn sample() -> GameState {
        let mut ann = Player::human("Ann");
        ann.draw_card(Some(Card::standard(Color::Red, Rank::Four)));
        let bot = Player::ai("Bot", Difficulty::Easy);

        GameState::new(
            vec![ann, bot],
            SeatId::new(0),
            Some(Card::standard(Color::Red, Rank::Nine)),
            80,
            HandIndices::from_slice(&[0]),
            Direction::Forward,
            false,
            Face::Light,
            Phase::InProgress,
        )
    }

    #[test]
    fn test_direction_next() {
        let s = |i| SeatId::new(i);
        assert_eq!(Direction::Forward.next(s(0), 3), s(1));
        assert_eq!(Direction::Forward.next(s(2), 3), s(0));
        assert_eq!(Direction::Backward.next(s(0), 3), s(2));
        assert_eq!(Direction::Backward.next(s(1), 2), s(0));
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
    }

    #[test]
    fn test_accessors() {
        let state = sample();
        assert_eq!(state.seat_count(), 2);
        assert_eq!(state.current_player().name(), "Ann");
        assert_eq!(state.next_seat(), SeatId::new(1));
        assert_eq!(state.hand_sizes(), vec![1, 0]);
        assert_eq!(state.playable_indices(), &[0]);
        assert_eq!(state.deck_size(), 80);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn test_state_serialization() {
        let state = sample();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
