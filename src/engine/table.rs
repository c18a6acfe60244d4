//! The live table: everything the engine owns.
//!
//! `Table` is the complete mutable state of a game: seats, draw pile, the
//! whole discard pile, turn pointers and face. History entries and save
//! files store whole tables, so restoring one puts every card back exactly
//! where it was. `GameState` snapshots are derived from a table.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, Face};
use crate::core::{Direction, GameState, Phase, Player, SeatId};
use crate::rules;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Table {
    pub(crate) seats: Vec<Player>,
    pub(crate) deck: Deck,
    /// Bottom to top.
    pub(crate) discard: Vector<Card>,
    pub(crate) current: SeatId,
    pub(crate) direction: Direction,
    pub(crate) face: Face,
    pub(crate) turn_acted: bool,
    pub(crate) phase: Phase,
}

impl Table {
    pub(crate) fn new(seats: Vec<Player>, deck: Deck) -> Self {
        Self {
            seats,
            deck,
            discard: Vector::new(),
            current: SeatId::new(0),
            direction: Direction::Forward,
            face: Face::Light,
            turn_acted: false,
            phase: Phase::NotStarted,
        }
    }

    pub(crate) fn seat_count(&self) -> usize {
        self.seats.len()
    }

    pub(crate) fn player(&self, seat: SeatId) -> &Player {
        &self.seats[seat.index()]
    }

    pub(crate) fn player_mut(&mut self, seat: SeatId) -> &mut Player {
        &mut self.seats[seat.index()]
    }

    pub(crate) fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub(crate) fn next_seat(&self) -> SeatId {
        self.direction.next(self.current, self.seat_count())
    }

    /// Move the turn pointer one seat in the current direction.
    pub(crate) fn advance(&mut self) {
        self.current = self.next_seat();
    }

    pub(crate) fn top_discard(&self) -> Option<&Card> {
        self.discard.back()
    }

    pub(crate) fn is_playable(&self, card: &Card) -> bool {
        rules::is_playable(card, self.top_discard())
    }

    /// Move the top deck card into `seat`'s hand and return a copy of it.
    pub(crate) fn draw_into(&mut self, seat: SeatId) -> Option<Card> {
        let card = self.deck.draw_card()?;
        self.player_mut(seat).draw_card(Some(card));
        Some(card)
    }

    /// Turn over every card in play and the global face.
    pub(crate) fn flip_all(&mut self) {
        self.face = self.face.flipped();
        for player in &mut self.seats {
            player.flip_hand();
        }
        for card in self.discard.iter_mut() {
            card.flip();
        }
        self.deck.flip_all_cards();
    }

    /// Deal a fresh round from `deck`.
    ///
    /// Hands and the discard pile are cleared, each seat receives
    /// `hand_size` cards, and starter candidates are turned up until a
    /// numeral appears. Rejected candidates go to the bottom of the deck.
    /// Scores are kept.
    pub(crate) fn deal_round(&mut self, deck: Deck, hand_size: usize) {
        for player in &mut self.seats {
            player.clear_hand();
        }
        self.deck = deck;
        self.discard.clear();

        for seat in SeatId::all(self.seat_count()) {
            for _ in 0..hand_size {
                if self.draw_into(seat).is_none() {
                    break;
                }
            }
        }

        for _ in 0..self.deck.len() {
            let Some(candidate) = self.deck.draw_card() else {
                break;
            };
            if candidate.is_special() {
                self.deck.put_bottom(candidate);
            } else {
                self.discard.push_back(candidate);
                break;
            }
        }

        self.current = SeatId::new(0);
        self.direction = Direction::Forward;
        self.face = Face::Light;
        self.turn_acted = false;
        self.phase = Phase::InProgress;
    }

    /// Every card on the table: deck, then hands in seat order, then discard pile.
    pub(crate) fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck
            .iter()
            .chain(self.seats.iter().flat_map(|p| p.hand().iter()))
            .chain(self.discard.iter())
    }

    /// Cards across deck, hands and discard pile.
    pub(crate) fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.seats.iter().map(Player::hand_size).sum::<usize>()
    }

    /// Build a frozen snapshot of this table.
    pub(crate) fn snapshot(&self) -> GameState {
        let playable = rules::playable_indices(
            self.current_player().hand().iter(),
            self.top_discard(),
        );

        GameState::new(
            self.seats.clone(),
            self.current,
            self.top_discard().copied(),
            self.deck.len(),
            playable,
            self.direction,
            self.turn_acted,
            self.face,
            self.phase,
        )
    }
}
