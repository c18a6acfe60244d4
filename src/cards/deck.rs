//! The draw pile.
//!
//! A `Deck` is a stack: cards are drawn from and returned to the top
//! (the back of the vector). It is built once per round from the fixed card
//! set and never refilled from the discard pile.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Face, FaceValue, Rank};
use crate::core::GameRng;

/// Number of cards in the full set: 27 per base color plus 8 wilds.
pub const FULL_SET_SIZE: usize = 4 * 27 + 8;

/// Ordered draw pile. Top of the deck is the back of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build the full card set and shuffle it.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut cards = Self::full_set();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build the full card set in construction order, without shuffling.
    #[must_use]
    pub fn unshuffled() -> Self {
        Self {
            cards: Self::full_set().into_iter().collect(),
        }
    }

    /// Build a shuffled full set, then lift `top` onto the top of the deck.
    ///
    /// `top[0]` is the first card drawn, `top[1]` the second, and so on.
    /// Returns `None` if the set cannot supply one of the requested cards
    /// (for example a third copy of a numeral).
    ///
    /// ```
    /// use flip_engine::cards::{Card, Color, Deck, Rank};
    /// use flip_engine::core::GameRng;
    ///
    /// let mut rng = GameRng::new(7);
    /// let red_two = Card::standard(Color::Red, Rank::Two);
    /// let mut deck = Deck::with_top_cards(&mut rng, &[red_two]).unwrap();
    /// assert_eq!(deck.draw_card(), Some(red_two));
    /// ```
    #[must_use]
    pub fn with_top_cards(rng: &mut GameRng, top: &[Card]) -> Option<Self> {
        let mut rest = Self::full_set();
        rng.shuffle(&mut rest);

        let mut lifted = Vec::with_capacity(top.len());
        for wanted in top {
            let pos = rest.iter().position(|c| c == wanted)?;
            lifted.push(rest.remove(pos));
        }

        // Draw order is reverse storage order.
        rest.extend(lifted.into_iter().rev());
        Some(Self {
            cards: rest.into_iter().collect(),
        })
    }

    /// The full card set, light side up.
    fn full_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(FULL_SET_SIZE);

        for color in Color::LIGHT {
            cards.push(Card::standard(color, Rank::Zero));
            for rank in Rank::ONE_TO_NINE {
                cards.push(Card::standard(color, rank));
                cards.push(Card::standard(color, rank));
            }
            for rank in [Rank::Skip, Rank::Reverse, Rank::DrawOne, Rank::Flip] {
                cards.push(Card::standard(color, rank));
                cards.push(Card::standard(color, rank));
            }
        }

        for _ in 0..4 {
            cards.push(Card::standard(Color::Wild, Rank::Wild));
        }
        for _ in 0..4 {
            cards.push(Card::standard(Color::Wild, Rank::WildDrawTwo));
        }

        cards
    }

    /// Check that `cards` is exactly the full set, comparing printed faces.
    ///
    /// Which face is up and any chosen wild color are ignored.
    #[must_use]
    pub fn is_full_set<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
        let mut counts: FxHashMap<(FaceValue, FaceValue), isize> = FxHashMap::default();
        for card in Self::full_set() {
            *counts.entry((card.light(), card.dark())).or_default() += 1;
        }
        for card in cards {
            *counts.entry((card.light(), card.dark())).or_default() -= 1;
        }
        counts.values().all(|&n| n == 0)
    }

    /// Check if this deck is the full set, light side up, with no chosen colors.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.cards
            .iter()
            .all(|c| c.face() == Face::Light && c.chosen_color().is_none())
            && Self::is_full_set(self.cards.iter())
    }

    /// Remove and return the top card, or `None` if the deck is exhausted.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Slide a card under the bottom of the deck.
    pub fn put_bottom(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Flip every card remaining in the deck.
    pub fn flip_all_cards(&mut self) {
        for card in self.cards.iter_mut() {
            card.flip();
        }
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
