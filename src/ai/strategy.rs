//! Tiered move selection.
//!
//! ## Tiers
//!
//! - **Easy**: uniform random legal card, else draw.
//! - **Medium**: first special card, else first card matching the discard
//!   color, else the highest-value card, else draw.
//! - **Hard**: when the next seat is down to two cards or fewer, the first
//!   disruptive card; otherwise Medium over the non-wild cards, falling back
//!   to Medium over every legal card when only wilds are legal.
//!
//! Every tier only ever returns an index from the snapshot's legal set.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Face};
use crate::core::{Difficulty, GameRng, GameState};

use super::color;

/// Hand size at or below which Hard tries to disrupt the next seat.
pub const THREAT_HAND_SIZE: usize = 2;

/// A move chosen for the current seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiMove {
    /// Play the card at this hand index.
    Play(usize),
    /// Draw from the deck.
    Draw,
}

/// Move selection for an AI-controlled seat.
pub trait MoveSelector {
    /// Choose a move for the current seat of `state`.
    fn select_move(&self, state: &GameState, rng: &mut GameRng) -> AiMove;

    /// Choose a color from the `face` palette for a wild played out of `hand`.
    fn choose_color(&self, hand: &Vector<Card>, face: Face, rng: &mut GameRng) -> Color {
        color::choose_color(hand, face, rng)
    }
}

impl MoveSelector for Difficulty {
    fn select_move(&self, state: &GameState, rng: &mut GameRng) -> AiMove {
        let legal = state.playable_indices();
        if legal.is_empty() {
            return AiMove::Draw;
        }

        let hand = state.current_player().hand();
        let index = match self {
            Difficulty::Easy => easy(legal, rng),
            Difficulty::Medium => medium(hand, legal, state.top_discard()),
            Difficulty::Hard => hard(state, hand, legal),
        };

        index.map_or(AiMove::Draw, AiMove::Play)
    }
}

fn easy(legal: &[usize], rng: &mut GameRng) -> Option<usize> {
    rng.choose(legal).copied()
}

fn medium(hand: &Vector<Card>, legal: &[usize], top: Option<&Card>) -> Option<usize> {
    if let Some(&i) = legal.iter().find(|&&i| hand[i].is_special()) {
        return Some(i);
    }

    if let Some(top) = top {
        let top_color = top.color();
        if let Some(&i) = legal.iter().find(|&&i| hand[i].color() == top_color) {
            return Some(i);
        }
    }

    // First card of the highest value.
    let mut best: Option<usize> = None;
    for &i in legal {
        let better = match best {
            Some(b) => hand[i].point_value() > hand[b].point_value(),
            None => true,
        };
        if better {
            best = Some(i);
        }
    }
    best
}

fn hard(state: &GameState, hand: &Vector<Card>, legal: &[usize]) -> Option<usize> {
    let next_hand = state.player(state.next_seat()).hand_size();
    if next_hand <= THREAT_HAND_SIZE {
        if let Some(&i) = legal.iter().find(|&&i| hand[i].rank().is_disruptive()) {
            return Some(i);
        }
    }

    let non_wild: Vec<usize> = legal.iter().copied().filter(|&i| !hand[i].is_wild()).collect();
    if non_wild.is_empty() {
        medium(hand, legal, state.top_discard())
    } else {
        medium(hand, &non_wild, state.top_discard())
    }
}
