//! Which cards may be played.
//!
//! A card is legal on the discard top when:
//! - it is a wild, or
//! - its color matches the top's effective color, or
//! - its rank matches the top's rank.
//!
//! With no top card, or an uncolored wild on top, every card is legal.

use crate::cards::{Card, Color};
use crate::core::HandIndices;

/// Check if `card` may be played on `top`.
#[must_use]
pub fn is_playable(card: &Card, top: Option<&Card>) -> bool {
    let Some(top) = top else {
        return true;
    };

    card.is_wild()
        || top.color() == Color::Wild
        || card.color() == top.color()
        || card.rank() == top.rank()
}

/// Indices of every legal card in `hand`, ascending.
pub fn playable_indices<'a>(
    hand: impl IntoIterator<Item = &'a Card>,
    top: Option<&Card>,
) -> HandIndices {
    hand.into_iter()
        .enumerate()
        .filter(|(_, card)| is_playable(card, top))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(color: Color, rank: Rank) -> Card {
        Card::standard(color, rank)
    }

    #[test]
    fn test_color_match() {
        let top = card(Color::Red, Rank::Five);
        assert!(is_playable(&card(Color::Red, Rank::Nine), Some(&top)));
        assert!(!is_playable(&card(Color::Blue, Rank::Nine), Some(&top)));
    }

    #[test]
    fn test_rank_match() {
        let top = card(Color::Red, Rank::Skip);
        assert!(is_playable(&card(Color::Green, Rank::Skip), Some(&top)));
        assert!(!is_playable(&card(Color::Green, Rank::Reverse), Some(&top)));
    }

    #[test]
    fn test_wild_always_legal() {
        let top = card(Color::Yellow, Rank::Two);
        assert!(is_playable(&card(Color::Wild, Rank::Wild), Some(&top)));
        assert!(is_playable(&card(Color::Wild, Rank::WildDrawTwo), Some(&top)));
    }

    #[test]
    fn test_chosen_color_on_top() {
        let mut top = card(Color::Wild, Rank::Wild);
        top.set_chosen_color(Color::Blue);

        assert!(is_playable(&card(Color::Blue, Rank::One), Some(&top)));
        assert!(!is_playable(&card(Color::Red, Rank::One), Some(&top)));
    }

    #[test]
    fn test_uncolored_wild_top_accepts_anything() {
        let top = card(Color::Wild, Rank::Wild);
        assert!(is_playable(&card(Color::Red, Rank::One), Some(&top)));
    }

    #[test]
    fn test_no_top_accepts_anything() {
        assert!(is_playable(&card(Color::Red, Rank::One), None));
    }

    #[test]
    fn test_dark_face_matching() {
        let mut top = card(Color::Red, Rank::Five);
        let mut teal = card(Color::Red, Rank::Two);
        let mut pink = card(Color::Green, Rank::Two);
        top.flip();
        teal.flip();
        pink.flip();

        assert!(is_playable(&teal, Some(&top)));
        assert!(!is_playable(&pink, Some(&top)));
    }

    #[test]
    fn test_playable_indices() {
        let top = card(Color::Red, Rank::Five);
        let hand = [
            card(Color::Blue, Rank::One),
            card(Color::Red, Rank::Two),
            card(Color::Wild, Rank::Wild),
            card(Color::Green, Rank::Five),
            card(Color::Yellow, Rank::Nine),
        ];

        let legal = playable_indices(hand.iter(), Some(&top));
        assert_eq!(legal.as_slice(), &[1, 2, 3]);
    }
}
