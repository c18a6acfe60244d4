//! Wild color choice.
//!
//! A wild is declared as the palette color the hand holds most of. Ties,
//! and hands with nothing on the palette, are broken by a uniform random
//! choice among the tied colors.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::cards::{Card, Color, Face};
use crate::core::GameRng;

/// Pick a color from the `face` palette for a wild played out of `hand`.
pub fn choose_color(hand: &Vector<Card>, face: Face, rng: &mut GameRng) -> Color {
    let palette = Color::palette(face);

    let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
    for card in hand.iter() {
        let color = card.color();
        if color.is_on_palette(face) {
            *counts.entry(color).or_insert(0) += 1;
        }
    }

    let best = counts.values().copied().max().unwrap_or(0);
    let tied: Vec<Color> = palette
        .into_iter()
        .filter(|c| counts.get(c).copied().unwrap_or(0) == best)
        .collect();

    rng.choose(&tied).copied().unwrap_or(palette[0])
}

/// Light palette choice.
pub fn choose_light_color(hand: &Vector<Card>, rng: &mut GameRng) -> Color {
    choose_color(hand, Face::Light, rng)
}

/// Dark palette choice.
pub fn choose_dark_color(hand: &Vector<Card>, rng: &mut GameRng) -> Color {
    choose_color(hand, Face::Dark, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn hand(cards: &[(Color, Rank)]) -> Vector<Card> {
        cards.iter().map(|&(c, r)| Card::standard(c, r)).collect()
    }

    #[test]
    fn test_majority_color() {
        let h = hand(&[
            (Color::Blue, Rank::One),
            (Color::Blue, Rank::Skip),
            (Color::Red, Rank::Two),
            (Color::Wild, Rank::Wild),
        ]);
        let mut rng = GameRng::new(1);
        for _ in 0..10 {
            assert_eq!(choose_light_color(&h, &mut rng), Color::Blue);
        }
    }

    #[test]
    fn test_tie_picks_among_tied() {
        let h = hand(&[(Color::Green, Rank::One), (Color::Yellow, Rank::Two)]);
        let mut rng = GameRng::new(4);
        for _ in 0..20 {
            let c = choose_light_color(&h, &mut rng);
            assert!(c == Color::Green || c == Color::Yellow);
        }
    }

    #[test]
    fn test_empty_hand_uses_palette() {
        let mut rng = GameRng::new(4);
        for _ in 0..20 {
            assert!(choose_light_color(&Vector::new(), &mut rng).is_on_palette(Face::Light));
            assert!(choose_dark_color(&Vector::new(), &mut rng).is_on_palette(Face::Dark));
        }
    }

    #[test]
    fn test_dark_majority() {
        let mut h = hand(&[
            (Color::Yellow, Rank::Four),
            (Color::Yellow, Rank::Five),
            (Color::Red, Rank::Four),
        ]);
        for card in h.iter_mut() {
            card.flip();
        }
        let mut rng = GameRng::new(2);
        assert_eq!(choose_dark_color(&h, &mut rng), Color::Orange);
        assert_eq!(choose_color(&h, Face::Dark, &mut rng), Color::Orange);
    }
}
