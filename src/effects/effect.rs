//! Effect definitions.
//!
//! Every special rank maps to exactly one `Effect`. Effects only describe
//! what happens to the turn pointer, the next seat's hand and the face;
//! `EffectResolver` carries them out against the table.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Rank};

/// What a played card does once it lands on the discard pile.
///
/// ## Turn pointer
///
/// Effects move the turn pointer directly. The playing seat's own
/// `end_turn` then advances once more, so an effect that advances once
/// skips exactly one seat.
///
/// - `Skip`: advance once
/// - `Reverse`: invert direction (and advance once at a 2-seat table)
/// - `Draw`: advance to the victim, who draws `count`, then `extra_advances` more
/// - `Flip`: no movement
/// - `SkipEveryone`: no movement, the player acts again
/// - `DrawUntilColor`: advance to the victim, who draws until the color shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Numerals do nothing.
    None,

    Skip,

    Reverse,

    /// Next seat draws `count` cards and loses its turn.
    Draw {
        count: usize,
        /// Seats passed over after the victim.
        extra_advances: usize,
    },

    /// Toggle the active face of every card in play.
    Flip,

    /// The seat that played keeps the turn.
    SkipEveryone,

    /// Next seat draws until a card of `color` shows.
    ///
    /// `color` is the wild's chosen color; `None` only for a card
    /// that reached the discard without one.
    DrawUntilColor { color: Option<Color> },
}

impl Effect {
    /// The effect of `card` as it currently lies, using its active face.
    ///
    /// ```
    /// use flip_engine::cards::{Card, Color, Rank};
    /// use flip_engine::effects::Effect;
    ///
    /// let skip = Card::standard(Color::Red, Rank::Skip);
    /// assert_eq!(Effect::of(&skip), Effect::Skip);
    /// ```
    #[must_use]
    pub fn of(card: &Card) -> Self {
        match card.rank() {
            Rank::Skip => Effect::Skip,
            Rank::Reverse => Effect::Reverse,
            Rank::DrawOne => Effect::Draw {
                count: 1,
                extra_advances: 0,
            },
            Rank::WildDrawTwo => Effect::Draw {
                count: 2,
                extra_advances: 0,
            },
            Rank::DrawFive => Effect::Draw {
                count: 5,
                extra_advances: 1,
            },
            Rank::Flip => Effect::Flip,
            Rank::SkipEveryone => Effect::SkipEveryone,
            Rank::WildDrawColor => Effect::DrawUntilColor {
                color: card.chosen_color(),
            },
            Rank::Wild
            | Rank::Zero
            | Rank::One
            | Rank::Two
            | Rank::Three
            | Rank::Four
            | Rank::Five
            | Rank::Six
            | Rank::Seven
            | Rank::Eight
            | Rank::Nine => Effect::None,
        }
    }

    /// Check if this effect leaves the table untouched.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_effects() {
        let of = |color, rank| Effect::of(&Card::standard(color, rank));

        assert_eq!(of(Color::Red, Rank::Seven), Effect::None);
        assert_eq!(of(Color::Wild, Rank::Wild), Effect::None);
        assert_eq!(of(Color::Red, Rank::Skip), Effect::Skip);
        assert_eq!(of(Color::Red, Rank::Reverse), Effect::Reverse);
        assert_eq!(
            of(Color::Red, Rank::DrawOne),
            Effect::Draw { count: 1, extra_advances: 0 }
        );
        assert_eq!(
            of(Color::Wild, Rank::WildDrawTwo),
            Effect::Draw { count: 2, extra_advances: 0 }
        );
        assert_eq!(of(Color::Red, Rank::Flip), Effect::Flip);
    }

    #[test]
    fn test_dark_effects() {
        let dark = |color, rank| {
            let mut card = Card::standard(color, rank);
            card.flip();
            Effect::of(&card)
        };

        assert_eq!(dark(Color::Blue, Rank::Skip), Effect::SkipEveryone);
        assert_eq!(
            dark(Color::Blue, Rank::DrawOne),
            Effect::Draw { count: 5, extra_advances: 1 }
        );
        assert_eq!(
            dark(Color::Wild, Rank::WildDrawTwo),
            Effect::DrawUntilColor { color: None }
        );
        assert_eq!(dark(Color::Blue, Rank::Flip), Effect::Flip);
    }

    #[test]
    fn test_draw_until_carries_chosen_color() {
        let mut card = Card::standard(Color::Wild, Rank::WildDrawTwo);
        card.flip();
        card.set_chosen_color(Color::Teal);

        assert_eq!(
            Effect::of(&card),
            Effect::DrawUntilColor { color: Some(Color::Teal) }
        );
    }
}
