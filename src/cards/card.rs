//! Two-faced cards.
//!
//! Every physical card prints a light face and a dark face. Exactly one face
//! is active at a time, and the engine flips every card in play together, so
//! all cards always agree on the active face.
//!
//! ## Identity vs State
//!
//! The printed faces (`light`, `dark`) never change after construction.
//! Mutable state is limited to:
//! - `face`: which side is currently up
//! - `chosen`: a color picked for a wild after it was played
//!
//! `color()` and `rank()` always report the active face, with the chosen
//! color taking precedence while it is set.

use serde::{Deserialize, Serialize};

/// Card color across both faces.
///
/// `Wild` is the marker printed on wild cards, never a playable color choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Teal,
    Purple,
    Pink,
    Orange,
    Wild,
}

impl Color {
    /// The four colors printed on light faces.
    pub const LIGHT: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// The four colors printed on dark faces.
    pub const DARK: [Color; 4] = [Color::Teal, Color::Purple, Color::Pink, Color::Orange];

    /// Colors a player may choose for a wild while `face` is active.
    #[must_use]
    pub const fn palette(face: Face) -> [Color; 4] {
        match face {
            Face::Light => Self::LIGHT,
            Face::Dark => Self::DARK,
        }
    }

    /// The dark color paired with a light color. Wild maps to itself.
    #[must_use]
    pub const fn dark_counterpart(self) -> Color {
        match self {
            Color::Red => Color::Teal,
            Color::Blue => Color::Purple,
            Color::Green => Color::Pink,
            Color::Yellow => Color::Orange,
            other => other,
        }
    }

    /// Check if this color belongs to the palette of `face`.
    #[must_use]
    pub fn is_on_palette(self, face: Face) -> bool {
        Self::palette(face).contains(&self)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Teal => "Teal",
            Color::Purple => "Purple",
            Color::Pink => "Pink",
            Color::Orange => "Orange",
            Color::Wild => "Wild",
        };
        f.write_str(name)
    }
}

/// Card rank across both faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawOne,
    Flip,
    Wild,
    WildDrawTwo,
    // Dark-face only
    DrawFive,
    SkipEveryone,
    WildDrawColor,
}

impl Rank {
    /// Numeral ranks one through nine (zero is printed once per color).
    pub const ONE_TO_NINE: [Rank; 9] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
    ];

    /// The dark rank printed behind a light rank.
    ///
    /// Numerals, Reverse, Flip and Wild are printed identically on both faces.
    #[must_use]
    pub const fn dark_counterpart(self) -> Rank {
        match self {
            Rank::Skip => Rank::SkipEveryone,
            Rank::DrawOne => Rank::DrawFive,
            Rank::WildDrawTwo => Rank::WildDrawColor,
            other => other,
        }
    }

    /// Numeric value for numeral ranks, `None` for action ranks.
    #[must_use]
    pub const fn numeral(self) -> Option<u32> {
        match self {
            Rank::Zero => Some(0),
            Rank::One => Some(1),
            Rank::Two => Some(2),
            Rank::Three => Some(3),
            Rank::Four => Some(4),
            Rank::Five => Some(5),
            Rank::Six => Some(6),
            Rank::Seven => Some(7),
            Rank::Eight => Some(8),
            Rank::Nine => Some(9),
            _ => None,
        }
    }

    /// Scoring value when this rank is left in an opponent's hand.
    #[must_use]
    pub const fn point_value(self) -> u32 {
        match self {
            Rank::DrawOne => 10,
            Rank::Skip | Rank::Reverse | Rank::Flip | Rank::DrawFive => 20,
            Rank::SkipEveryone => 30,
            Rank::Wild => 40,
            Rank::WildDrawTwo => 50,
            Rank::WildDrawColor => 60,
            numeral => match numeral.numeral() {
                Some(n) => n,
                None => 0,
            },
        }
    }

    /// Every non-numeral rank carries an effect when played.
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.numeral().is_none()
    }

    /// Ranks that make the next seat draw or lose its turn.
    #[must_use]
    pub const fn is_disruptive(self) -> bool {
        matches!(
            self,
            Rank::DrawOne
                | Rank::DrawFive
                | Rank::WildDrawTwo
                | Rank::WildDrawColor
                | Rank::Skip
                | Rank::SkipEveryone
        )
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Skip => "Skip",
            Rank::Reverse => "Reverse",
            Rank::DrawOne => "Draw One",
            Rank::Flip => "Flip",
            Rank::Wild => "Wild",
            Rank::WildDrawTwo => "Wild Draw Two",
            Rank::DrawFive => "Draw Five",
            Rank::SkipEveryone => "Skip Everyone",
            Rank::WildDrawColor => "Wild Draw Color",
            numeral => return write!(f, "{}", numeral.point_value()),
        };
        f.write_str(name)
    }
}

/// Which printed side of the cards is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    #[default]
    Light,
    Dark,
}

impl Face {
    /// The opposite face.
    #[must_use]
    pub const fn flipped(self) -> Face {
        match self {
            Face::Light => Face::Dark,
            Face::Dark => Face::Light,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Light => f.write_str("Light"),
            Face::Dark => f.write_str("Dark"),
        }
    }
}

/// One printed side of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceValue {
    pub color: Color,
    pub rank: Rank,
}

impl FaceValue {
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }
}

/// A physical two-faced card.
///
/// Cards are small `Copy` values; cloning a hand or a pile is always a deep
/// copy, so snapshots never share card state with the live table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    light: FaceValue,
    dark: FaceValue,
    face: Face,
    /// Color picked for a played wild. Cleared on flip.
    #[serde(default)]
    chosen: Option<Color>,
}

impl Card {
    /// Create a card from both printed faces, light side up.
    ///
    /// A wild marker must be printed on both faces or on neither.
    #[must_use]
    pub fn new(light: FaceValue, dark: FaceValue) -> Self {
        debug_assert_eq!(
            light.color == Color::Wild,
            dark.color == Color::Wild,
            "wild marker must appear on both faces"
        );
        Self {
            light,
            dark,
            face: Face::Light,
            chosen: None,
        }
    }

    /// Create a card whose dark face follows the standard light→dark mapping.
    ///
    /// ```
    /// use flip_engine::cards::{Card, Color, Rank};
    ///
    /// let card = Card::standard(Color::Red, Rank::Skip);
    /// assert_eq!(card.dark().color, Color::Teal);
    /// assert_eq!(card.dark().rank, Rank::SkipEveryone);
    /// ```
    #[must_use]
    pub fn standard(color: Color, rank: Rank) -> Self {
        Self::new(
            FaceValue::new(color, rank),
            FaceValue::new(color.dark_counterpart(), rank.dark_counterpart()),
        )
    }

    /// Printed light face.
    #[must_use]
    pub const fn light(&self) -> FaceValue {
        self.light
    }

    /// Printed dark face.
    #[must_use]
    pub const fn dark(&self) -> FaceValue {
        self.dark
    }

    /// Currently active face.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    fn active(&self) -> FaceValue {
        match self.face {
            Face::Light => self.light,
            Face::Dark => self.dark,
        }
    }

    /// Effective color: the chosen color of a played wild, else the active face's color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.chosen.unwrap_or(self.active().color)
    }

    /// Rank of the active face.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.active().rank
    }

    /// Color picked for this wild, if any.
    #[must_use]
    pub const fn chosen_color(&self) -> Option<Color> {
        self.chosen
    }

    /// Check if the active face is a wild (ignores any chosen color).
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.active().color == Color::Wild
    }

    /// Check if the active face carries an effect.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.rank().is_special()
    }

    /// Scoring value of the active face.
    #[must_use]
    pub fn point_value(&self) -> u32 {
        self.rank().point_value()
    }

    /// Turn the card over. Any chosen wild color is lost.
    pub fn flip(&mut self) {
        self.face = self.face.flipped();
        self.chosen = None;
    }

    /// Record the color picked for a played wild.
    pub(crate) fn set_chosen_color(&mut self, color: Color) {
        self.chosen = Some(color);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.is_wild(), self.chosen) {
            (true, Some(color)) => write!(f, "{} ({})", self.rank(), color),
            (true, None) => write!(f, "{}", self.rank()),
            (false, _) => write!(f, "{} {}", self.color(), self.rank()),
        }
    }
}
