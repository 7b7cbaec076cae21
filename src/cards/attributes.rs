//! Card attributes: four orthogonal features with three values each.
//!
//! ## Features
//!
//! - `Shape`: diamond, squiggle, oval
//! - `Color`: red, green, purple
//! - `Fill`: solid, striped, open
//! - `Count`: one, two, three
//!
//! The deck contains exactly one card per combination, 3×3×3×3 = 81 cards.
//! The engine only compares feature values; rendering them is up to the
//! collaborator.

use serde::{Deserialize, Serialize};

/// Number of values per feature.
pub const VALUES_PER_FEATURE: usize = 3;

/// Number of cards in the full deck.
pub const DECK_SIZE: usize = 81;

/// A three-valued card feature.
pub trait Feature: Copy + Eq + Sized {
    /// Every value, in canonical order.
    const ALL: [Self; VALUES_PER_FEATURE];

    /// Position of this value in `ALL`.
    fn index(self) -> usize;

    /// Value at `index` in `ALL`.
    ///
    /// Panics if `index >= 3`.
    #[must_use]
    fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// The value that completes a set with `self` and `other`:
    /// the same value if they agree, otherwise the remaining third value.
    #[must_use]
    fn complete(self, other: Self) -> Self {
        if self == other {
            self
        } else {
            Self::from_index(3 - self.index() - other.index())
        }
    }
}

/// Shape drawn on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

/// Color of the shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// Shading of the shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fill {
    Solid,
    Striped,
    Open,
}

/// Number of shapes on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// Number of shapes as an integer, 1..=3.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }
}

impl Feature for Shape {
    const ALL: [Self; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];

    fn index(self) -> usize {
        self as usize
    }
}

impl Feature for Color {
    const ALL: [Self; 3] = [Color::Red, Color::Green, Color::Purple];

    fn index(self) -> usize {
        self as usize
    }
}

impl Feature for Fill {
    const ALL: [Self; 3] = [Fill::Solid, Fill::Striped, Fill::Open];

    fn index(self) -> usize {
        self as usize
    }
}

impl Feature for Count {
    const ALL: [Self; 3] = [Count::One, Count::Two, Count::Three];

    fn index(self) -> usize {
        self as usize
    }
}

/// The four features of one card.
///
/// ## Example
///
/// ```
/// use rust_set::cards::{Attributes, Color, Count, Fill, Shape};
///
/// let card = Attributes::new(Shape::Oval, Color::Red, Fill::Striped, Count::Two);
/// assert_eq!(Attributes::from_ordinal(card.ordinal()), card);
/// assert_eq!(Attributes::all().count(), 81);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attributes {
    pub shape: Shape,
    pub color: Color,
    pub fill: Fill,
    pub count: Count,
}

impl Attributes {
    /// Create an attribute combination.
    #[must_use]
    pub const fn new(shape: Shape, color: Color, fill: Fill, count: Count) -> Self {
        Self {
            shape,
            color,
            fill,
            count,
        }
    }

    /// Position in the canonical enumeration (shape outermost, count innermost), 0..81.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        ((self.shape.index() * 3 + self.color.index()) * 3 + self.fill.index()) * 3
            + self.count.index()
    }

    /// Inverse of `ordinal`.
    ///
    /// Panics if `ordinal >= 81`.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Self {
        assert!(ordinal < DECK_SIZE, "ordinal {ordinal} outside the {DECK_SIZE}-card deck");
        Self {
            shape: Shape::from_index(ordinal / 27),
            color: Color::from_index(ordinal / 9 % 3),
            fill: Fill::from_index(ordinal / 3 % 3),
            count: Count::from_index(ordinal % 3),
        }
    }

    /// Every combination in canonical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..DECK_SIZE).map(Self::from_ordinal)
    }
}
