//! The matching rule and the brute-force solver.
//!
//! Three cards form a set iff, for each of the four features independently,
//! the three values are either all the same or all different. A feature with
//! exactly two distinct values rules the triple out.

use tracing::trace;

use crate::cards::{Attributes, Card, Feature};

/// Number of distinct values among three.
fn distinct<T: PartialEq>(a: T, b: T, c: T) -> usize {
    if a == b && b == c {
        1
    } else if a == b || b == c || a == c {
        2
    } else {
        3
    }
}

/// Whether three attribute combinations form a set.
///
/// ```
/// use rust_set::cards::{Attributes, Color, Count, Fill, Shape};
/// use rust_set::rules::is_set;
///
/// let a = Attributes::new(Shape::Oval, Color::Red, Fill::Solid, Count::One);
/// let b = Attributes::new(Shape::Oval, Color::Green, Fill::Striped, Count::Two);
/// let c = Attributes::new(Shape::Oval, Color::Purple, Fill::Open, Count::Three);
/// assert!(is_set(&a, &b, &c));
///
/// let d = Attributes::new(Shape::Diamond, Color::Purple, Fill::Open, Count::Three);
/// assert!(!is_set(&a, &b, &d));
/// ```
#[must_use]
pub fn is_set(a: &Attributes, b: &Attributes, c: &Attributes) -> bool {
    [
        distinct(a.shape, b.shape, c.shape),
        distinct(a.color, b.color, c.color),
        distinct(a.fill, b.fill, c.fill),
        distinct(a.count, b.count, c.count),
    ]
    .iter()
    .all(|&n| n != 2)
}

/// Whether three cards form a set.
#[must_use]
pub fn cards_form_set(a: &Card, b: &Card, c: &Card) -> bool {
    is_set(a.attributes(), b.attributes(), c.attributes())
}

/// The unique combination that forms a set with `a` and `b`.
///
/// If `a == b` the result is that same combination, which is not a distinct
/// third card; callers pass two different cards.
#[must_use]
pub fn completing_attributes(a: &Attributes, b: &Attributes) -> Attributes {
    Attributes::new(
        a.shape.complete(b.shape),
        a.color.complete(b.color),
        a.fill.complete(b.fill),
        a.count.complete(b.count),
    )
}

/// Find the first set among `cards`.
///
/// Positions are enumerated in nested ascending order (outer, middle,
/// inner) over distinct cards, so the result is deterministic and always
/// sorted. O(n³) over the display window.
#[must_use]
pub fn find_set(cards: &[Card]) -> Option<[usize; 3]> {
    let n = cards.len();
    for first in 0..n {
        for second in first + 1..n {
            for third in second + 1..n {
                let (a, b, c) = (&cards[first], &cards[second], &cards[third]);
                if a.id() == b.id() || b.id() == c.id() || a.id() == c.id() {
                    continue;
                }
                if cards_form_set(a, b, c) {
                    trace!(first, second, third, "set found");
                    return Some([first, second, third]);
                }
            }
        }
    }
    None
}
