//! Per-card selection state.
//!
//! Four states, two of them sticky:
//!
//! | state      | `toggle()` |
//! |------------|------------|
//! | `None`     | `Selected` |
//! | `Selected` | `None`     |
//! | `Mismatch` | no-op      |
//! | `Match`    | no-op      |
//!
//! `Mismatch` and `Match` are only ever cleared by the game itself, never by
//! a player click.

use serde::{Deserialize, Serialize};

/// Selection tag carried by every card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Not highlighted.
    #[default]
    None,
    /// Picked by the player, awaiting a third card.
    Selected,
    /// Part of a triple that failed the matching rule.
    Mismatch,
    /// Part of a triple that satisfied the matching rule.
    Match,
}

impl Selection {
    /// Apply a player click.
    pub fn toggle(&mut self) {
        *self = match *self {
            Selection::None => Selection::Selected,
            Selection::Selected => Selection::None,
            sticky @ (Selection::Mismatch | Selection::Match) => sticky,
        };
    }

    /// Whether a click leaves this state unchanged.
    #[must_use]
    pub fn is_sticky(self) -> bool {
        matches!(self, Selection::Mismatch | Selection::Match)
    }
}
