//! Card instances.
//!
//! A `Card` pairs an immutable identity and attribute combination with the
//! one piece of mutable state the game tracks per card: its `Selection`.
//! Equality of game objects is by identity; two cards with equal attributes
//! are the same card because the deck holds each combination once.

use serde::{Deserialize, Serialize};

use super::attributes::{Attributes, Color, Count, Fill, Shape};
use super::selection::Selection;
use crate::core::entity::CardId;

/// A card in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    attributes: Attributes,
    selection: Selection,
}

impl Card {
    /// Create an unselected card whose id is the attribute ordinal.
    #[must_use]
    pub fn new(attributes: Attributes) -> Self {
        Self {
            id: CardId::new(attributes.ordinal() as u32),
            attributes,
            selection: Selection::None,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.attributes.shape
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.attributes.color
    }

    #[must_use]
    pub fn fill(&self) -> Fill {
        self.attributes.fill
    }

    #[must_use]
    pub fn count(&self) -> Count {
        self.attributes.count
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Apply a player click (see `Selection::toggle`).
    pub fn toggle(&mut self) {
        self.selection.toggle();
    }

    /// Overwrite the selection tag. Reserved for the game's own transitions.
    pub(crate) fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }
}
