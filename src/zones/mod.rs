//! Zone system for card locations.
//!
//! The game has three zones, all backed by a single `Deck`:
//!
//! - displayed: face-up, selectable cards (the display window)
//! - undealt: face-down cards in draw order
//! - discarded: cards removed after a match

pub mod deck;

pub use deck::{Deck, Indices};
