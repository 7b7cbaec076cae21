//! The Set card game.
//!
//! Twelve (or, in the dealt variant, zero) cards start face up. Players pick
//! three cards; if every feature is all-same or all-different the triple is
//! a match and scores, otherwise it is a mismatch and costs points. Matched
//! cards leave play on the next interaction and are replaced from the deck.
//!
//! The presentation layer reads the zones and score and calls the intents
//! `choose_card`, `deal`, `cheat`, and `new_game`. The engine never calls
//! back into it.

mod game;

pub use game::{Game, GameSnapshot};
