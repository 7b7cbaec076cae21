//! # rust-set
//!
//! Rule engine for Set, the pattern-matching card game.
//!
//! ## Design Principles
//!
//! 1. **Explicit Ownership**: A `Game` owns its deck and score. The
//!    presentation layer holds it, reads snapshots, and calls intents.
//!    There is no global game instance.
//!
//! 2. **Identity Over Position**: Cards are addressed by `CardId`.
//!    Positions shift as matched cards leave play.
//!
//! 3. **Configuration Over Convention**: Table sizes and deal increments
//!    come from `GameConfig`, so both played variants are expressible.
//!
//! ## Architecture
//!
//! - **Partitioned Deck**: One shuffled sequence split by a cursor into
//!   displayed and undealt cards, plus an append-only discard pile.
//!
//! - **Sticky Selection**: `Mismatch` and `Match` ignore clicks until the
//!   game clears them.
//!
//! - **Deterministic**: Seeded ChaCha8 shuffling and an injectable clock.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors
//! - `cards`: Attributes, selection state, card instances
//! - `zones`: Deck partitioning
//! - `rules`: Matching rule, solver, scoring
//! - `games`: The Set game state machine

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng, GameRngState, GameConfig,
    ConfigError, GameError, PartitionError,
};

pub use crate::cards::{Attributes, Card, Color, Count, Feature, Fill, Selection, Shape, DECK_SIZE};

pub use crate::zones::Deck;

pub use crate::rules::{
    cards_form_set, completing_attributes, find_set, is_set,
    Clock, ManualClock, ScoreTracker, SystemClock,
};

pub use crate::games::set::{Game, GameSnapshot};
