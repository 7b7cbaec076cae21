//! Core engine types: card identity, RNG, configuration, errors.
//!
//! These are the building blocks shared by the deck, the rules, and the game
//! state machine.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::CardId;
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{ConfigError, GameError, PartitionError};
