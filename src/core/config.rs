//! Game configuration.
//!
//! The table-management rules differ between the two observed variants of
//! the game, so both are expressed as data rather than hardcoded:
//! - `base_display`: removal never shrinks the display window below this
//! - `initial_display`: cards face up when a game starts
//! - `deal_increment`: cards added to the window per `deal()`

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// Table-management configuration.
///
/// ## Usage
///
/// ```
/// use rust_set::core::GameConfig;
///
/// let config = GameConfig::dealt().with_deal_increment(3);
/// assert_eq!(config.initial_display, 0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimum table size kept after matched cards leave play.
    pub base_display: usize,

    /// Number of cards face up at the start of a game.
    pub initial_display: usize,

    /// Number of cards `deal()` adds to the display window.
    pub deal_increment: usize,
}

impl GameConfig {
    /// Standard table size.
    pub const BASE_DISPLAY: usize = 12;

    /// Twelve cards face up from the start, three more per deal.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            base_display: Self::BASE_DISPLAY,
            initial_display: Self::BASE_DISPLAY,
            deal_increment: 3,
        }
    }

    /// Empty table at the start; every card is dealt one at a time.
    #[must_use]
    pub const fn dealt() -> Self {
        Self {
            base_display: Self::BASE_DISPLAY,
            initial_display: 0,
            deal_increment: 1,
        }
    }

    /// Set the minimum table size.
    #[must_use]
    pub fn with_base_display(mut self, size: usize) -> Self {
        self.base_display = size;
        self
    }

    /// Set the number of cards face up at the start.
    #[must_use]
    pub fn with_initial_display(mut self, size: usize) -> Self {
        self.initial_display = size;
        self
    }

    /// Set the number of cards added per deal.
    #[must_use]
    pub fn with_deal_increment(mut self, increment: usize) -> Self {
        self.deal_increment = increment;
        self
    }

    /// Check that the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_display > DECK_SIZE {
            return Err(ConfigError::BaseDisplayTooLarge(self.base_display));
        }
        if self.initial_display > DECK_SIZE {
            return Err(ConfigError::InitialDisplayTooLarge(self.initial_display));
        }
        if self.deal_increment == 0 {
            return Err(ConfigError::ZeroDealIncrement);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
