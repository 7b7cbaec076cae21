//! Error types.
//!
//! Out-of-range positions are contract violations and panic. These types
//! cover the checks performed at the collaborator boundary: configuration,
//! explicit deck orders, and identity-based intents.

use thiserror::Error;

use super::entity::CardId;

/// Invalid `GameConfig` or deck order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("base display size {0} exceeds the 81-card deck")]
    BaseDisplayTooLarge(usize),

    #[error("initial display size {0} exceeds the 81-card deck")]
    InitialDisplayTooLarge(usize),

    #[error("deal increment must be at least 1")]
    ZeroDealIncrement,

    #[error("deck order must contain each of the 81 cards exactly once")]
    InvalidDeckOrder,
}

/// Error returned by `Game` constructors and identity-based intents.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} is not in the display window")]
    CardNotDisplayed(CardId),
}

/// Violation of the deck partition invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("{0} appears in more than one place")]
    Duplicate(CardId),

    #[error("zones hold {found} cards, expected 81")]
    WrongTotal { found: usize },

    #[error("display window of {display} exceeds {live} live cards")]
    DisplayOverflow { display: usize, live: usize },

    #[error("{0} was discarded with a selection tag")]
    TaggedDiscard(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::BaseDisplayTooLarge(90).to_string(),
            "base display size 90 exceeds the 81-card deck"
        );
        assert_eq!(
            GameError::CardNotDisplayed(CardId(4)).to_string(),
            "Card(4) is not in the display window"
        );
        assert_eq!(
            PartitionError::DisplayOverflow { display: 13, live: 12 }.to_string(),
            "display window of 13 exceeds 12 live cards"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: GameError = ConfigError::ZeroDealIncrement.into();
        assert_eq!(err, GameError::Config(ConfigError::ZeroDealIncrement));
        assert_eq!(err.to_string(), "deal increment must be at least 1");
    }
}
