//! Card identification.
//!
//! Every card in the 81-card universe has a unique `CardId` that is stable
//! for the lifetime of a game. Positions shift as cards are discarded, so
//! removal and solver de-duplication always go through the id, never through
//! an index.
//!
//! ## ID Layout
//!
//! IDs are the card's ordinal in the canonical (unshuffled) enumeration of
//! attribute combinations, so `0..81`. This makes ids independent of storage
//! order while still being cheap to compare and hash.
//!
//! ```
//! use rust_set::core::CardId;
//!
//! let id = CardId::new(42);
//! assert_eq!(id.raw(), 42);
//! assert_eq!(format!("{}", id), "Card(42)");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque, stable identity of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip() {
        assert_eq!(CardId::new(7).raw(), 7);
        assert_eq!(CardId::from(80), CardId(80));
    }

    #[test]
    fn test_ordering() {
        assert!(CardId(1) < CardId(2));
        assert_eq!(CardId(3).max(CardId(9)), CardId(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
