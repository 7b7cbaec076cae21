//! Deck partitioning into displayed, undealt, and discarded zones.
//!
//! All 81 cards live in two sequences:
//! - `live`: cards still in play, split by the `display_count` cursor into
//!   the displayed prefix (face up) and the undealt suffix (draw order)
//! - `discarded`: append-only pile of cards removed after a match
//!
//! Every card is in exactly one zone at all times, and
//! `display_count <= live.len()`. Both are re-checked in debug builds after
//! each mutation.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Attributes, Card, Selection, DECK_SIZE};
use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::core::error::{ConfigError, PartitionError};
use crate::core::rng::GameRng;

/// Positions within the display window. Triples are the common case.
pub type Indices = SmallVec<[usize; 3]>;

/// Most cards removed from the window by a single discard.
const MAX_SHRINK: usize = 3;

/// The 81-card universe partitioned into zones.
///
/// ## Usage
///
/// ```
/// use rust_set::core::{GameConfig, GameRng};
/// use rust_set::zones::Deck;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = Deck::shuffled(&GameConfig::classic(), &mut rng);
/// assert_eq!(deck.cards_to_display().len(), 12);
/// assert_eq!(deck.cards_in_deck().len(), 69);
///
/// deck.grow_display(3);
/// assert_eq!(deck.cards_to_display().len(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    live: Vec<Card>,
    discarded: Vec<Card>,
    display_count: usize,
    base_display: usize,
}

impl Deck {
    fn with_order(live: Vec<Card>, config: &GameConfig) -> Self {
        let deck = Self {
            display_count: config.initial_display.min(live.len()),
            live,
            discarded: Vec::new(),
            base_display: config.base_display,
        };
        deck.debug_check();
        deck
    }

    /// Build the full universe and shuffle it once.
    #[must_use]
    pub fn shuffled(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut live: Vec<Card> = Attributes::all().map(Card::new).collect();
        rng.shuffle(&mut live);
        Self::with_order(live, config)
    }

    /// Build a deck in an explicit order instead of shuffling.
    ///
    /// `order` must be a permutation of the 81 attribute combinations.
    pub fn from_order(order: &[Attributes], config: &GameConfig) -> Result<Self, ConfigError> {
        let unique: FxHashSet<&Attributes> = order.iter().collect();
        if order.len() != DECK_SIZE || unique.len() != DECK_SIZE {
            return Err(ConfigError::InvalidDeckOrder);
        }
        Ok(Self::with_order(order.iter().copied().map(Card::new).collect(), config))
    }

    // === Zones ===

    /// Face-up cards, in table order.
    #[must_use]
    pub fn cards_to_display(&self) -> &[Card] {
        &self.live[..self.display_count]
    }

    /// Face-down cards, in draw order.
    #[must_use]
    pub fn cards_in_deck(&self) -> &[Card] {
        &self.live[self.display_count..]
    }

    /// Cards removed after a match, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discarded
    }

    /// Size of the display window.
    #[must_use]
    pub fn display_count(&self) -> usize {
        self.display_count
    }

    /// Cards still in play (displayed + undealt).
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Minimum table size kept after a discard.
    #[must_use]
    pub fn base_display(&self) -> usize {
        self.base_display
    }

    /// Position of a card in the display window.
    #[must_use]
    pub fn display_position(&self, id: CardId) -> Option<usize> {
        self.cards_to_display().iter().position(|c| c.id() == id)
    }

    // === Selection queries ===

    /// Displayed positions whose selection satisfies `predicate`.
    pub fn indices_where(&self, predicate: impl Fn(Selection) -> bool) -> Indices {
        self.cards_to_display()
            .iter()
            .enumerate()
            .filter(|(_, card)| predicate(card.selection()))
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn selected_indices(&self) -> Indices {
        self.indices_where(|s| s == Selection::Selected)
    }

    #[must_use]
    pub fn matched_indices(&self) -> Indices {
        self.indices_where(|s| s == Selection::Match)
    }

    #[must_use]
    pub fn mismatched_indices(&self) -> Indices {
        self.indices_where(|s| s == Selection::Mismatch)
    }

    // === Mutation ===

    /// Apply a player click to the displayed card at `index`.
    ///
    /// Panics if `index` is outside the display window.
    pub fn toggle(&mut self, index: usize) {
        self.displayed_mut(index).toggle();
    }

    /// Set the selection of every displayed card in `indices`.
    ///
    /// Panics if any index is outside the display window.
    pub fn mark(&mut self, indices: &[usize], selection: Selection) {
        for &index in indices {
            self.displayed_mut(index).set_selection(selection);
        }
    }

    /// Identities of the displayed cards at `indices`.
    #[must_use]
    pub fn ids_at(&self, indices: &[usize]) -> SmallVec<[CardId; 3]> {
        let displayed = self.cards_to_display();
        indices.iter().map(|&i| displayed[i].id()).collect()
    }

    /// Move the named cards from play to the discard pile.
    ///
    /// Cards are filed in the order given with their selection cleared.
    /// Ids not in play are ignored. Displayed cards that leave are replaced
    /// from the undealt zone, unless the window is above its base size, in
    /// which case it shrinks by up to three cards (never below the base).
    ///
    /// Returns the number of cards discarded.
    pub fn remove_by_identity(&mut self, ids: &[CardId]) -> usize {
        let mut removed = 0;
        let mut removed_from_display = 0;

        for &id in ids {
            let Some(pos) = self.live.iter().position(|c| c.id() == id) else {
                continue;
            };
            if pos < self.display_count {
                removed_from_display += 1;
            }
            let mut card = self.live.remove(pos);
            card.set_selection(Selection::None);
            self.discarded.push(card);
            removed += 1;
        }

        if self.display_count > self.base_display {
            let shrink = removed_from_display.min(MAX_SHRINK);
            self.display_count = self.display_count.saturating_sub(shrink).max(self.base_display);
        }
        self.display_count = self.display_count.min(self.live.len());

        self.debug_check();
        removed
    }

    /// Widen the display window by up to `n` cards.
    ///
    /// Returns the number of cards actually turned face up.
    pub fn grow_display(&mut self, n: usize) -> usize {
        let before = self.display_count;
        self.display_count = self.display_count.saturating_add(n).min(self.live.len());
        self.debug_check();
        self.display_count - before
    }

    fn displayed_mut(&mut self, index: usize) -> &mut Card {
        assert!(
            index < self.display_count,
            "card index {index} outside display window of {}",
            self.display_count
        );
        &mut self.live[index]
    }

    // === Invariants ===

    /// Verify the zones still partition the full universe.
    pub fn check_invariants(&self) -> Result<(), PartitionError> {
        if self.display_count > self.live.len() {
            return Err(PartitionError::DisplayOverflow {
                display: self.display_count,
                live: self.live.len(),
            });
        }

        let total = self.live.len() + self.discarded.len();
        if total != DECK_SIZE {
            return Err(PartitionError::WrongTotal { found: total });
        }

        let mut seen = FxHashSet::default();
        for card in self.live.iter().chain(&self.discarded) {
            if !seen.insert(card.id()) {
                return Err(PartitionError::Duplicate(card.id()));
            }
        }

        if let Some(card) = self.discarded.iter().find(|c| c.selection() != Selection::None) {
            return Err(PartitionError::TaggedDiscard(card.id()));
        }

        Ok(())
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.check_invariants() {
                panic!("deck partition broken: {err}");
            }
        }
    }
}
