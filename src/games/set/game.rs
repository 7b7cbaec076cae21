//! Set game state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Attributes, Card, Selection};
use crate::core::{CardId, GameConfig, GameError, GameRng, GameRngState};
use crate::rules::{cards_form_set, find_set, Clock, ScoreTracker, SystemClock};
use crate::zones::Deck;

/// Owned copy of everything the presentation layer reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub displayed: Vec<Card>,
    pub undealt: Vec<Card>,
    pub discarded: Vec<Card>,
    pub score: i64,
}

/// One game of Set: a deck, a score, and the intents that mutate them.
///
/// Every intent runs to completion synchronously. Reads are only valid
/// until the next intent.
///
/// ## Example
///
/// ```
/// use rust_set::core::GameConfig;
/// use rust_set::games::set::Game;
///
/// let mut game = Game::new(GameConfig::classic(), 42).unwrap();
/// assert_eq!(game.cards_to_display().len(), 12);
///
/// game.cheat();
/// game.deal();
/// assert_eq!(game.discard_pile().len() % 3, 0);
/// ```
#[derive(Clone, Debug)]
pub struct Game<C: Clock = SystemClock> {
    config: GameConfig,
    deck: Deck,
    scores: ScoreTracker,
    rng: GameRng,
    clock: C,
}

impl Game<SystemClock> {
    /// Start a shuffled game timed by the wall clock.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_clock(config, seed, SystemClock)
    }

    /// Start a game seeded from OS entropy.
    pub fn new_random(config: GameConfig) -> Result<Self, GameError> {
        Self::new(config, GameRng::from_entropy().seed())
    }
}

impl<C: Clock> Game<C> {
    /// Start a shuffled game with an explicit clock.
    pub fn with_clock(config: GameConfig, seed: u64, clock: C) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(&config, &mut rng);
        Ok(Self::assemble(config, deck, rng, clock))
    }

    /// Start a game with the deck in a fixed order instead of shuffled.
    ///
    /// Later `new_game()` calls shuffle normally, starting from seed 0.
    pub fn from_order(config: GameConfig, order: &[Attributes], clock: C) -> Result<Self, GameError> {
        config.validate()?;
        let deck = Deck::from_order(order, &config)?;
        Ok(Self::assemble(config, deck, GameRng::new(0), clock))
    }

    fn assemble(config: GameConfig, deck: Deck, rng: GameRng, clock: C) -> Self {
        let scores = ScoreTracker::new(clock.now());
        info!(
            seed = rng.seed(),
            displayed = deck.display_count(),
            "new game"
        );
        Self {
            config,
            deck,
            scores,
            rng,
            clock,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn cards_to_display(&self) -> &[Card] {
        self.deck.cards_to_display()
    }

    #[must_use]
    pub fn cards_in_deck(&self) -> &[Card] {
        self.deck.cards_in_deck()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.deck.discard_pile()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.scores.score()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// RNG state, enough to reproduce every later `new_game()`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Owned copy of the zones and score.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            displayed: self.cards_to_display().to_vec(),
            undealt: self.cards_in_deck().to_vec(),
            discarded: self.discard_pile().to_vec(),
            score: self.score(),
        }
    }

    /// Identities of the first set in the display window, without touching state.
    #[must_use]
    pub fn hint(&self) -> Option<[CardId; 3]> {
        let displayed = self.cards_to_display();
        find_set(displayed).map(|triple| triple.map(|i| displayed[i].id()))
    }

    /// No cards left to deal and no set on the table.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cards_in_deck().is_empty() && self.hint().is_none()
    }

    // === Intents ===

    /// Click the displayed card with identity `id`.
    pub fn choose_card(&mut self, id: CardId) -> Result<(), GameError> {
        let index = self
            .deck
            .display_position(id)
            .ok_or(GameError::CardNotDisplayed(id))?;
        self.choose_card_at(index);
        Ok(())
    }

    /// Click the displayed card at `index`.
    ///
    /// Panics if `index` is outside the display window.
    pub fn choose_card_at(&mut self, index: usize) {
        self.deck.toggle(index);
        debug!(
            index,
            selection = ?self.deck.cards_to_display()[index].selection(),
            "card chosen"
        );

        // A click on a stale mismatch clears it; the clicked card ends up selected.
        let mismatched = self.deck.mismatched_indices();
        if mismatched.len() == 3 {
            self.deck.mark(&mismatched, Selection::None);
            if mismatched.contains(&index) {
                self.deck.toggle(index);
            }
            debug!("mismatch cleared");
            return;
        }

        if self.discard_matched() {
            return;
        }

        let selected = self.deck.selected_indices();
        match selected.len() {
            3 => {
                let displayed = self.deck.cards_to_display();
                let found = cards_form_set(
                    &displayed[selected[0]],
                    &displayed[selected[1]],
                    &displayed[selected[2]],
                );
                if found {
                    self.deck.mark(&selected, Selection::Match);
                    let points = self.scores.reward(self.clock.now());
                    debug!(points, score = self.score(), "match");
                } else {
                    self.deck.mark(&selected, Selection::Mismatch);
                    self.scores.penalize();
                    debug!(score = self.score(), "mismatch");
                }
            }
            n if n > 3 => {
                self.deck.mark(&selected, Selection::None);
                self.deck.toggle(index);
                debug!(cleared = n, "selection reset");
            }
            _ => {}
        }
    }

    /// Clear a leftover match, then turn up more cards.
    pub fn deal(&mut self) {
        self.discard_matched();
        let dealt = self.deck.grow_display(self.config.deal_increment);
        debug!(dealt, displayed = self.deck.display_count(), "deal");
    }

    /// Clear the table's highlights and mark the first set found as a match.
    ///
    /// Scores like a regular match. Does nothing further if the window
    /// holds no set.
    pub fn cheat(&mut self) {
        self.discard_matched();

        let stale = self
            .deck
            .indices_where(|s| matches!(s, Selection::Selected | Selection::Mismatch));
        self.deck.mark(&stale, Selection::None);

        match find_set(self.deck.cards_to_display()) {
            Some(triple) => {
                self.deck.mark(&triple, Selection::Match);
                let points = self.scores.reward(self.clock.now());
                debug!(?triple, points, "cheat found set");
            }
            None => debug!("cheat found no set"),
        }
    }

    /// Replace this game with a freshly shuffled one.
    ///
    /// The new seed is forked from this game's RNG, so a sequence of new
    /// games is reproducible from the first seed.
    pub fn new_game(&mut self)
    where
        C: Clone,
    {
        let mut rng = self.rng.fork();
        let deck = Deck::shuffled(&self.config, &mut rng);
        *self = Self::assemble(self.config, deck, rng, self.clock.clone());
    }

    /// Discard a complete match triple if one is on the table.
    fn discard_matched(&mut self) -> bool {
        let matched = self.deck.matched_indices();
        if matched.len() != 3 {
            return false;
        }
        let ids = self.deck.ids_at(&matched);
        self.deck.remove_by_identity(&ids);
        debug!(
            ?ids,
            displayed = self.deck.display_count(),
            discarded = self.deck.discard_pile().len(),
            "match discarded"
        );
        true
    }
}
