//! Game state machine tests.
//!
//! These tests drive `Game` through its public intents the way a
//! presentation layer would, using fixed deck orders and a manual clock.

use std::time::Duration;

use rust_set::{
    completing_attributes, is_set, Attributes, Card, CardId, Feature, Game, GameConfig, GameError,
    ManualClock, Selection,
};

/// Canonical order with the given ordinals moved to the front, in order.
fn order_with_front(front: &[usize]) -> Vec<Attributes> {
    let mut order: Vec<Attributes> = front.iter().map(|&o| Attributes::from_ordinal(o)).collect();
    order.extend(Attributes::all().filter(|a| !front.contains(&a.ordinal())));
    order
}

/// Ordinals of the 16 cards whose every feature is one of its first two values.
fn two_valued_ordinals() -> Vec<usize> {
    Attributes::all()
        .filter(|a| {
            a.shape.index() < 2 && a.color.index() < 2 && a.fill.index() < 2 && a.count.index() < 2
        })
        .map(|a| a.ordinal())
        .collect()
}

fn fixture(config: GameConfig, front: &[usize]) -> (Game<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let game = Game::from_order(config, &order_with_front(front), clock.clone()).unwrap();
    (game, clock)
}

fn selections(game: &Game<ManualClock>) -> Vec<Selection> {
    game.cards_to_display().iter().map(Card::selection).collect()
}

fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(Card::id).collect()
}

// =============================================================================
// Matching Tests
// =============================================================================

/// Third selected card that breaks the rule: all three mismatch, score -30.
#[test]
fn test_third_card_mismatch() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    let a = game.cards_to_display()[0];
    let b = game.cards_to_display()[1];
    let c = game.cards_to_display()[4];
    assert!(!is_set(a.attributes(), b.attributes(), c.attributes()));

    game.choose_card_at(0);
    game.choose_card_at(1);
    game.choose_card_at(4);

    assert_eq!(game.deck().mismatched_indices().as_slice(), &[0, 1, 4]);
    assert!(game.deck().selected_indices().is_empty());
    assert_eq!(game.score(), -30);
}

/// Third selected card that completes a set: all three match, score +30 or more.
#[test]
fn test_third_card_match() {
    let a = Attributes::from_ordinal(17);
    let b = Attributes::from_ordinal(58);
    let c = completing_attributes(&a, &b);
    let (mut game, clock) = fixture(GameConfig::classic(), &[a.ordinal(), 3, b.ordinal(), c.ordinal()]);
    clock.advance(Duration::from_secs(4));

    game.choose_card_at(3);
    game.choose_card_at(0);
    game.choose_card_at(2);

    assert_eq!(game.deck().matched_indices().as_slice(), &[0, 2, 3]);
    assert_eq!(game.score(), 30 + 26);
    assert!(game.score() >= 30);
}

/// A match found part-way through a second loses the partial second.
#[test]
fn test_match_reward_with_fractional_seconds() {
    let (mut game, clock) = fixture(GameConfig::classic(), &[]);
    clock.advance(Duration::from_millis(10_900));

    for i in [0, 1, 2] {
        game.choose_card_at(i);
    }

    assert_eq!(game.score(), 30 + 19);
}

/// Any click while a mismatch is showing clears it in the same call.
#[test]
fn test_click_clears_stale_mismatch() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    for i in [0, 1, 4] {
        game.choose_card_at(i);
    }

    game.choose_card_at(8);

    let sel = selections(&game);
    assert_eq!(sel[0], Selection::None);
    assert_eq!(sel[1], Selection::None);
    assert_eq!(sel[4], Selection::None);
    assert_eq!(sel[8], Selection::Selected);
    assert_eq!(game.score(), -30);
}

/// Mismatched cards ignore clicks until the game clears them.
#[test]
fn test_mismatch_is_sticky_until_cleared() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    for i in [0, 1, 4] {
        game.choose_card_at(i);
    }

    // Clicking a card of the mismatched triple clears the triple and selects it.
    game.choose_card_at(4);

    assert!(game.deck().mismatched_indices().is_empty());
    assert_eq!(game.deck().selected_indices().as_slice(), &[4]);
}

/// A click after a match discards the triple and leaves the click standing.
#[test]
fn test_click_after_match_discards() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    for i in [0, 1, 2] {
        game.choose_card_at(i);
    }
    let kept = game.cards_to_display()[6].id();

    game.choose_card_at(6);

    assert_eq!(ids(game.discard_pile()), vec![CardId(0), CardId(1), CardId(2)]);
    assert_eq!(game.cards_to_display().len(), 12);
    assert_eq!(game.cards_in_deck().len(), 66);
    let selected = game.deck().selected_indices();
    assert_eq!(selected.len(), 1);
    assert_eq!(game.cards_to_display()[selected[0]].id(), kept);
}

/// Clicking a matched card only discards; nothing ends up selected.
#[test]
fn test_click_on_matched_card() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    for i in [0, 1, 2] {
        game.choose_card_at(i);
    }

    game.choose_card_at(1);

    assert_eq!(game.discard_pile().len(), 3);
    assert!(selections(&game).iter().all(|&s| s == Selection::None));
}

/// Identity-based choice rejects cards outside the window.
#[test]
fn test_choose_unknown_card() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);

    assert_eq!(game.choose_card(CardId(40)), Err(GameError::CardNotDisplayed(CardId(40))));
    assert!(game.choose_card(CardId(3)).is_ok());
    assert_eq!(game.cards_to_display()[3].selection(), Selection::Selected);
}

// =============================================================================
// Table Management Tests
// =============================================================================

/// Dealt variant: fill the table, find a set, clear it.
#[test]
fn test_deal_then_match_scenario() {
    let (mut game, clock) = fixture(GameConfig::dealt(), &[]);
    assert!(game.cards_to_display().is_empty());

    while game.cards_to_display().len() < GameConfig::BASE_DISPLAY {
        game.deal();
    }
    assert_eq!(game.cards_to_display().len(), 12);

    clock.advance(Duration::from_secs(45));
    for id in [CardId(0), CardId(1), CardId(2)] {
        game.choose_card(id).unwrap();
    }
    assert_eq!(game.deck().matched_indices().as_slice(), &[0, 1, 2]);
    assert_eq!(game.score(), 30 + 15);

    game.choose_card_at(5);

    assert_eq!(ids(game.discard_pile()), vec![CardId(0), CardId(1), CardId(2)]);
    assert_eq!(game.cards_to_display().len(), 12);
    assert!(game.cards_to_display().iter().all(|c| c.id().raw() >= 3));
    assert!(game.deck().check_invariants().is_ok());
}

/// Classic variant: a deal above the base size is undone by the next discard.
#[test]
fn test_window_shrinks_after_extra_deal() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    game.deal();
    assert_eq!(game.cards_to_display().len(), 15);

    game.cheat();
    game.deal();

    // Cheat marked 0,1,2; the deal discarded them and shrank to 12, then grew by 3
    assert_eq!(game.discard_pile().len(), 3);
    assert_eq!(game.cards_to_display().len(), 15);
}

/// Deal clears a leftover match before growing.
#[test]
fn test_deal_clears_match() {
    let (mut game, _) = fixture(GameConfig::dealt().with_initial_display(12), &[]);
    game.cheat();
    assert_eq!(game.deck().matched_indices().len(), 3);

    game.deal();

    assert!(game.deck().matched_indices().is_empty());
    assert_eq!(game.discard_pile().len(), 3);
    assert_eq!(game.cards_to_display().len(), 13);
}

/// Deal stops when the undealt zone is empty.
#[test]
fn test_deal_until_empty() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    for _ in 0..40 {
        game.deal();
    }

    assert_eq!(game.cards_to_display().len(), 81);
    assert!(game.cards_in_deck().is_empty());
}

// =============================================================================
// Cheat Tests
// =============================================================================

/// Cheat on a table with no set changes nothing.
#[test]
fn test_cheat_without_set_is_noop() {
    let front = two_valued_ordinals();
    let (mut game, clock) = fixture(GameConfig::classic(), &front[..12]);
    clock.advance(Duration::from_secs(3));
    let before = game.snapshot();

    assert!(game.hint().is_none());
    game.cheat();

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.score(), 0);
}

/// Cheat clears highlights and scores the found set.
#[test]
fn test_cheat_clears_selection_and_mismatch() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);
    for i in [0, 1, 4] {
        game.choose_card_at(i);
    }
    game.choose_card_at(7);
    game.choose_card_at(6);

    game.cheat();

    let sel = selections(&game);
    assert_eq!(&sel[..3], &[Selection::Match; 3]);
    assert!(sel[3..].iter().all(|&s| s == Selection::None));
    assert_eq!(game.score(), -30 + 60);
}

/// Cheating twice moves on to the next set.
#[test]
fn test_repeated_cheat_progresses() {
    let (mut game, _) = fixture(GameConfig::classic(), &[]);

    game.cheat();
    game.cheat();

    assert_eq!(ids(game.discard_pile()), vec![CardId(0), CardId(1), CardId(2)]);
    assert_eq!(game.deck().matched_indices().len(), 3);
    assert_eq!(game.score(), 120);
}

/// A game played out with cheat and deal ends with no set and no deck.
#[test]
fn test_autoplay_to_exhaustion() {
    let clock = ManualClock::new();
    let mut game = Game::with_clock(GameConfig::classic(), 2024, clock).unwrap();
    let mut intents = 0;

    while !game.is_exhausted() {
        if game.hint().is_some() {
            game.cheat();
        } else {
            game.deal();
        }
        intents += 1;
        assert!(intents < 1_000);
    }

    assert!(game.cards_in_deck().is_empty());
    assert_eq!(game.discard_pile().len() % 3, 0);
    assert_eq!(game.discard_pile().len() + game.cards_to_display().len(), 81);
    assert_eq!(game.score(), 60 * (game.discard_pile().len() as i64 / 3));
}

// =============================================================================
// New Game Tests
// =============================================================================

/// New game always starts clean, whatever came before.
#[test]
fn test_new_game_resets() {
    for config in [GameConfig::classic(), GameConfig::dealt()] {
        let (mut game, _) = fixture(config, &[]);
        game.deal();
        game.cheat();
        game.deal();
        for i in 0..3usize.min(game.cards_to_display().len()) {
            game.choose_card_at(i);
        }

        game.new_game();

        assert_eq!(game.score(), 0);
        assert!(game.discard_pile().is_empty());
        assert_eq!(game.cards_to_display().len(), config.initial_display);
        assert!(selections(&game).iter().all(|&s| s == Selection::None));
        assert!(game.deck().check_invariants().is_ok());
    }
}

/// New game keeps the clock and restarts reward timing.
#[test]
fn test_new_game_restarts_timer() {
    let (mut game, clock) = fixture(GameConfig::classic(), &[]);
    clock.advance(Duration::from_secs(20));

    game.new_game();
    game.cheat();

    assert_eq!(game.score(), 60);
}
