//! Solver benchmarks.
//!
//! The no-set table is the worst case: every triple is examined.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_set::{find_set, Attributes, Card, Feature, Game, GameConfig};

fn no_set_table() -> Vec<Card> {
    Attributes::all()
        .filter(|a| {
            a.shape.index() < 2 && a.color.index() < 2 && a.fill.index() < 2 && a.count.index() < 2
        })
        .map(Card::new)
        .collect()
}

fn bench_find_set(c: &mut Criterion) {
    let table = no_set_table();
    c.bench_function("find_set_16_no_set", |b| b.iter(|| find_set(black_box(&table))));

    let game = Game::new(GameConfig::classic().with_initial_display(21), 42).unwrap();
    let displayed = game.cards_to_display().to_vec();
    c.bench_function("find_set_21_shuffled", |b| b.iter(|| find_set(black_box(&displayed))));
}

fn bench_cheat(c: &mut Criterion) {
    c.bench_function("cheat_full_game", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::classic(), black_box(7)).unwrap();
            while !game.is_exhausted() {
                if game.hint().is_some() {
                    game.cheat();
                } else {
                    game.deal();
                }
            }
            game.score()
        })
    });
}

criterion_group!(benches, bench_find_set, bench_cheat);
criterion_main!(benches);
