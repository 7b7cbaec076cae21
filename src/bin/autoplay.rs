//! Autoplay - play complete games headlessly using the solver.
//!
//! Each game repeatedly takes the first set on the table and deals when
//! there is none, until the deck is exhausted. Useful for smoke-testing the
//! engine and for eyeballing how many cards a seed leaves on the table.

use clap::{Parser, ValueEnum};
use rust_set::{Game, GameConfig, GameError};
use tracing::{debug, info, warn};

/// Safety valve; a full game needs well under 200 intents.
const MAX_INTENTS: usize = 10_000;

#[derive(Parser)]
#[command(name = "autoplay")]
#[command(about = "Play Set games headlessly with the built-in solver")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seed of the first game; later games use forked seeds
    #[arg(long)]
    seed: Option<u64>,

    /// Table-management rules
    #[arg(long, default_value = "classic")]
    variant: Variant,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    /// Twelve cards up front, three per deal
    Classic,
    /// Empty table, one card per deal
    Dealt,
}

impl Variant {
    fn config(self) -> GameConfig {
        match self {
            Variant::Classic => GameConfig::classic(),
            Variant::Dealt => GameConfig::dealt(),
        }
    }
}

struct Outcome {
    sets: usize,
    intents: usize,
    left_on_table: usize,
    score: i64,
}

fn play_out(game: &mut Game) -> Outcome {
    let mut intents = 0;

    while !game.is_exhausted() && intents < MAX_INTENTS {
        if game.hint().is_some() {
            game.cheat();
        } else {
            game.deal();
        }
        intents += 1;
    }

    if intents == MAX_INTENTS {
        warn!(intents, "game did not finish");
    }

    Outcome {
        sets: game.discard_pile().len() / 3,
        intents,
        left_on_table: game.cards_to_display().len(),
        score: game.score(),
    }
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.variant.config();
    let mut game = match args.seed {
        Some(seed) => Game::new(config, seed)?,
        None => Game::new_random(config)?,
    };
    info!(games = args.games, variant = ?args.variant, "starting autoplay");

    for round in 0..args.games {
        if round > 0 {
            game.new_game();
        }
        let seed = game.rng_state().seed;
        let outcome = play_out(&mut game);
        debug!(round, intents = outcome.intents, "game finished");

        println!(
            "game {:>3}  seed {:>20}  sets {:>2}  left {:>2}  score {:>5}",
            round + 1,
            seed,
            outcome.sets,
            outcome.left_on_table,
            outcome.score
        );
    }

    Ok(())
}
