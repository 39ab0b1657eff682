//! Example playing full Dotlace games without a presentation layer.
//!
//! This example shows how to:
//! - Create a `GridEngine` from a seed (or a random one)
//! - Drive the selection API the way an input layer would
//! - Resolve paths and read the returned summaries
//! - Render the board through the read-only grid view
//!
//! # Usage
//!
//! ```sh
//! cargo run --example autoplay
//! ```
//!
//! Replay a specific board:
//!
//! ```sh
//! cargo run --example autoplay -- --seed 42
//! ```
//!
//! Play several games back to back (later games reuse the engine via
//! `new_game`):
//!
//! ```sh
//! cargo run --example autoplay -- --games 10
//! ```

use clap::Parser;
use dotlace_core::{GRID_SIZE, Position};
use dotlace_game::GridEngine;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board seed; drawn at random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of games to play.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    games: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut engine = match args.seed {
        Some(seed) => GridEngine::with_seed(seed),
        None => GridEngine::new(),
    };

    let mut total = 0;
    for game in 1..=args.games {
        if game > 1 {
            engine.new_game();
        }
        let moves = play(&mut engine);
        total += engine.score();

        println!("Game {game}:");
        println!("  Seed: {:#018x}", engine.seed());
        println!("  Moves played: {moves}");
        println!("  Score: {}", engine.score());
        print_board(&engine);
        println!();
    }

    if args.games > 1 {
        println!("Total score over {} games: {total}", args.games);
    }
}

/// Plays greedily until the game is over, returning the number of moves
/// played. Stops early on the (practically unreachable) board with no
/// linkable pair.
fn play(engine: &mut GridEngine) -> u32 {
    let mut moves = 0;
    while !engine.is_game_over() {
        let Some(path) = find_path(engine) else {
            break;
        };
        for pos in path {
            assert!(engine.select_token(pos).is_added());
        }
        let outcome = engine.resolve();
        assert!(!outcome.is_noop());
        moves += 1;
    }
    moves
}

/// Finds a greedy same-colored path of length >= 2: pick the first
/// linkable pair in board order, then keep extending from the tail.
fn find_path(engine: &GridEngine) -> Option<Vec<Position>> {
    let color_of = |pos: Position| engine.grid()[pos].color();

    let (first, second) = Position::ALL.into_iter().find_map(|pos| {
        pos.neighbors()
            .find(|&neighbor| color_of(neighbor) == color_of(pos))
            .map(|neighbor| (pos, neighbor))
    })?;

    let mut path = vec![first, second];
    loop {
        let tail = *path.last()?;
        let next = tail
            .neighbors()
            .find(|&pos| color_of(pos) == color_of(tail) && !path.contains(&pos));
        match next {
            Some(pos) => path.push(pos),
            None => return Some(path),
        }
    }
}

/// Renders the board as one letter per token color.
fn print_board(engine: &GridEngine) {
    println!("  Board:");
    for row in 0..GRID_SIZE {
        print!("    ");
        for col in 0..GRID_SIZE {
            let color = engine.grid()[Position::new(row, col)].color();
            let initial = format!("{color}").chars().next().unwrap_or('?');
            print!("{initial} ");
        }
        println!();
    }
}
