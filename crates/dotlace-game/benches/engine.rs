//! Benchmarks for the Dotlace game engine.
//!
//! This benchmark suite measures the engine hot paths a presentation
//! layer hits on every frame and on every completed gesture.
//!
//! # Benchmarks
//!
//! - **`board_setup`**: Creates a fully randomized board from a seed.
//! - **`play_move`**: Runs one complete move against a fresh board:
//!   scan for a linkable pair, select it, and resolve.
//!
//! # Test Data
//!
//! Uses three fixed seeds so each run measures the same boards while still
//! covering multiple board layouts.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench engine
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use dotlace_core::Position;
use dotlace_game::GridEngine;

const SEEDS: [u64; 3] = [0x5eed_0001, 0xdead_beef_cafe, 0x0123_4567_89ab_cdef];

/// Finds some same-colored adjacent pair on the board.
fn find_pair(engine: &GridEngine) -> Option<(Position, Position)> {
    Position::ALL.into_iter().find_map(|pos| {
        pos.neighbors()
            .find(|&neighbor| engine.grid()[neighbor].color() == engine.grid()[pos].color())
            .map(|neighbor| (pos, neighbor))
    })
}

fn bench_board_setup(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("board_setup", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter(|| GridEngine::with_seed(hint::black_box(seed)));
            },
        );
    }
}

fn bench_play_move(c: &mut Criterion) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        c.bench_with_input(
            BenchmarkId::new("play_move", format!("seed_{i}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || GridEngine::with_seed(seed),
                    |mut engine| {
                        let (a, b) = find_pair(&engine).expect("board has a linkable pair");
                        engine.select_token(a);
                        engine.select_token(b);
                        engine.resolve()
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_board_setup,
        bench_play_move
);
criterion_main!(benches);
