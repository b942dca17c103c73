//! Benchmarks for Crosses puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_small`**: 3×3 grid with 4 steps, the size where scrambling
//!   attempts are most often discarded and retried.
//! - **`generator_large`**: 12×12 grid scrambled with every cell, the most
//!   toggling work a single attempt can do at that size.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use crosses_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion, name: &str, size: usize, steps: usize) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(size, steps, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_small(c: &mut Criterion) {
    bench_generator(c, "generator_small", 3, 4);
}

fn bench_generator_large(c: &mut Criterion) {
    bench_generator(c, "generator_large", 12, 144);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_generator_small,
        bench_generator_large
);
criterion_main!(benches);
