//! Example demonstrating Crosses puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle for a grid size and shuffle step count
//! - Reproduce a puzzle from a seed (hex or arbitrary phrase)
//! - Measure how many scrambling attempts generation needs across many seeds
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 4 --steps 6
//! ```
//!
//! Reproduce a puzzle from a seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 4 --steps 6 --seed "any phrase"
//! ```
//!
//! Collect attempt statistics over many random seeds:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 3 --steps 4 --samples 100000
//! ```

use std::process;

use clap::Parser;
use crosses_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = 3)]
    size: usize,

    /// Number of distinct toggles used to scramble the grid.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    steps: usize,

    /// Seed as 64 hex digits, or any other phrase to hash into a seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Generate this many puzzles from random seeds and print attempt statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    if args.size == 0 {
        eprintln!("--size must be at least 1.");
        process::exit(1);
    }

    let generator = PuzzleGenerator::new();

    if let Some(samples) = args.samples {
        print_attempt_stats(&generator, args.size, args.steps, samples);
        return;
    }

    let seed = args.seed.as_deref().map_or_else(PuzzleSeed::random, |s| {
        s.parse().unwrap_or_else(|_| PuzzleSeed::from_phrase(s))
    });
    match generator.generate_with_seed(args.size, args.steps, seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("Failed to generate puzzle: {err}");
            process::exit(1);
        }
    }
}

fn print_attempt_stats(generator: &PuzzleGenerator, size: usize, steps: usize, samples: usize) {
    if samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let attempts = (0..samples)
        .into_par_iter()
        .map(|_| {
            generator
                .generate(size, steps)
                .map(|puzzle| u64::from(puzzle.attempts))
        })
        .collect::<Result<Vec<_>, _>>();
    let attempts = match attempts {
        Ok(attempts) => attempts,
        Err(err) => {
            eprintln!("Failed to generate puzzle: {err}");
            process::exit(1);
        }
    };

    let total: u64 = attempts.iter().sum();
    let retried = attempts.iter().filter(|&&a| a > 1).count();
    let max = attempts.iter().copied().max().unwrap_or_default();

    println!("Samples: {samples}");
    println!("  Grid size: {size}");
    println!("  Steps: {steps}");
    println!("Attempts:");
    println!("  total: {total}");
    println!("  max: {max}");
    println!("  retried puzzles: {retried}");
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for pos in &puzzle.moves {
        println!("  toggle {pos}");
    }
    println!("  attempts: {}", puzzle.attempts);
}
