// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the preflop equity of every starting hand:
//
// ```bash
// $ cargo r --release --example chart -- --opponents 2
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use holdem_eval::{sim::par_simulate_hand, *};

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=8))]
    opponents: u8,
    /// Number of trials for each starting hand.
    #[clap(long, short, default_value_t = 20_000)]
    iterations: usize,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4)]
    tasks: usize,
    /// The simulation seed.
    #[clap(long, short, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), SimError> {
    let cli = Cli::parse();

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let hole = if r1 <= r2 {
                // Offsuit or pair
                HoleCards::new(Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                HoleCards::new(Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            let result = par_simulate_hand(
                cli.tasks,
                cli.seed,
                hole,
                &[],
                cli.opponents as usize,
                cli.iterations,
            )?;

            labels.push(format!("{:<3}", hole.label()));
            probs.push(result.equity() * 100.0);
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}
