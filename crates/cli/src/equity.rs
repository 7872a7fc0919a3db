// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equity command.
use anyhow::Result;
use clap::{Args, value_parser};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use holdem_eval::{
    HoleCards, SimResult, parse_cards,
    sim::{par_simulate_hand, simulate_heads_up},
};

#[derive(Debug, Args)]
pub struct EquityArgs {
    /// The hero hole cards (eg. "Ah Kh").
    #[clap(long)]
    hand: HoleCards,
    /// The villain hole cards, runs a heads up simulation (eg. "Qs Qd").
    #[clap(long)]
    villain: Option<HoleCards>,
    /// The known board cards (eg. "2c 7d Ts").
    #[clap(long, short, default_value = "")]
    board: String,
    /// The number of opponents with random cards.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=8))]
    opponents: u8,
    /// Number of trials.
    #[clap(long, short, default_value_t = 100_000)]
    iterations: usize,
    /// The simulation seed.
    #[clap(long, short, default_value_t = 0)]
    seed: u64,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u16).range(1..=64))]
    tasks: u16,
}

pub fn run(args: EquityArgs) -> Result<()> {
    let board = parse_cards(&args.board)?;
    let now = Instant::now();

    match args.villain {
        Some(villain) => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            let (hero_result, villain_result) =
                simulate_heads_up(args.hand, villain, &board, args.iterations, &mut rng)?;

            print_result(&args.hand.to_string(), &hero_result);
            print_result(&villain.to_string(), &villain_result);
        }
        None => {
            let result = par_simulate_hand(
                args.tasks as usize,
                args.seed,
                args.hand,
                &board,
                args.opponents as usize,
                args.iterations,
            )?;

            let label = format!("{} vs {}", args.hand, args.opponents);
            print_result(&label, &result);
        }
    }

    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}

fn print_result(label: &str, result: &SimResult) {
    let pct = |n: u64| 100.0 * n as f64 / result.total.max(1) as f64;
    println!(
        "{label:<10} win {:5.1}% tie {:5.1}% lose {:5.1}% equity {:5.1}%",
        pct(result.wins),
        pct(result.ties),
        pct(result.losses),
        100.0 * result.equity()
    );
}
