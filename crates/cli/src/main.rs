// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem command line tools.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

mod equity;
mod play;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Computes a hand equity against random or known opponents.
    Equity(equity::EquityArgs),
    /// Plays hands between players that mostly call or check.
    Play(play::PlayArgs),
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Equity(args) => equity::run(args),
        Command::Play(args) => play::run(args),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
