// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Open face poker bot.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

use ofc_bot::{Config, HeuristicStrategy, RandomStrategy, core::poker::Chips};

/// Built in strategies.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    /// Place cards like the opponent.
    Heuristic,
    /// Place cards at random.
    Random,
}

/// Command line arguments.
#[derive(Debug, Parser)]
struct Cli {
    /// Number of tournaments to play.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
    tournaments: u32,
    /// The wager for each round, the largest for the random strategy.
    #[clap(long, short, default_value_t = 100)]
    wager: u32,
    /// Seed for a repeatable match.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The human seat strategy.
    #[clap(long, value_enum, default_value_t = StrategyKind::Heuristic)]
    strategy: StrategyKind,
    /// Delay in milliseconds before each card placement.
    #[clap(long, default_value_t = 0)]
    pace_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        tournaments: cli.tournaments,
        seed: cli.seed,
        pace: Duration::from_millis(cli.pace_ms),
    };

    let wager = Chips::new(cli.wager);
    match cli.strategy {
        StrategyKind::Heuristic => {
            ofc_bot::run(config, HeuristicStrategy::new(wager)).await?;
        }
        StrategyKind::Random => {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            ofc_bot::run(config, RandomStrategy::new(wager, rng)).await?;
        }
    }

    Ok(())
}
