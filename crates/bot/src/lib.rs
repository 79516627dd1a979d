// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Open face poker bot.
//!
//! Plays the human seat against the engine opponent with a [Strategy] and
//! reports the [Standings] once all tournaments are played.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use log::info;
use serde::Serialize;
use std::time::Duration;
use tokio::{signal, sync::broadcast};

mod client;
pub use client::{Client, Strategy, commit_wager};

mod strategy;
pub use strategy::{HeuristicStrategy, RandomStrategy};

pub use ofc_core as core;

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of tournaments to play.
    pub tournaments: u32,
    /// Seed for a repeatable match.
    pub seed: Option<u64>,
    /// Delay before each card placement.
    pub pace: Duration,
}

/// The bot results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    /// Tournaments played to the last round.
    pub tournaments: u32,
    /// Rounds played.
    pub rounds: u32,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds with equal points.
    pub pushes: u32,
    /// Rounds with a fouled board.
    pub fouls: u32,
    /// Chips won or lost.
    pub net: i64,
    /// The bankroll could not cover a bet.
    pub busted: bool,
}

/// Runs a client with the given strategy until done or Ctrl-C.
pub async fn run<S: Strategy>(config: Config, strategy: S) -> Result<Standings> {
    let (shutdown_broadcast_tx, shutdown_broadcast_rx) = broadcast::channel(1);

    let mut client = Client::new(&config, strategy, shutdown_broadcast_rx);
    let mut task = tokio::spawn(async move { client.run().await });

    let res = tokio::select! {
        res = &mut task => res,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl-c signal");

            // Signal the client to shutdown and wait for the partial results.
            drop(shutdown_broadcast_tx);
            task.await
        }
    };

    let standings = res??;
    info!(
        "Played {} rounds won {} lost {} pushed {} net {}",
        standings.rounds, standings.wins, standings.losses, standings.pushes, standings.net
    );

    Ok(standings)
}
