// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Automated match client.
use anyhow::{Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use tokio::{
    sync::broadcast,
    time::{self, Duration},
};

use ofc_core::{
    board::{Board, RowKind},
    config::MatchConfig,
    engine::{Engine, Phase, Snapshot},
    poker::{Card, Chips},
    scoring::{Side, settle},
};

use crate::{Config, Standings};

/// A strategy for the human seat.
pub trait Strategy: Send + 'static {
    /// The amount to wager for the next round.
    fn wager(&mut self, snapshot: &Snapshot) -> Chips;

    /// Picks a card from the hand and an empty slot for it.
    fn place(&mut self, hand: &[Card], board: &Board) -> Option<(Card, RowKind, usize)>;
}

/// Plays tournaments against the engine opponent.
pub struct Client<S: Strategy> {
    engine: Engine,
    strategy: S,
    tournaments: u32,
    pace: Duration,
    standings: Standings,
    shutdown_broadcast_rx: broadcast::Receiver<()>,
}

impl<S: Strategy> Client<S> {
    /// Creates a new client.
    pub fn new(
        config: &Config,
        strategy: S,
        shutdown_broadcast_rx: broadcast::Receiver<()>,
    ) -> Self {
        let engine = match config.seed {
            Some(seed) => Engine::with_rng(MatchConfig::default(), StdRng::seed_from_u64(seed)),
            None => Engine::new(),
        };

        Self {
            engine,
            strategy,
            tournaments: config.tournaments,
            pace: config.pace,
            standings: Standings::default(),
            shutdown_broadcast_rx,
        }
    }

    /// Runs the client until all tournaments are played or shutdown.
    pub async fn run(&mut self) -> Result<Standings> {
        loop {
            if self.is_done() {
                return Ok(self.standings.clone());
            }

            if self.is_placing() {
                let pace = self.pace;
                tokio::select! {
                    _ = self.shutdown_broadcast_rx.recv() => {
                        info!("Client shutdown after {} rounds", self.standings.rounds);
                        return Ok(self.standings.clone());
                    }
                    _ = time::sleep(pace) => {}
                }
            }

            self.step()?;
        }
    }

    fn is_done(&self) -> bool {
        self.standings.busted || self.standings.tournaments >= self.tournaments
    }

    fn is_placing(&self) -> bool {
        matches!(self.engine.phase(), Phase::Placement | Phase::Drawing)
    }

    /// Executes one action on the engine.
    fn step(&mut self) -> Result<()> {
        match self.engine.phase() {
            Phase::Start => self.engine.begin()?,
            Phase::Betting => self.bet()?,
            Phase::Placement | Phase::Drawing => self.place()?,
            Phase::GameOver => self.end_round()?,
            Phase::Scoring => bail!("Round left in the scoring phase"),
        }

        Ok(())
    }

    fn bet(&mut self) -> Result<()> {
        let wager = self.strategy.wager(&self.engine.snapshot());
        if commit_wager(&mut self.engine, wager)?.is_zero() {
            info!(
                "Bankroll {} too short for a bet",
                self.engine.bankrolls().human
            );
            self.standings.busted = true;
            return Ok(());
        }

        self.engine.lock_bets_and_deal()?;
        Ok(())
    }

    fn place(&mut self) -> Result<()> {
        let human = self.engine.human();
        let Some((card, row, slot)) = self.strategy.place(&human.hand, &human.board) else {
            bail!("No placement for hand {:?}", human.hand);
        };

        debug!("Placing {card} in {row} slot {slot}");
        self.engine.place_human_card(card.id(), row, slot)?;
        Ok(())
    }

    fn end_round(&mut self) -> Result<()> {
        if let Some(score) = self.engine.score() {
            let bets = self.engine.bets();
            let settlement = settle(
                score.human.total,
                score.opponent.total,
                bets.human,
                bets.opponent,
            );

            let standings = &mut self.standings;
            standings.rounds += 1;
            standings.net += settlement.human_net;
            standings.fouls += u32::from(score.human_fouled);
            match settlement.winner {
                Some(Side::Human) => standings.wins += 1,
                Some(Side::Opponent) => standings.losses += 1,
                None => standings.pushes += 1,
            }
        }

        if self.engine.is_tournament_over() {
            self.standings.tournaments += 1;

            let bankrolls = self.engine.bankrolls();
            info!(
                "Tournament {} final bankrolls human {} opponent {}",
                self.standings.tournaments, bankrolls.human, bankrolls.opponent
            );

            if self.is_done() {
                return Ok(());
            }
        }

        self.engine.advance_after_game_over()?;
        Ok(())
    }
}

/// Commits chips for a wager from the largest denomination, returns the amount
/// committed which is less than the wager if the bankroll is short.
pub fn commit_wager(engine: &mut Engine, wager: Chips) -> Result<Chips> {
    let mut chips = engine.config().chip_values;
    chips.sort_by(|a, b| b.cmp(a));

    let mut committed = Chips::ZERO;
    for chip in chips {
        while committed + chip <= wager && chip <= engine.bankrolls().human {
            engine.commit_bet(chip)?;
            committed += chip;
        }
    }

    Ok(committed)
}
