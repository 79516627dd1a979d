// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Match engine state machine.
//!
//! The engine owns the deck and both players for the whole match. Each round
//! goes through betting, placement of the opening hands, drawing one card per
//! side until the boards are full and finally scoring. Actions submitted by the
//! presentation layer are validated and rejected without side effects.
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    board::{BoardEvaluation, RowKind},
    config::MatchConfig,
    error::ActionError,
    placement::{HeuristicPlacement, PlacementPolicy},
    player::PlayerState,
    poker::{CardId, Chips, Deck},
    scoring::{RoundScore, Side, score_round, settle},
    staking::{StakeContext, opponent_stake, strategy_label},
};

/// The round phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the match to begin.
    #[default]
    Start,
    /// The human commits a wager.
    Betting,
    /// The human places the opening hand.
    Placement,
    /// Each side draws one card at a time.
    Drawing,
    /// Boards are scored and the pot settled.
    Scoring,
    /// The round is over.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Start => "start",
            Phase::Betting => "betting",
            Phase::Placement => "placement",
            Phase::Drawing => "drawing",
            Phase::Scoring => "scoring",
            Phase::GameOver => "game over",
        };

        write!(f, "{s}")
    }
}

/// Rounds won by each side in the current tournament.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    /// Rounds won by the human.
    pub human_wins: u32,
    /// Rounds won by the opponent.
    pub opponent_wins: u32,
}

/// A chips amount for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stacks {
    /// The human amount.
    pub human: Chips,
    /// The opponent amount.
    pub opponent: Chips,
}

impl Stacks {
    fn new(amount: Chips) -> Self {
        Self {
            human: amount,
            opponent: amount,
        }
    }

    /// The sum of both amounts.
    pub fn total(&self) -> Chips {
        self.human + self.opponent
    }
}

/// A read only view of the match for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The current phase.
    pub phase: Phase,
    /// The current round starting from 1.
    pub round: u32,
    /// The rounds in a tournament.
    pub total_rounds: u32,
    /// The human player.
    pub human: PlayerState,
    /// The opponent player.
    pub opponent: PlayerState,
    /// The human rows evaluation, set at scoring.
    pub human_eval: Option<BoardEvaluation>,
    /// The opponent rows evaluation, set at scoring.
    pub opponent_eval: Option<BoardEvaluation>,
    /// The human partial board breaks the rows ordering.
    pub preview_foul: bool,
    /// The round score, set at scoring.
    pub score: Option<RoundScore>,
    /// Both bankrolls.
    pub bankrolls: Stacks,
    /// Both bets for this round.
    pub bets: Stacks,
    /// The opponent obligation left in this tournament.
    pub remaining_obligation: Chips,
    /// The rounds won in this tournament.
    pub tallies: Tallies,
    /// The human net result for the last settled round.
    pub last_win_amount: Option<i64>,
    /// The opponent betting mood.
    pub strategy: String,
}

/// The match engine.
#[derive(Debug)]
pub struct Engine {
    config: MatchConfig,
    phase: Phase,
    deck: Deck,
    human: PlayerState,
    opponent: PlayerState,
    placement: HeuristicPlacement,
    round: u32,
    bankrolls: Stacks,
    bets: Stacks,
    bets_locked: bool,
    remaining_obligation: Chips,
    tallies: Tallies,
    human_eval: Option<BoardEvaluation>,
    opponent_eval: Option<BoardEvaluation>,
    score: Option<RoundScore>,
    last_win_amount: Option<i64>,
    strategy: &'static str,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// The opening hand size.
    pub const OPENING_CARDS: usize = 5;

    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_rng(MatchConfig::default(), StdRng::from_os_rng())
    }

    /// Creates an engine with user initialized randomness.
    pub fn with_rng(config: MatchConfig, rng: StdRng) -> Self {
        Self {
            phase: Phase::Start,
            deck: Deck::default(),
            human: PlayerState::default(),
            opponent: PlayerState::default(),
            placement: HeuristicPlacement,
            round: 1,
            bankrolls: Stacks::new(config.starting_bankroll),
            bets: Stacks::default(),
            bets_locked: false,
            remaining_obligation: config.starting_bankroll,
            tallies: Tallies::default(),
            human_eval: None,
            opponent_eval: None,
            score: None,
            last_win_amount: None,
            strategy: "",
            rng,
            config,
        }
    }

    /// Starts the match.
    pub fn begin(&mut self) -> Result<(), ActionError> {
        self.check_phase(&[Phase::Start])?;
        self.enter_betting();
        Ok(())
    }

    /// Adds a chip to the human wager, the chip is taken from the bankroll.
    pub fn commit_bet(&mut self, amount: Chips) -> Result<(), ActionError> {
        self.check_open_bets()?;

        if !self.config.is_chip(amount) {
            return reject(ActionError::InvalidChip(amount));
        }

        if amount > self.bankrolls.human {
            return reject(ActionError::InsufficientBankroll {
                amount,
                available: self.bankrolls.human,
            });
        }

        self.bankrolls.human -= amount;
        self.bets.human += amount;
        debug!("Human bet {} bankroll {}", self.bets.human, self.bankrolls.human);

        Ok(())
    }

    /// Returns the human wager to the bankroll.
    pub fn clear_bet(&mut self) -> Result<(), ActionError> {
        self.check_open_bets()?;

        self.bankrolls.human += self.bets.human;
        self.bets.human = Chips::ZERO;
        debug!("Human bet cleared bankroll {}", self.bankrolls.human);

        Ok(())
    }

    /// Stakes the opponent and deals the opening hands.
    pub fn lock_bets_and_deal(&mut self) -> Result<(), ActionError> {
        self.check_open_bets()?;

        if self.bets.human.is_zero() {
            return reject(ActionError::NoWager);
        }

        let ctx = StakeContext {
            round: self.round,
            total_rounds: self.config.total_rounds,
            remaining_obligation: self.remaining_obligation,
            bankroll: self.bankrolls.opponent,
            human_bankroll: self.bankrolls.human,
            min_stake: self.config.min_stake,
        };

        let stake = opponent_stake(&ctx, &mut self.rng);
        self.strategy = strategy_label(&ctx);
        self.bankrolls.opponent -= stake;
        self.remaining_obligation -= stake;
        self.bets.opponent = stake;
        self.bets_locked = true;

        info!(
            "Round {} bets human {} opponent {} ({})",
            self.round, self.bets.human, self.bets.opponent, self.strategy
        );

        self.start_round()
    }

    /// Deals the opening hands once bets are locked.
    ///
    /// The opponent hand is placed right away, the human hand is left for
    /// [Engine::place_human_card].
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        self.check_phase(&[Phase::Betting])?;

        if !self.bets_locked {
            return reject(ActionError::NoWager);
        }

        self.human.reset();
        self.opponent.reset();
        self.human_eval = None;
        self.opponent_eval = None;
        self.score = None;
        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.phase = Phase::Placement;

        let (Some(human), Some(opponent)) = (
            self.deck.deal(Self::OPENING_CARDS),
            self.deck.deal(Self::OPENING_CARDS),
        ) else {
            warn!("Deck underflow dealing round {}", self.round);
            self.enter_scoring();
            return Ok(());
        };

        self.human.hand = human;
        self.placement
            .perform_move(&mut self.opponent.board, &opponent);

        info!("Round {} dealt", self.round);

        Ok(())
    }

    /// Places a card from the human hand in a row slot.
    pub fn place_human_card(
        &mut self,
        card_id: CardId,
        row: RowKind,
        slot: usize,
    ) -> Result<(), ActionError> {
        self.check_phase(&[Phase::Placement, Phase::Drawing])?;

        let Some(card) = self.human.card_in_hand(card_id) else {
            return reject(ActionError::CardNotInHand(card_id));
        };

        self.human.board.place(row, slot, card).or_else(reject)?;
        self.human.remove_from_hand(card);
        debug!("Human placed {card} in {row} slot {slot}");

        if self.human.hand.is_empty() {
            self.phase = Phase::Drawing;
            self.draw_cards();
        }

        Ok(())
    }

    /// Moves to the next round, resetting the tournament after the last round.
    pub fn advance_after_game_over(&mut self) -> Result<(), ActionError> {
        self.check_phase(&[Phase::GameOver])?;
        self.enter_betting();
        Ok(())
    }

    /// Checks if the last round of the tournament has been played.
    pub fn is_tournament_over(&self) -> bool {
        self.phase == Phase::GameOver && self.round > self.config.total_rounds
    }

    /// The match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human player.
    pub fn human(&self) -> &PlayerState {
        &self.human
    }

    /// The opponent player.
    pub fn opponent(&self) -> &PlayerState {
        &self.opponent
    }

    /// The current round starting from 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Both bankrolls.
    pub fn bankrolls(&self) -> Stacks {
        self.bankrolls
    }

    /// Both bets for this round.
    pub fn bets(&self) -> Stacks {
        self.bets
    }

    /// The opponent obligation left in this tournament.
    pub fn remaining_obligation(&self) -> Chips {
        self.remaining_obligation
    }

    /// The rounds won in this tournament.
    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    /// The human net result for the last settled round.
    pub fn last_win_amount(&self) -> Option<i64> {
        self.last_win_amount
    }

    /// The round score once the round is over.
    pub fn score(&self) -> Option<&RoundScore> {
        self.score.as_ref()
    }

    /// Returns a view of the match.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            round: self.round,
            total_rounds: self.config.total_rounds,
            human: self.human.clone(),
            opponent: self.opponent.clone(),
            human_eval: self.human_eval.clone(),
            opponent_eval: self.opponent_eval.clone(),
            preview_foul: self.human.board.is_foul(),
            score: self.score,
            bankrolls: self.bankrolls,
            bets: self.bets,
            remaining_obligation: self.remaining_obligation,
            tallies: self.tallies,
            last_win_amount: self.last_win_amount,
            strategy: self.strategy.to_string(),
        }
    }

    fn check_phase(&self, phases: &[Phase]) -> Result<(), ActionError> {
        if phases.contains(&self.phase) {
            Ok(())
        } else {
            reject(ActionError::WrongPhase(self.phase))
        }
    }

    fn check_open_bets(&self) -> Result<(), ActionError> {
        self.check_phase(&[Phase::Betting])?;

        if self.bets_locked {
            reject(ActionError::BetsLocked)
        } else {
            Ok(())
        }
    }

    fn enter_betting(&mut self) {
        if self.round > self.config.total_rounds {
            self.reset_tournament();
        }

        self.phase = Phase::Betting;
        self.bets = Stacks::default();
        self.bets_locked = false;

        info!(
            "Round {} betting bankrolls human {} opponent {}",
            self.round, self.bankrolls.human, self.bankrolls.opponent
        );
    }

    fn reset_tournament(&mut self) {
        info!(
            "Tournament over wins human {} opponent {}",
            self.tallies.human_wins, self.tallies.opponent_wins
        );

        self.round = 1;
        self.bankrolls = Stacks::new(self.config.starting_bankroll);
        self.remaining_obligation = self.config.starting_bankroll;
        self.tallies = Tallies::default();
        self.last_win_amount = None;
        self.human.reset();
        self.opponent.reset();
        self.human_eval = None;
        self.opponent_eval = None;
        self.score = None;
    }

    /// Deals one card to each side, or scores once the human board is full.
    fn draw_cards(&mut self) {
        if self.human.board.is_full() {
            self.enter_scoring();
            return;
        }

        let Some(cards) = self.deck.deal(2) else {
            warn!("Deck underflow with {} cards left", self.deck.count());
            self.enter_scoring();
            return;
        };

        self.human.hand.push(cards[0]);
        self.placement
            .perform_move(&mut self.opponent.board, &cards[1..]);
    }

    fn enter_scoring(&mut self) {
        self.phase = Phase::Scoring;

        let human_eval = self.human.board.evaluate();
        let opponent_eval = self.opponent.board.evaluate();
        let score = score_round(&human_eval, &opponent_eval);

        self.human.fouled = score.human_fouled;
        self.human.scores = score.human;
        self.opponent.fouled = score.opponent_fouled;
        self.opponent.scores = score.opponent;

        let settlement = settle(
            score.human.total,
            score.opponent.total,
            self.bets.human,
            self.bets.opponent,
        );

        self.bankrolls.human += settlement.human_payout;
        self.bankrolls.opponent += settlement.opponent_payout;
        self.last_win_amount = Some(settlement.human_net);

        match settlement.winner {
            Some(Side::Human) => self.tallies.human_wins += 1,
            Some(Side::Opponent) => self.tallies.opponent_wins += 1,
            None => {}
        }

        info!(
            "Round {} points human {} opponent {} net {}",
            self.round, score.human.total, score.opponent.total, settlement.human_net
        );

        self.human_eval = Some(human_eval);
        self.opponent_eval = Some(opponent_eval);
        self.score = Some(score);
        self.round += 1;
        self.phase = Phase::GameOver;
    }
}

fn reject(err: ActionError) -> Result<(), ActionError> {
    debug!("Action rejected: {err}");
    Err(err)
}
