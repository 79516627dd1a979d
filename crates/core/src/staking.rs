// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Opponent stake policy.
//!
//! The opponent must wager its starting bankroll over the tournament, each
//! round it stakes a share of the remaining obligation scaled by how the match
//! is going, always keeping enough in reserve for the minimum stake in the
//! rounds left.
use rand::Rng;

use crate::poker::Chips;

/// The inputs to the stake policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeContext {
    /// The current round starting from 1.
    pub round: u32,
    /// The number of rounds in the tournament.
    pub total_rounds: u32,
    /// How much the opponent has still to wager in this tournament.
    pub remaining_obligation: Chips,
    /// The opponent bankroll.
    pub bankroll: Chips,
    /// The human bankroll after its wager for this round.
    pub human_bankroll: Chips,
    /// The smallest stake, stakes are multiples of it.
    pub min_stake: Chips,
}

impl StakeContext {
    fn is_final_round(&self) -> bool {
        self.round >= self.total_rounds
    }

    fn is_early_round(&self) -> bool {
        self.round <= 3
    }

    /// Rounds left including the current one.
    fn remaining_rounds(&self) -> u32 {
        (self.total_rounds + 1).saturating_sub(self.round).max(1)
    }
}

/// Computes the opponent stake for a round.
pub fn opponent_stake<R: Rng + ?Sized>(ctx: &StakeContext, rng: &mut R) -> Chips {
    if ctx.is_final_round() {
        return ctx.remaining_obligation.min(ctx.bankroll);
    }

    let multiplier = if ctx.is_early_round() {
        rng.random_range(0.8..1.2)
    } else if ctx.bankroll > ctx.human_bankroll {
        rng.random_range(1.2..1.7)
    } else if ctx.bankroll < ctx.human_bankroll {
        rng.random_range(0.6..0.9)
    } else {
        1.0
    };

    let min_stake = i64::from(ctx.min_stake.amount().max(1));
    let remaining = i64::from(ctx.remaining_obligation.amount());
    let remaining_rounds = i64::from(ctx.remaining_rounds());

    let average = remaining as f64 / remaining_rounds as f64;
    let reserve = (remaining_rounds - 1) * min_stake;

    let bet = ((average * multiplier).floor() as i64)
        .min(remaining - reserve)
        .max(min_stake);
    let bet = (bet as f64 / min_stake as f64).round() as i64 * min_stake;

    let stake = Chips::new(u32::try_from(bet).unwrap_or(u32::MAX));
    stake.min(ctx.bankroll)
}

/// Describes the opponent betting mood for a round.
pub fn strategy_label(ctx: &StakeContext) -> &'static str {
    if ctx.is_early_round() {
        "Playing Tight-Aggressive"
    } else if ctx.is_final_round() {
        "Going All-In (Final Round)"
    } else if ctx.bankroll > ctx.human_bankroll {
        "Pressing the Advantage"
    } else if ctx.bankroll < ctx.human_bankroll {
        "Playing Defensively"
    } else {
        "Evaluating Table Dynamics"
    }
}
