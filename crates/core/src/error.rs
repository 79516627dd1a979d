// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine action errors.
//!
//! A rejected action leaves the engine state untouched, the error only tells
//! the caller why nothing happened.
use thiserror::Error;

use crate::{
    board::RowKind,
    engine::Phase,
    poker::{CardId, Chips},
};

/// Reasons an action is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current phase.
    #[error("action not allowed in the {0} phase")]
    WrongPhase(Phase),
    /// The card is not in the player hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),
    /// The slot already holds a card.
    #[error("{row} slot {slot} is taken")]
    SlotOccupied {
        /// The row.
        row: RowKind,
        /// The slot index.
        slot: usize,
    },
    /// The slot index is past the row capacity.
    #[error("{row} has no slot {slot}")]
    SlotOutOfRange {
        /// The row.
        row: RowKind,
        /// The slot index.
        slot: usize,
    },
    /// The amount is not a chip denomination.
    #[error("{0} is not a chip value")]
    InvalidChip(Chips),
    /// The bet is more than the available bankroll.
    #[error("bet {amount} exceeds bankroll {available}")]
    InsufficientBankroll {
        /// The amount to bet.
        amount: Chips,
        /// The available bankroll.
        available: Chips,
    },
    /// Bets cannot be locked without a wager.
    #[error("no wager committed")]
    NoWager,
    /// Bets are locked for this round.
    #[error("bets are locked")]
    BetsLocked,
}
