// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player state types.
use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    poker::{Card, CardId},
};

/// The points a player scored in a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowScores {
    /// Front row point.
    pub front: u32,
    /// Middle row point.
    pub mid: u32,
    /// Back row point.
    pub back: u32,
    /// Bonus for winning all rows.
    pub scoop: u32,
    /// The round total.
    pub total: u32,
}

/// A player state for a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// The cards held and not yet placed.
    pub hand: Vec<Card>,
    /// This player board.
    pub board: Board,
    /// The board is fouled, set at scoring.
    pub fouled: bool,
    /// The round points, set at scoring.
    pub scores: RowScores,
}

impl PlayerState {
    /// Reset state for a new round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the card with this id if it is in the hand.
    pub fn card_in_hand(&self, card_id: CardId) -> Option<Card> {
        self.hand.iter().copied().find(|c| c.id() == card_id)
    }

    /// Removes a card from the hand.
    pub fn remove_from_hand(&mut self, card: Card) {
        self.hand.retain(|c| c != &card);
    }
}
