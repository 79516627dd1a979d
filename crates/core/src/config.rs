// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Match configuration.
use serde::{Deserialize, Serialize};

use crate::poker::Chips;

/// The match constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of rounds in a tournament.
    pub total_rounds: u32,
    /// Each side bankroll at the start of a tournament.
    pub starting_bankroll: Chips,
    /// The chip denominations the human can wager with.
    pub chip_values: [Chips; 4],
    /// The smallest opponent stake, stakes are multiples of this amount.
    pub min_stake: Chips,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_rounds: 10,
            starting_bankroll: Chips::new(1_000),
            chip_values: [
                Chips::new(5),
                Chips::new(25),
                Chips::new(100),
                Chips::new(500),
            ],
            min_stake: Chips::new(5),
        }
    }
}

impl MatchConfig {
    /// Checks if an amount is one of the chip denominations.
    pub fn is_chip(&self, amount: Chips) -> bool {
        self.chip_values.contains(&amount)
    }
}
