// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Built in strategies.
use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use ofc_core::{
    board::{Board, RowKind},
    engine::Snapshot,
    placement::{HeuristicPlacement, PlacementPolicy, spill_over},
    poker::{Card, Chips},
};

use crate::Strategy;

/// Wagers a fixed amount and places cards like the opponent does.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    wager: Chips,
}

impl HeuristicStrategy {
    /// Creates a strategy with a fixed wager.
    pub fn new(wager: Chips) -> Self {
        Self { wager }
    }
}

impl Strategy for HeuristicStrategy {
    fn wager(&mut self, _snapshot: &Snapshot) -> Chips {
        self.wager
    }

    fn place(&mut self, hand: &[Card], board: &Board) -> Option<(Card, RowKind, usize)> {
        // Strongest card first.
        let card = hand.iter().copied().max_by_key(|c| c.rank())?;

        let row = Some(HeuristicPlacement.choose_row(card, board))
            .filter(|r| !board.row(*r).is_full())
            .or_else(|| spill_over(board))?;

        let slot = board.row(row).first_empty()?;
        Some((card, row, slot))
    }
}

/// Wagers and places at random.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    max_wager: Chips,
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy that wagers up to `max_wager`.
    pub fn new(max_wager: Chips, rng: StdRng) -> Self {
        Self { max_wager, rng }
    }
}

impl Strategy for RandomStrategy {
    fn wager(&mut self, _snapshot: &Snapshot) -> Chips {
        let steps = (self.max_wager.amount() / 5).max(1);
        Chips::new(self.rng.random_range(1..=steps) * 5)
    }

    fn place(&mut self, hand: &[Card], board: &Board) -> Option<(Card, RowKind, usize)> {
        let card = *hand.choose(&mut self.rng)?;

        let rows = RowKind::ALL
            .into_iter()
            .filter(|r| !board.row(*r).is_full())
            .collect::<Vec<_>>();
        let row = *rows.choose(&mut self.rng)?;

        let slots = board
            .row(row)
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(idx, s)| s.is_none().then_some(idx))
            .collect::<Vec<_>>();
        let slot = *slots.choose(&mut self.rng)?;

        Some((card, row, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ofc_core::poker::Deck;
    use rand::SeedableRng;

    fn fill_with(strategy: &mut impl Strategy, seed: u64) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let mut board = Board::default();
        let mut hand = deck.deal(5).unwrap();

        while !board.is_full() {
            if hand.is_empty() {
                hand = deck.deal(1).unwrap();
            }

            let (card, row, slot) = strategy.place(&hand, &board).unwrap();
            assert!(hand.contains(&card));
            board.place(row, slot, card).unwrap();
            hand.retain(|c| c != &card);
        }

        board
    }

    #[test]
    fn heuristic_places_strongest_card() {
        let mut strategy = HeuristicStrategy::new(Chips::new(100));
        let hand = ["4S", "AH", "9C"].map(|c| c.parse::<Card>().unwrap());

        let (card, row, slot) = strategy.place(&hand, &Board::default()).unwrap();
        assert_eq!(card, hand[1]);
        assert_eq!(row, RowKind::Back);
        assert_eq!(slot, 0);
    }

    #[test]
    fn strategies_fill_board() {
        for seed in 0..20 {
            let board = fill_with(&mut HeuristicStrategy::new(Chips::new(100)), seed);
            assert_eq!(board.placed(), Board::SIZE);

            let rng = StdRng::seed_from_u64(seed);
            let board = fill_with(&mut RandomStrategy::new(Chips::new(100), rng), seed);
            assert_eq!(board.placed(), Board::SIZE);
        }
    }

    #[test]
    fn random_wager_in_steps() {
        let mut strategy = RandomStrategy::new(Chips::new(100), StdRng::seed_from_u64(3));
        let snapshot = ofc_core::engine::Engine::default().snapshot();

        for _ in 0..100 {
            let wager = strategy.wager(&snapshot).amount();
            assert!((5..=100).contains(&wager), "wager {wager}");
            assert_eq!(wager % 5, 0);
        }
    }
}
