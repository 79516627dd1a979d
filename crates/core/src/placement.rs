// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Opponent cards placement.
//!
//! The opponent places each card with an ordered table of rules, the first rule
//! that matches the card and has room in its row picks the row. Strong cards
//! build the back row, cards that pair a rank already on the board join it, and
//! the remaining cards are spread by rank from the back to the front.
use log::{debug, warn};

use crate::{
    board::{Board, RowKind},
    poker::{Card, Rank},
};

/// A cards placement policy.
pub trait PlacementPolicy {
    /// Chooses the row for a card given the board.
    fn choose_row(&self, card: Card, board: &Board) -> RowKind;

    /// Places a batch of cards on the board.
    ///
    /// Cards are placed from the highest rank so that strong cards claim the
    /// back row first, each card goes in the first empty slot of its row. If the
    /// chosen row is full the card spills over to the first row with room from
    /// the back, if the board is full the card is dropped.
    fn perform_move(&self, board: &mut Board, cards: &[Card]) {
        let mut cards = cards.to_vec();
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));

        for card in cards {
            let chosen = self.choose_row(card, board);
            let Some(row) = Some(chosen)
                .filter(|r| !board.row(*r).is_full())
                .or_else(|| spill_over(board))
            else {
                warn!("No room on the board for {card}");
                continue;
            };

            if let Some(slot) = board.place_first_empty(row, card) {
                debug!("Placed {card} in {row} slot {slot}");
            }
        }
    }
}

/// The first row with room from the back.
pub fn spill_over(board: &Board) -> Option<RowKind> {
    [RowKind::Back, RowKind::Mid, RowKind::Front]
        .into_iter()
        .find(|r| !board.row(*r).is_full())
}

/// A placement rule.
struct Rule {
    /// The row this rule picks.
    row: RowKind,
    /// Checks if the rule applies to a card.
    applies: fn(Card, &Board) -> bool,
}

/// The rules in priority order.
static RULES: [Rule; 7] = [
    // High cards build the back row.
    Rule {
        row: RowKind::Back,
        applies: |card, _| card.rank() >= Rank::Queen,
    },
    // Pair up from the strongest row.
    Rule {
        row: RowKind::Back,
        applies: |card, board| board.row(RowKind::Back).has_rank(card.rank()),
    },
    Rule {
        row: RowKind::Mid,
        applies: |card, board| board.row(RowKind::Mid).has_rank(card.rank()),
    },
    Rule {
        row: RowKind::Front,
        applies: |card, board| board.row(RowKind::Front).has_rank(card.rank()),
    },
    // Fill by strength.
    Rule {
        row: RowKind::Back,
        applies: |card, _| card.rank() >= Rank::Ten,
    },
    Rule {
        row: RowKind::Mid,
        applies: |card, _| card.rank() >= Rank::Six && card.rank() < Rank::Queen,
    },
    Rule {
        row: RowKind::Front,
        applies: |card, _| card.rank() < Rank::Eight,
    },
];

/// The opponent placement heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPlacement;

impl PlacementPolicy for HeuristicPlacement {
    fn choose_row(&self, card: Card, board: &Board) -> RowKind {
        RULES
            .iter()
            .find(|rule| !board.row(rule.row).is_full() && (rule.applies)(card, board))
            .map(|rule| rule.row)
            .or_else(|| spill_over(board))
            .unwrap_or(RowKind::Front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::Deck;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn fill(board: &mut Board, kind: RowKind, s: &str) {
        for c in cards(s) {
            board.place_first_empty(kind, c).unwrap();
        }
    }

    #[test]
    fn opening_hand() {
        let mut board = Board::default();
        HeuristicPlacement.perform_move(&mut board, &cards("4S 7C AH 2H KD"));

        assert_eq!(board.row(RowKind::Back).cards(), cards("AH KD"));
        assert_eq!(board.row(RowKind::Mid).cards(), cards("7C"));
        assert_eq!(board.row(RowKind::Front).cards(), cards("4S 2H"));
        assert_eq!(board.placed(), 5);
    }

    #[test]
    fn high_cards_go_back() {
        let board = Board::default();
        let policy = HeuristicPlacement;
        assert_eq!(policy.choose_row(card("QH"), &board), RowKind::Back);
        assert_eq!(policy.choose_row(card("TH"), &board), RowKind::Back);
        assert_eq!(policy.choose_row(card("9H"), &board), RowKind::Mid);
        assert_eq!(policy.choose_row(card("6H"), &board), RowKind::Mid);
        assert_eq!(policy.choose_row(card("5H"), &board), RowKind::Front);
    }

    #[test]
    fn pairs_follow_rank() {
        let policy = HeuristicPlacement;
        let mut board = Board::default();
        fill(&mut board, RowKind::Back, "9C");
        fill(&mut board, RowKind::Mid, "3C");
        fill(&mut board, RowKind::Front, "JC");

        // A medium card pairs in the back.
        assert_eq!(policy.choose_row(card("9H"), &board), RowKind::Back);
        // A low card pairs in the middle.
        assert_eq!(policy.choose_row(card("3H"), &board), RowKind::Mid);
        // A jack pairs in the front before filling by strength.
        assert_eq!(policy.choose_row(card("JH"), &board), RowKind::Front);
        // A queen goes back before pairing.
        fill(&mut board, RowKind::Front, "QC");
        assert_eq!(policy.choose_row(card("QH"), &board), RowKind::Back);
    }

    #[test]
    fn full_rows_are_skipped() {
        let policy = HeuristicPlacement;
        let mut board = Board::default();
        fill(&mut board, RowKind::Back, "AC AD KC KD 2C");

        // Queen with a full back row falls to the fallback, the middle row.
        assert_eq!(policy.choose_row(card("QH"), &board), RowKind::Mid);
        // A deuce can't pair in the back.
        assert_eq!(policy.choose_row(card("2H"), &board), RowKind::Front);

        fill(&mut board, RowKind::Front, "3C 4C 5C");
        assert_eq!(policy.choose_row(card("2H"), &board), RowKind::Mid);

        fill(&mut board, RowKind::Mid, "6C 7C 8C 9C TC");
        assert!(board.is_full());
        assert_eq!(spill_over(&board), None);

        // Placing on a full board is a no-op.
        let before = board.clone();
        policy.perform_move(&mut board, &cards("JH"));
        assert_eq!(board, before);
    }

    #[test]
    fn spill_over_order() {
        let mut board = Board::default();
        assert_eq!(spill_over(&board), Some(RowKind::Back));

        fill(&mut board, RowKind::Back, "AC AD KC KD 2C");
        assert_eq!(spill_over(&board), Some(RowKind::Mid));

        fill(&mut board, RowKind::Mid, "6C 7C 8C 9C TC");
        assert_eq!(spill_over(&board), Some(RowKind::Front));
    }

    #[test]
    fn batch_respects_capacity() {
        let mut board = Board::default();
        HeuristicPlacement.perform_move(&mut board, &cards("AH AD AC AS KH"));
        assert_eq!(board.row(RowKind::Back).len(), 5);

        // Back is full, high cards spill to the middle.
        HeuristicPlacement.perform_move(&mut board, &cards("KD KC"));
        assert_eq!(board.row(RowKind::Mid).cards(), cards("KD KC"));
    }

    #[test]
    fn full_round_fills_board() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut board = Board::default();

            let opening = deck.deal(5).unwrap();
            HeuristicPlacement.perform_move(&mut board, &opening);
            assert_eq!(board.placed(), 5);

            while !board.is_full() {
                let drawn = deck.deal(1).unwrap();
                HeuristicPlacement.perform_move(&mut board, &drawn);
            }

            assert_eq!(board.placed(), Board::SIZE);
            for row in board.rows() {
                assert!(row.len() <= row.kind().capacity());
            }

            let unique = board
                .rows()
                .flat_map(|r| r.cards())
                .map(|c| c.id())
                .collect::<HashSet<_>>();
            assert_eq!(unique.len(), Board::SIZE);
        }
    }
}
