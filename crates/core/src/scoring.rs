// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round scoring and pot settlement.
use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardEvaluation, RowKind},
    player::RowScores,
    poker::Chips,
};

/// Points for the clean side when the other side fouls.
pub const FOUL_POINTS: u32 = 6;

/// Bonus for winning all three rows.
pub const SCOOP_BONUS: u32 = 3;

/// A match side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Human,
    /// The automated opponent.
    Opponent,
}

/// Who won a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// The human row is stronger.
    Human,
    /// The opponent row is stronger.
    Opponent,
    /// Equal rows, or the round was decided by a foul.
    #[default]
    Tie,
}

/// The outcome of each row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcomes {
    /// The front row.
    pub front: RowOutcome,
    /// The middle row.
    pub mid: RowOutcome,
    /// The back row.
    pub back: RowOutcome,
}

impl RowOutcomes {
    /// Returns a row outcome.
    pub fn get(&self, kind: RowKind) -> RowOutcome {
        match kind {
            RowKind::Front => self.front,
            RowKind::Mid => self.mid,
            RowKind::Back => self.back,
        }
    }

    fn get_mut(&mut self, kind: RowKind) -> &mut RowOutcome {
        match kind {
            RowKind::Front => &mut self.front,
            RowKind::Mid => &mut self.mid,
            RowKind::Back => &mut self.back,
        }
    }

    /// The rows the human won strictly, from the front.
    pub fn human_winners(&self) -> [bool; 3] {
        RowKind::ALL.map(|kind| self.get(kind) == RowOutcome::Human)
    }
}

/// The score of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    /// The human points.
    pub human: RowScores,
    /// The opponent points.
    pub opponent: RowScores,
    /// The human board is fouled.
    pub human_fouled: bool,
    /// The opponent board is fouled.
    pub opponent_fouled: bool,
    /// The rows outcome.
    pub outcomes: RowOutcomes,
}

/// Scores a round from both boards evaluations.
pub fn score_round(human: &BoardEvaluation, opponent: &BoardEvaluation) -> RoundScore {
    let mut score = RoundScore {
        human_fouled: human.is_foul(),
        opponent_fouled: opponent.is_foul(),
        ..Default::default()
    };

    match (score.human_fouled, score.opponent_fouled) {
        (true, true) => {}
        (true, false) => score.opponent.total = FOUL_POINTS,
        (false, true) => score.human.total = FOUL_POINTS,
        (false, false) => {
            for kind in RowKind::ALL {
                let (h, o) = (human.row(kind), opponent.row(kind));
                let outcome = if h > o {
                    *row_points(&mut score.human, kind) = 1;
                    RowOutcome::Human
                } else if o > h {
                    *row_points(&mut score.opponent, kind) = 1;
                    RowOutcome::Opponent
                } else {
                    RowOutcome::Tie
                };

                *score.outcomes.get_mut(kind) = outcome;
            }

            for scores in [&mut score.human, &mut score.opponent] {
                let rows = scores.front + scores.mid + scores.back;
                if rows == 3 {
                    scores.scoop = SCOOP_BONUS;
                }
                scores.total = rows + scores.scoop;
            }
        }
    }

    score
}

fn row_points(scores: &mut RowScores, kind: RowKind) -> &mut u32 {
    match kind {
        RowKind::Front => &mut scores.front,
        RowKind::Mid => &mut scores.mid,
        RowKind::Back => &mut scores.back,
    }
}

/// How the pot is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The side with more points, `None` on a push.
    pub winner: Option<Side>,
    /// Chips paid to the human.
    pub human_payout: Chips,
    /// Chips paid to the opponent.
    pub opponent_payout: Chips,
    /// The human payout minus its wager.
    pub human_net: i64,
}

/// Settles the pot.
///
/// The side with more points takes the whole pot, on equal points each side
/// takes back its own wager and the difference between the wagers is not
/// redistributed.
pub fn settle(
    human_points: u32,
    opponent_points: u32,
    human_bet: Chips,
    opponent_bet: Chips,
) -> Settlement {
    let pot = human_bet + opponent_bet;
    let (winner, human_payout, opponent_payout) = if human_points > opponent_points {
        (Some(Side::Human), pot, Chips::ZERO)
    } else if opponent_points > human_points {
        (Some(Side::Opponent), Chips::ZERO, pot)
    } else {
        (None, human_bet, opponent_bet)
    };

    Settlement {
        winner,
        human_payout,
        opponent_payout,
        human_net: human_payout.delta(human_bet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::poker::Card;

    fn new_board(front: &str, mid: &str, back: &str) -> BoardEvaluation {
        let mut board = Board::default();
        for (kind, row) in RowKind::ALL.into_iter().zip([front, mid, back]) {
            for card in row.split_whitespace() {
                let card = card.parse::<Card>().unwrap();
                board.place_first_empty(kind, card).unwrap();
            }
        }
        board.evaluate()
    }

    fn strong() -> BoardEvaluation {
        new_board("QH QD 2C", "KH KD KC 5S 8C", "AH AD AC AS TH")
    }

    fn weak() -> BoardEvaluation {
        new_board("3H 4D 6C", "2D 2S 7H 9S JC", "3C 3S 5H 5D 9D")
    }

    fn fouled() -> BoardEvaluation {
        new_board("KS KC 4C", "6D 7D 9C TC JD", "2H 4H 6H 8H TD")
    }

    #[test]
    fn scoop() {
        let score = score_round(&strong(), &weak());
        assert!(!score.human_fouled && !score.opponent_fouled);
        assert_eq!(score.human.front + score.human.mid + score.human.back, 3);
        assert_eq!(score.human.scoop, SCOOP_BONUS);
        assert_eq!(score.human.total, 6);
        assert_eq!(score.opponent.total, 0);
        assert_eq!(score.outcomes.human_winners(), [true, true, true]);

        let score = score_round(&weak(), &strong());
        assert_eq!(score.human.total, 0);
        assert_eq!(score.opponent.total, 6);
        assert_eq!(score.outcomes.get(RowKind::Back), RowOutcome::Opponent);
    }

    #[test]
    fn single_foul() {
        let bad = fouled();
        assert!(bad.is_foul());

        let score = score_round(&bad, &weak());
        assert!(score.human_fouled);
        assert!(!score.opponent_fouled);
        assert_eq!(score.human.total, 0);
        assert_eq!(score.opponent.total, FOUL_POINTS);
        assert_eq!(score.outcomes, RowOutcomes::default());

        let score = score_round(&strong(), &bad);
        assert_eq!(score.human.total, FOUL_POINTS);
        assert_eq!(score.opponent.total, 0);
    }

    #[test]
    fn double_foul() {
        let score = score_round(&fouled(), &fouled());
        assert!(score.human_fouled && score.opponent_fouled);
        assert_eq!(score.human.total, 0);
        assert_eq!(score.opponent.total, 0);
    }

    #[test]
    fn equal_boards_tie() {
        let score = score_round(&weak(), &weak());
        assert_eq!(score.human.total, 0);
        assert_eq!(score.opponent.total, 0);
        assert_eq!(score.outcomes.human_winners(), [false, false, false]);
        assert_eq!(score.outcomes.get(RowKind::Mid), RowOutcome::Tie);
    }

    #[test]
    fn split_rows() {
        // Human wins front and back, opponent wins the middle.
        let human = new_board("QH QD 2C", "KH KD 4C 5S 8C", "AH AD AC 6S 6H");
        let opponent = new_board("JH JD 2D", "TH TD TC 5D 8D", "9H 9D 9C 7S 7H");

        let score = score_round(&human, &opponent);
        assert_eq!(score.outcomes.human_winners(), [true, false, true]);
        assert_eq!(score.human.total, 2);
        assert_eq!(score.human.scoop, 0);
        assert_eq!(score.opponent.total, 1);
        assert_eq!(score.opponent.mid, 1);
    }

    #[test]
    fn winner_takes_pot() {
        let settlement = settle(3, 1, Chips::new(100), Chips::new(80));
        assert_eq!(settlement.winner, Some(Side::Human));
        assert_eq!(settlement.human_payout, Chips::new(180));
        assert_eq!(settlement.opponent_payout, Chips::ZERO);
        assert_eq!(settlement.human_net, 80);

        let settlement = settle(0, 6, Chips::new(100), Chips::new(80));
        assert_eq!(settlement.winner, Some(Side::Opponent));
        assert_eq!(settlement.human_payout, Chips::ZERO);
        assert_eq!(settlement.opponent_payout, Chips::new(180));
        assert_eq!(settlement.human_net, -100);
    }

    #[test]
    fn push_returns_own_bets() {
        let settlement = settle(1, 1, Chips::new(100), Chips::new(35));
        assert_eq!(settlement.winner, None);
        assert_eq!(settlement.human_payout, Chips::new(100));
        assert_eq!(settlement.opponent_payout, Chips::new(35));
        assert_eq!(settlement.human_net, 0);
    }
}
