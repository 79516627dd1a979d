// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Row evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use ofc_cards::{Card, Rank};

use super::HandCategory;

/// Base for positional weighting of ranks, larger than the highest rank value.
const BASE: u32 = 15;

/// The evaluation of the cards in a row.
///
/// Evaluations compare by category and then by tie-break value, the name is
/// only a label for the UI and is ignored by comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandEvaluation {
    category: HandCategory,
    value: u32,
    name: String,
}

impl HandEvaluation {
    /// The evaluation of an empty row, lower than any other evaluation.
    pub fn empty() -> Self {
        Self::new(HandCategory::HighCard, 0, "Empty")
    }

    fn new(category: HandCategory, value: u32, name: impl Into<String>) -> Self {
        Self {
            category,
            value,
            name: name.into(),
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The tie-break value used to compare hands of the same category.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// A human readable name for this hand.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for HandEvaluation {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandEvaluation {}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then(self.value.cmp(&other.value))
    }
}

impl fmt::Display for HandEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A group of cards with the same rank.
#[derive(Debug, Clone, Copy)]
struct Group {
    rank: Rank,
    count: u8,
}

/// Evaluates the cards in a row.
///
/// The `cards` slice holds up to 5 cards in any order, evaluating the same cards
/// always gives the same result. When `is_front_row` is true straights and
/// flushes are not considered.
pub fn evaluate(cards: &[Card], is_front_row: bool) -> HandEvaluation {
    if cards.is_empty() {
        return HandEvaluation::empty();
    }

    // Ranks from the highest.
    let mut ranks = cards.iter().map(Card::rank).collect::<Vec<_>>();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 13];
    for rank in &ranks {
        counts[*rank as usize] += 1;
    }

    // Distinct ranks from the highest.
    let distinct = Rank::ranks()
        .rev()
        .filter(|r| counts[*r as usize] > 0)
        .collect::<Vec<_>>();

    // Most frequent first then highest rank.
    let mut groups = distinct
        .iter()
        .map(|&rank| Group {
            rank,
            count: counts[rank as usize],
        })
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.count.cmp(&a.count).then(b.rank.cmp(&a.rank)));

    let same_suit = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_flush = !is_front_row && same_suit && cards.len() >= 5;
    let straight_high = if !is_front_row && distinct.len() >= 5 {
        straight_high(&distinct)
    } else {
        None
    };

    let first = groups[0];
    let second = groups.get(1).copied();
    let kickers = |skip: &[Rank]| {
        ranks
            .iter()
            .copied()
            .filter(|r| !skip.contains(r))
            .collect::<Vec<_>>()
    };

    if let (true, Some(high)) = (is_flush, straight_high) {
        return if high == Rank::Ace {
            HandEvaluation::new(
                HandCategory::RoyalFlush,
                Rank::Ace.value().into(),
                "Royal Flush",
            )
        } else {
            HandEvaluation::new(
                HandCategory::StraightFlush,
                high.value().into(),
                "Straight Flush",
            )
        };
    }

    if first.count == 4 {
        let kicker = second.map(|g| u32::from(g.rank.value())).unwrap_or(0);
        let value = u32::from(first.rank.value()) * 100 + kicker;
        return HandEvaluation::new(HandCategory::FourOfAKind, value, "Four of a Kind");
    }

    if let Some(pair) = second.filter(|g| first.count == 3 && g.count >= 2) {
        let value = u32::from(first.rank.value()) * 100 + u32::from(pair.rank.value());
        return HandEvaluation::new(HandCategory::FullHouse, value, "Full House");
    }

    if is_flush {
        return HandEvaluation::new(HandCategory::Flush, positional(&ranks, 4), "Flush");
    }

    if let Some(high) = straight_high {
        return HandEvaluation::new(HandCategory::Straight, high.value().into(), "Straight");
    }

    if first.count == 3 {
        let kickers = kickers(&[first.rank]);
        let value = u32::from(first.rank.value()) * 100_000
            + rank_value(kickers.first()) * 100
            + rank_value(kickers.get(1));
        return HandEvaluation::new(HandCategory::ThreeOfAKind, value, "Three of a Kind");
    }

    if let Some(low_pair) = second.filter(|g| first.count == 2 && g.count == 2) {
        let kickers = kickers(&[first.rank, low_pair.rank]);
        let value = u32::from(first.rank.value()) * 10_000
            + u32::from(low_pair.rank.value()) * 100
            + rank_value(kickers.first());
        return HandEvaluation::new(HandCategory::TwoPair, value, "Two Pair");
    }

    if first.count == 2 {
        let value = u32::from(first.rank.value()) * 100_000 + positional(&kickers(&[first.rank]), 3);
        let name = format!("Pair of {}", first.rank.plural());
        return HandEvaluation::new(HandCategory::Pair, value, name);
    }

    let is_flush_draw = !is_front_row && same_suit && (3..5).contains(&cards.len());
    let name = if is_flush_draw {
        "Flush Draw".to_string()
    } else {
        format!("{} High", ranks[0])
    };

    HandEvaluation::new(HandCategory::HighCard, positional(&ranks, 4), name)
}

/// Finds the highest straight in a list of distinct ranks sorted from the
/// highest, the wheel A-2-3-4-5 is a five high straight.
fn straight_high(distinct: &[Rank]) -> Option<Rank> {
    let high = distinct
        .windows(5)
        .find(|w| w[0].value() - w[4].value() == 4)
        .map(|w| w[0]);

    let is_wheel = || {
        [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce]
            .iter()
            .all(|r| distinct.contains(r))
    };

    high.or_else(|| is_wheel().then_some(Rank::Five))
}

/// Weights ranks sorted from the highest with decreasing powers of [BASE]
/// starting from `BASE^top`.
fn positional(ranks: &[Rank], top: u32) -> u32 {
    ranks
        .iter()
        .take(top as usize + 1)
        .enumerate()
        .map(|(i, r)| u32::from(r.value()) * BASE.pow(top - i as u32))
        .sum()
}

fn rank_value(rank: Option<&Rank>) -> u32 {
    rank.map(|r| u32::from(r.value())).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandEvaluation {
        evaluate(&cards(s), false)
    }

    fn eval_front(s: &str) -> HandEvaluation {
        evaluate(&cards(s), true)
    }

    #[test]
    fn empty_row() {
        let ev = evaluate(&[], false);
        assert_eq!(ev.category(), HandCategory::HighCard);
        assert_eq!(ev.value(), 0);
        assert_eq!(ev.name(), "Empty");

        let ev = evaluate(&[], true);
        assert_eq!(ev.value(), 0);
        assert!(eval_front("2H") > ev);
    }

    #[test]
    fn categories() {
        let hands = [
            ("AH KD 9C 7S 3H", HandCategory::HighCard, "A High"),
            ("6H 6D KC 7S 3H", HandCategory::Pair, "Pair of Sixes"),
            ("6H 6D KC KS 3H", HandCategory::TwoPair, "Two Pair"),
            ("6H 6D 6C KS 3H", HandCategory::ThreeOfAKind, "Three of a Kind"),
            ("6H 7D 8C 9S TH", HandCategory::Straight, "Straight"),
            ("2H 7H 9H JH KH", HandCategory::Flush, "Flush"),
            ("6H 6D 6C KS KH", HandCategory::FullHouse, "Full House"),
            ("6H 6D 6C 6S KH", HandCategory::FourOfAKind, "Four of a Kind"),
            ("6H 7H 8H 9H TH", HandCategory::StraightFlush, "Straight Flush"),
            ("TS JS QS KS AS", HandCategory::RoyalFlush, "Royal Flush"),
        ];

        for (hand, category, name) in hands {
            let ev = eval(hand);
            assert_eq!(ev.category(), category, "{hand}");
            assert_eq!(ev.name(), name, "{hand}");
        }
    }

    #[test]
    fn category_order_beats_ranks() {
        // The strongest hand of each category loses to the weakest hand of the
        // next category.
        let pairs = [
            ("AH KD QC JS 9H", "2H 2D 3C 4S 5H"),
            ("AH AD KC QS JH", "2H 2D 3C 3S 4H"),
            ("AH AD KC KS QH", "2H 2D 2C 3S 4H"),
            ("AH AD AC KS QH", "AH 2D 3C 4S 5H"),
            ("TH JD QC KS AH", "2H 3H 4H 5H 7H"),
            ("AH KH QH JH 9H", "2H 2D 2C 3S 3H"),
            ("AH AD AC KS KH", "2H 2D 2C 2S 3H"),
            ("AH AD AC AS KH", "AH 2H 3H 4H 5H"),
            ("9H TH JH QH KH", "TD JD QD KD AD"),
        ];

        for (strong, weak) in pairs {
            assert!(eval(weak) > eval(strong), "{weak} > {strong}");
        }

        let ordered = HandCategory::categories()
            .zip(HandCategory::categories().skip(1))
            .all(|(lower, higher)| lower < higher);
        assert!(ordered);
    }

    #[test]
    fn wheel_straight() {
        let wheel = eval("AH 2D 3C 4S 5H");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.value(), 5);

        let six_high = eval("2D 3C 4S 5H 6H");
        assert_eq!(six_high.value(), 6);
        assert!(six_high > wheel);

        let broadway = eval("TD JC QS KH AH");
        assert_eq!(broadway.value(), 14);

        let steel_wheel = eval("AS 2S 3S 4S 5S");
        assert_eq!(steel_wheel.category(), HandCategory::StraightFlush);
        assert_eq!(steel_wheel.value(), 5);

        // Not a straight.
        assert_eq!(eval("AH KD 2C 3S 4H").category(), HandCategory::HighCard);
    }

    #[test]
    fn front_row_restriction() {
        let ev = eval_front("QH KH AH");
        assert_eq!(ev.category(), HandCategory::HighCard);
        assert_eq!(ev.name(), "A High");

        let ev = eval_front("2S 3S 4S");
        assert_eq!(ev.category(), HandCategory::HighCard);

        // Even if miscalled with 5 cards.
        let ev = eval_front("6H 7H 8H 9H TH");
        assert_eq!(ev.category(), HandCategory::HighCard);

        assert_eq!(eval_front("QH QD 4S").category(), HandCategory::Pair);
        assert_eq!(
            eval_front("QH QD QS").category(),
            HandCategory::ThreeOfAKind
        );
    }

    #[test]
    fn flush_draw_label() {
        assert_eq!(eval("2H 7H 9H").name(), "Flush Draw");
        assert_eq!(eval("2H 7H 9H JH").name(), "Flush Draw");
        assert_eq!(eval("2H 7H 9D").name(), "9 High");
        assert_eq!(eval_front("2H 7H 9H").name(), "9 High");

        // Draw labeling does not change scoring.
        assert_eq!(eval("2H 7H 9H"), eval("2H 7D 9H"));
    }

    #[test]
    fn order_independence() {
        let mut rng = StdRng::seed_from_u64(101);
        let hands = [
            "AH KD 9C 7S 3H",
            "6H 6D KC KS 3H",
            "AH 2D 3C 4S 5H",
            "2H 7H 9H JH KH",
            "6H 6D 6C KS KH",
            "QH QD 4S",
        ];

        for hand in hands {
            let mut cards = cards(hand);
            let ev = evaluate(&cards, cards.len() == 3);
            for _ in 0..10 {
                cards.shuffle(&mut rng);
                let shuffled = evaluate(&cards, cards.len() == 3);
                assert_eq!(shuffled, ev);
                assert_eq!(shuffled.value(), ev.value());
                assert_eq!(shuffled.name(), ev.name());
            }
        }
    }

    #[test]
    fn tie_breaks() {
        // Kickers decide between equal pairs.
        assert!(eval("AH AD KC 7S 3H") > eval("AH AD QC JS 9H"));
        assert!(eval("AH AD KC 7S 4H") > eval("AS AC KD 7C 3D"));
        // Pair rank before kickers.
        assert!(eval("KH KD 2C 3S 4H") > eval("QH QD AC KS JH"));
        // Two pair compares high pair, low pair, kicker.
        assert!(eval("KH KD 2C 2S 3H") > eval("QH QD JC JS AH"));
        assert!(eval("KH KD 5C 5S 3H") > eval("KS KC 4C 4S AH"));
        assert!(eval("KH KD 5C 5S 3H") > eval("KS KC 5D 5H 2H"));
        // Full house compares trips first.
        assert!(eval("3H 3D 3C 2S 2H") > eval("2C 2D 2H AS AH"));
        // Flush compares cards from the highest.
        assert!(eval("AH QH 9H 5H 3H") > eval("AD QD 9D 5D 2D"));
        // Same ranks, different suits tie.
        assert_eq!(eval("AH KD 9C 7S 3H"), eval("AS KH 9D 7C 3C"));
    }

    #[test]
    fn front_and_back_compare() {
        // A front row high card is compared position by position with a 5 cards
        // high card.
        assert!(eval_front("AH KD QC") > eval("AS KH JD 9C 8C"));
        assert!(eval_front("AH KD QC") < eval("AS KH QD 9C 8C"));

        // Front pair against a back pair.
        assert!(eval_front("QH QD AC") > eval("JS JH AD KC QC"));
        assert!(eval_front("QH QD 2C") < eval("QS QC 3D 4C 5C"));

        // Front trips against back trips.
        assert!(eval_front("5H 5D 5C") < eval("6S 6H 6D 2C 3C"));
    }
}
