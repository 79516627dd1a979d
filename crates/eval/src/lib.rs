// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Open face poker row evaluator.
//!
//! Evaluates the cards in an open face board row, from an empty row up to a
//! complete 5 cards row, into a [HandEvaluation] that orders by hand category
//! and then by a tie-break value:
//!
//! ```
//! # use ofc_eval::*;
//! let cards = |s: &str| {
//!     s.split_whitespace()
//!         .map(|c| c.parse::<Card>().unwrap())
//!         .collect::<Vec<_>>()
//! };
//!
//! let trips = evaluate(&cards("7H 7D 7C"), true);
//! let two_pair = evaluate(&cards("AH AD KC KS 2H"), false);
//! assert_eq!(trips.category(), HandCategory::ThreeOfAKind);
//! assert!(trips > two_pair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandCategory, HandEvaluation, evaluate};

// Reexport cards types.
pub use ofc_cards::{Card, CardId, Deck, Rank, Suit};
