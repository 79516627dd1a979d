// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Row hand evaluator.
//!
//! Rows hold at most 5 cards, so instead of lookup tables the evaluator groups
//! the cards by rank and checks categories from the strongest down. The front
//! row never makes straights or flushes.
//!
//! Tie-break values use positional weighting over card ranks so that two
//! evaluations of the same category compare without looking at the cards again.

mod category;
mod hand;

pub use category::HandCategory;
pub use hand::{HandEvaluation, evaluate};
