// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Open face poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use ofc_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards from the front of the deck:
//!
//! ```
//! # use ofc_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let hand = deck.deal(5).unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardId, Deck, ParseCardError, Rank, Suit};
