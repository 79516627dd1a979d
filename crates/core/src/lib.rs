// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Open face poker game engine.
//!
//! A two players open face Chinese poker match against an automated opponent
//! with a wager on every round. The [Engine](engine::Engine) drives the rounds
//! phases, a presentation layer submits the human actions and renders the
//! [Snapshot](engine::Snapshot) of the match.
//!
//! ```
//! # use ofc_core::{engine::{Engine, Phase}, poker::Chips};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut engine = Engine::with_rng(Default::default(), StdRng::seed_from_u64(1));
//! engine.begin().unwrap();
//! engine.commit_bet(Chips::new(100)).unwrap();
//! engine.lock_bets_and_deal().unwrap();
//! assert_eq!(engine.phase(), Phase::Placement);
//! assert_eq!(engine.human().hand.len(), 5);
//! assert_eq!(engine.opponent().board.placed(), 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod placement;
pub mod player;
pub mod poker;
pub mod scoring;
pub mod staking;
