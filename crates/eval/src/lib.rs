// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A hand is ranked by its
//! [HandRank] category and a tie-break key of card ranks, so two hands compare
//! equal only when they have the same strength.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use holdem_eval::*;
//! let board = parse_cards("Ah Kh Qh 7c 2d").unwrap();
//! let mut hand = parse_cards("Jh Th").unwrap();
//! hand.extend_from_slice(&board);
//!
//! let v1 = HandValue::eval(&board).unwrap();
//! let v2 = HandValue::eval(&hand).unwrap();
//! assert_eq!(v1.rank(), HandRank::HighCard);
//! assert_eq!(v2.rank(), HandRank::RoyalFlush);
//! assert!(v2 > v1);
//! ```
//!
//! The [sim] module uses the evaluator to estimate a hand equity by sampling
//! random boards and opponents hands with a caller provided random generator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};

pub mod sim;
pub use sim::{SimError, SimResult};

// Reexport cards types.
pub use holdem_cards::{
    Card, Deck, DeckError, HoleCards, ParseCardError, Rank, Suit, parse_cards,
};
