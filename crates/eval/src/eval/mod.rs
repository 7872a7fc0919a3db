// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is classified into one of the ten [HandRank] categories
//! and gets a tie-break key with the ranks that decide between two hands of
//! the same category, for example the pair rank and the three kickers for a
//! one pair hand.
//!
//! Hands with more than five cards are evaluated by ranking every five cards
//! subset and keeping the best one, [HandValue::hand] returns the five cards
//! that make the best hand, useful for UIs to shows a winning hand.
mod value;
pub use value::{EvalError, HandRank, HandValue};
