// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker table.
//!
//! A [Table] seats the players and runs one hand at a time: it deals the
//! cards, collects the blinds, validates the players actions, deals the
//! board street by street and pays the pot to the winners.
//!
//! ```
//! # use holdem_table::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut table = Table::new(Chips::new(5), Chips::new(10));
//! table.add_player(Player::new("Alice", Chips::new(100))).unwrap();
//! table.add_player(Player::new("Bob", Chips::new(100))).unwrap();
//!
//! table.start_hand(&mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(table.pot(), Chips::new(15));
//!
//! // Checking against a bet is rejected and nothing changes.
//! let seat = table.first_to_act().unwrap();
//! assert_eq!(table.process_action(seat, Action::Check), Ok(false));
//! assert_eq!(table.process_action(seat, Action::Fold), Ok(true));
//!
//! assert!(table.is_hand_complete());
//! let payoffs = table.award_pot().unwrap();
//! assert_eq!(payoffs[0].chips, Chips::new(15));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod chips;
pub use chips::Chips;

pub mod game;
pub use game::{Game, GameConfig};

pub mod table;
pub use table::{Action, Payoff, Player, PlayerStatus, Street, Table, TableError};

// Reexport cards and evaluator types.
pub use holdem_eval::{Card, Deck, HandRank, HandValue, HoleCards};
