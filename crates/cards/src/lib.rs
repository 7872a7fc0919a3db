// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "10d".parse().unwrap();
//! assert_eq!(td.to_string(), "Td");
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! a [HoleCards] type for a player private cards:
//!
//! ```
//! # use holdem_cards::HoleCards;
//! let hole: HoleCards = "Ah Kh".parse().unwrap();
//! assert!(hole.is_suited());
//! assert_eq!(hole.label(), "AKs");
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards with a caller provided
//! random generator, so that the same seed always deals the same cards:
//!
//! ```
//! # use holdem_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! assert_eq!(d1.deal_n(5).unwrap(), d2.deal_n(5).unwrap());
//! assert_eq!(d1.count(), Deck::SIZE - 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::{Deck, DeckError};

mod hole;
pub use hole::HoleCards;
