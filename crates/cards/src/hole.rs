// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hole cards.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, ParseCardError, Rank, parse_cards};

/// The two private cards dealt to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    /// Creates hole cards from two cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self([c1, c2])
    }

    /// The two cards in dealing order.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// Both cards have the same rank.
    pub fn is_pocket_pair(&self) -> bool {
        self.0[0].rank() == self.0[1].rank()
    }

    /// Both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.0[0].suit() == self.0[1].suit()
    }

    /// The cards have adjacent ranks, an Ace connects with a Two.
    pub fn is_connector(&self) -> bool {
        let (high, low) = self.high_low();
        high.value() - low.value() == 1 || (high == Rank::Ace && low == Rank::Two)
    }

    /// The starting hand class, like `AA`, `AKs` or `T9o`.
    pub fn label(&self) -> String {
        let (high, low) = self.high_low();
        if self.is_pocket_pair() {
            format!("{high}{low}")
        } else if self.is_suited() {
            format!("{high}{low}s")
        } else {
            format!("{high}{low}o")
        }
    }

    fn high_low(&self) -> (Rank, Rank) {
        let (r1, r2) = (self.0[0].rank(), self.0[1].rank());
        if r1 >= r2 { (r1, r2) } else { (r2, r1) }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

impl FromStr for HoleCards {
    type Err = ParseCardError;

    /// Parses two whitespace separated cards like `"Ah Kd"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cards(s)?.as_slice() {
            &[c1, c2] if c1 == c2 => Err(ParseCardError::Duplicate(c1)),
            &[c1, c2] => Ok(HoleCards::new(c1, c2)),
            cards => Err(ParseCardError::CardsCount {
                expected: 2,
                found: cards.len(),
            }),
        }
    }
}
