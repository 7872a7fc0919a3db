// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Deck errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Tried to deal more cards than the deck holds.
    #[error("cannot deal {requested} cards from a deck with {remaining} cards")]
    Exhausted {
        /// The number of cards requested.
        requested: usize,
        /// The number of cards left in the deck.
        remaining: usize,
    },
}

/// A cards Deck.
///
/// The deck starts with the 52 cards ordered by suit and rank, cards are
/// dealt from the top and a card can only be dealt once.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck shuffled with the given random generator.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Deals `k` cards from the top of the deck.
    ///
    /// The cards are returned in dealing order, if there are fewer than `k`
    /// cards in the deck the deck is left untouched.
    pub fn deal_n(&mut self, k: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if k > remaining {
            return Err(DeckError::Exhausted {
                requested: k,
                remaining,
            });
        }

        let mut cards = self.cards.split_off(remaining - k);
        cards.reverse();
        Ok(cards)
    }

    /// Removes a card from the deck, returns false if the card is not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|c| c == &card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Puts back all the 52 cards in order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck, the last card is the top of the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
