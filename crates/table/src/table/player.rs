// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_eval::{Card, HoleCards};

use crate::Chips;

/// A player status in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// The player can act.
    Active,
    /// The player folded and gave up the pot.
    Folded,
    /// The player has no chips left behind but contests the pot.
    AllIn,
    /// The player has no chips and sits out of the hand.
    Out,
}

impl PlayerStatus {
    /// The player is still competing for the pot.
    pub fn is_contesting(&self) -> bool {
        matches!(self, PlayerStatus::Active | PlayerStatus::AllIn)
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Folded => "folded",
            PlayerStatus::AllIn => "all-in",
            PlayerStatus::Out => "out",
        };

        write!(f, "{s}")
    }
}

/// A table player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player name, unique at the table.
    pub name: String,
    /// This player chips behind.
    pub chips: Chips,
    /// The player bet amount in the current street.
    pub bet: Chips,
    /// The player status in the hand.
    pub status: PlayerStatus,
    /// This player private cards.
    pub hole_cards: Option<HoleCards>,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: Chips::ZERO,
            status: if chips > Chips::ZERO {
                PlayerStatus::Active
            } else {
                PlayerStatus::Out
            },
            hole_cards: None,
        }
    }

    /// Moves up to `amount` chips from the stack into the bet.
    ///
    /// A player that runs out of chips goes all in, returns the chips moved.
    pub fn place_bet(&mut self, amount: Chips) -> Chips {
        let moved = amount.min(self.chips);
        self.chips -= moved;
        self.bet += moved;

        if self.chips == Chips::ZERO {
            self.status = PlayerStatus::AllIn;
        }

        moved
    }

    /// Adds won chips to this player stack.
    pub fn award(&mut self, chips: Chips) {
        self.chips += chips;
    }

    /// Sets this player in fold state.
    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
        self.hole_cards = None;
    }

    /// The hole cards followed by the board cards.
    pub fn all_cards(&self, board: &[Card]) -> Vec<Card> {
        let mut cards = Vec::with_capacity(2 + board.len());
        if let Some(hole) = self.hole_cards {
            cards.extend_from_slice(&hole.cards());
        }

        cards.extend_from_slice(board);
        cards
    }

    /// Reset state for a new hand.
    fn start_hand(&mut self) {
        self.status = if self.chips > Chips::ZERO {
            PlayerStatus::Active
        } else {
            PlayerStatus::Out
        };
        self.bet = Chips::ZERO;
        self.hole_cards = None;
    }
}

/// The table players in seating order.
#[derive(Debug, Default, Clone)]
pub struct Seats {
    players: Vec<Player>,
}

impl Seats {
    /// Adds a player to the last seat.
    pub fn join(&mut self, player: Player) -> usize {
        self.players.push(player);
        self.players.len() - 1
    }

    /// Removes a player from the table, returns the seat it had.
    pub fn leave(&mut self, name: &str) -> Option<(usize, Player)> {
        let pos = self.position(name)?;
        Some((pos, self.players.remove(pos)))
    }

    /// The seat of the player with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    /// Returns total number of players.
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of players competing for the pot.
    pub fn count_contesting(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.status.is_contesting())
            .count()
    }

    /// Returns the number of player who have chips.
    pub fn count_with_chips(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.chips > Chips::ZERO)
            .count()
    }

    /// The first seat after `seat` with an active player, wrapping around.
    pub fn next_active(&self, seat: usize) -> Option<usize> {
        let count = self.players.len();
        (1..=count)
            .map(|offset| (seat + offset) % count)
            .find(|&idx| self.players[idx].status == PlayerStatus::Active)
    }

    /// The player at the given seat.
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// The mutable player at the given seat.
    pub fn get_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// All players in seating order.
    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    /// Returns an iterator to all players.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns a mutable iterator to all players.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Set state for a new hand.
    pub fn start_hand(&mut self) {
        self.players.iter_mut().for_each(Player::start_hand);
    }

    /// Clears the street bets.
    pub fn start_round(&mut self) {
        for player in &mut self.players {
            player.bet = Chips::ZERO;
        }
    }
}
