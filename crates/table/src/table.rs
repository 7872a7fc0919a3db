// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker table types.
//!
//! The table keeps the seated players across hands, the hand scoped state
//! (deck, board, pot, street bets) is reset by [Table::start_hand].
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use holdem_eval::{Card, Deck, DeckError, EvalError, HandValue};

use crate::Chips;

mod hand;

mod player;
pub use player::{Player, PlayerStatus};
use player::Seats;

/// Table errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A player with the same name is already seated.
    #[error("player {0} is already seated")]
    DuplicatePlayer(String),
    /// All the seats are taken.
    #[error("table is full with {0} players")]
    TableFull(usize),
    /// There is no player at the given seat.
    #[error("no player at seat {0}")]
    NoSuchSeat(usize),
    /// The player at the given seat is not allowed to act.
    #[error("player at seat {0} cannot act")]
    PlayerNotActive(usize),
    /// A hand needs at least two players with chips.
    #[error("need at least 2 players with chips, found {0}")]
    NotEnoughPlayers(usize),
    /// The operation is not allowed while a hand is being played.
    #[error("a hand is in progress")]
    HandInProgress,
    /// The operation needs a hand that is still being played.
    #[error("no hand in progress")]
    HandOver,
    /// All players folded or are out.
    #[error("no contesting players")]
    NoContestingPlayers,
    /// The game configuration is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Dealing error.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Hand evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A betting round, or the final showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no board.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
    /// Hands are compared.
    Showdown,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        };

        write!(f, "{s}")
    }
}

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Give up the pot.
    Fold,
    /// Pass without betting, only when the bet is matched.
    Check,
    /// Match the current bet.
    Call,
    /// Raise the bet level to the given total amount.
    Raise(Chips),
    /// Bet all the chips behind.
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Raise(chips) => write!(f, "raise {chips}"),
            Action::AllIn => write!(f, "all-in"),
        }
    }
}

/// The chips a winner got from the pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payoff {
    /// The winner seat.
    pub seat: usize,
    /// The winner name.
    pub name: String,
    /// The chips won.
    pub chips: Chips,
    /// The winning hand, none if all the other players folded.
    pub hand: Option<HandValue>,
}

/// A poker table.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Seats,
    deck: Deck,
    board: Vec<Card>,
    pot: Chips,
    street: Street,
    dealer: usize,
    big_blind_seat: usize,
    current_bet: Chips,
    contesting: usize,
    small_blind: Chips,
    big_blind: Chips,
    in_hand: bool,
}

impl Table {
    /// The most players a deck can deal a hand to, two hole cards each plus
    /// five board cards and three burn cards.
    pub const MAX_SEATS: usize = (Deck::SIZE - 8) / 2;

    /// Creates an empty table with the given blinds.
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            seats: Seats::default(),
            deck: Deck::default(),
            board: Vec::with_capacity(5),
            pot: Chips::ZERO,
            street: Street::Preflop,
            dealer: 0,
            big_blind_seat: 0,
            current_bet: Chips::ZERO,
            contesting: 0,
            small_blind,
            big_blind,
            in_hand: false,
        }
    }

    /// Seats a player in the next free seat and returns the seat.
    ///
    /// Players can only join between hands and names must be unique.
    pub fn add_player(&mut self, player: Player) -> Result<usize, TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }

        let seated = self.seats.count();
        if seated >= Self::MAX_SEATS {
            return Err(TableError::TableFull(seated));
        }

        if self.seats.position(&player.name).is_some() {
            return Err(TableError::DuplicatePlayer(player.name));
        }

        Ok(self.seats.join(player))
    }

    /// Removes a player from the table, returns false if there is no such player.
    ///
    /// A player that leaves during a hand gives up the pot, the chips already
    /// bet stay in the pot.
    pub fn remove_player(&mut self, name: &str) -> bool {
        let Some((seat, player)) = self.seats.leave(name) else {
            return false;
        };

        if self.in_hand && player.status.is_contesting() {
            self.contesting = self.contesting.saturating_sub(1);
        }

        // Keep the button on the same player.
        if seat < self.dealer {
            self.dealer -= 1;
        }

        if self.dealer >= self.seats.count() {
            self.dealer = 0;
        }

        // Preflop action starts after the big blind, if the big blind leaves
        // step back so that the next player is not skipped.
        if seat < self.big_blind_seat {
            self.big_blind_seat -= 1;
        } else if seat == self.big_blind_seat {
            self.big_blind_seat = match seat {
                0 => self.seats.count().saturating_sub(1),
                _ => seat - 1,
            };
        }

        true
    }

    /// Adds chips to a seated player stack between hands.
    pub fn add_chips(&mut self, seat: usize, chips: Chips) -> Result<(), TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }

        let player = self.seats.get_mut(seat).ok_or(TableError::NoSuchSeat(seat))?;
        player.award(chips);
        Ok(())
    }

    /// The player at the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.seats.get(seat)
    }

    /// All players in seating order.
    pub fn players(&self) -> &[Player] {
        self.seats.as_slice()
    }

    /// The seat of the player with the given name.
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.seats.position(name)
    }

    /// The first seat after `seat` with a player that can act, wrapping around.
    pub fn next_active_seat(&self, seat: usize) -> Option<usize> {
        self.seats.next_active(seat)
    }

    /// The community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The chips in the pot.
    pub fn pot(&self) -> Chips {
        self.pot
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The dealer seat.
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// The bet level players must match in this street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The number of players competing for the pot.
    pub fn contesting(&self) -> usize {
        self.contesting
    }

    /// The small blind amount.
    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    /// The big blind amount.
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    /// The cards left in this hand deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The total chips at the table, stacks plus pot.
    pub fn total_chips(&self) -> Chips {
        self.seats.iter().map(|p| p.chips).sum::<Chips>() + self.pot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn new_table(stacks: &[u32]) -> Table {
        let mut table = Table::new(Chips::new(5), Chips::new(10));
        for (idx, &chips) in stacks.iter().enumerate() {
            let player = Player::new(format!("P{idx}"), Chips::new(chips));
            assert_eq!(table.add_player(player), Ok(idx));
        }

        table
    }

    #[test]
    fn seat_management() {
        let mut table = new_table(&[100, 100, 100]);
        assert_eq!(table.players().len(), 3);
        assert_eq!(table.seat_of("P1"), Some(1));
        assert_eq!(table.player(2).map(|p| p.name.as_str()), Some("P2"));
        assert!(table.player(3).is_none());

        assert_eq!(
            table.add_player(Player::new("P1", Chips::new(10))),
            Err(TableError::DuplicatePlayer("P1".to_string()))
        );

        assert!(table.remove_player("P1"));
        assert!(!table.remove_player("P1"));
        assert_eq!(table.seat_of("P2"), Some(1));
        assert_eq!(table.total_chips(), Chips::new(200));
    }

    #[test]
    fn seats_are_capped_by_the_deck() {
        let stacks = vec![100; Table::MAX_SEATS];
        let mut table = new_table(&stacks);
        assert_eq!(Table::MAX_SEATS, 22);
        assert_eq!(
            table.add_player(Player::new("Extra", Chips::new(100))),
            Err(TableError::TableFull(22))
        );

        // A full table deals the whole hand.
        table.start_hand(&mut StdRng::seed_from_u64(3)).unwrap();
        while table.advance_street().is_ok() {}
        assert_eq!(table.street(), Street::Showdown);
        assert_eq!(table.board().len(), 5);
        assert!(table.deck().is_empty());
        assert!(table.award_pot().is_ok());
    }

    #[test]
    fn big_blind_leaving_keeps_action_order() {
        let mut table = new_table(&[100, 100, 100, 100]);
        let mut rng = StdRng::seed_from_u64(1);
        table.start_hand(&mut rng).unwrap();
        assert_eq!(table.first_to_act(), Some(3));

        // The big blind at seat 2 leaves, P3 moves to seat 2 and still acts first.
        assert!(table.remove_player("P2"));
        assert_eq!(table.seat_of("P3"), Some(2));
        assert_eq!(table.first_to_act(), Some(2));

        // Wrap around when the big blind is the first seat.
        let mut table = new_table(&[100, 100, 100]);
        table.next_dealer();
        table.start_hand(&mut rng).unwrap();
        assert_eq!(table.player(0).map(|p| p.bet), Some(Chips::new(10)));
        assert_eq!(table.first_to_act(), Some(1));

        assert!(table.remove_player("P0"));
        assert_eq!(table.first_to_act(), Some(0));
        assert_eq!(table.player(0).map(|p| p.name.as_str()), Some("P1"));
    }

    #[test]
    fn add_chips() {
        let mut table = new_table(&[100, 0]);
        assert_eq!(table.player(1).map(|p| p.status), Some(PlayerStatus::Out));

        table.add_chips(1, Chips::new(50)).unwrap();
        assert_eq!(table.player(1).map(|p| p.chips), Some(Chips::new(50)));
        assert_eq!(
            table.add_chips(2, Chips::new(50)),
            Err(TableError::NoSuchSeat(2))
        );
    }

    #[test]
    fn street_order() {
        assert!(Street::Preflop < Street::Flop);
        assert!(Street::Flop < Street::Turn);
        assert!(Street::Turn < Street::River);
        assert!(Street::River < Street::Showdown);
        assert_eq!(Action::Raise(Chips::new(1_500)).to_string(), "raise 1,500");
    }
}
