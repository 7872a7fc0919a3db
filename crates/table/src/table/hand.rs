// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand state machine.
use log::{debug, info, warn};
use rand::Rng;

use holdem_eval::{Card, Deck, HandValue, HoleCards};

use super::{Action, Payoff, PlayerStatus, Street, Table, TableError};
use crate::Chips;

impl Table {
    /// Starts a new hand.
    ///
    /// Shuffles a new deck with the given generator, deals two cards to each
    /// player with chips and collects the blinds from the two players after
    /// the dealer.
    pub fn start_hand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }

        let with_chips = self.seats.count_with_chips();
        if with_chips < 2 {
            return Err(TableError::NotEnoughPlayers(with_chips));
        }

        if self.dealer >= self.seats.count() {
            self.dealer = 0;
        }

        self.deck = Deck::new_and_shuffled(rng);
        self.board.clear();
        self.pot = Chips::ZERO;
        self.street = Street::Preflop;
        self.current_bet = Chips::ZERO;

        self.seats.start_hand();
        self.contesting = self.seats.count_contesting();

        // Deal cards to each player.
        for player in self.seats.iter_mut() {
            if player.status == PlayerStatus::Active {
                let (c1, c2) = (self.deck.deal()?, self.deck.deal()?);
                player.hole_cards = Some(HoleCards::new(c1, c2));
            }
        }

        // Pay small and big blind.
        let not_enough = || TableError::NotEnoughPlayers(with_chips);
        let sb_seat = self.seats.next_active(self.dealer).ok_or_else(not_enough)?;
        let bb_seat = self.seats.next_active(sb_seat).ok_or_else(not_enough)?;

        if let Some(player) = self.seats.get_mut(sb_seat) {
            self.pot += player.place_bet(self.small_blind);
        }

        if let Some(player) = self.seats.get_mut(bb_seat) {
            self.pot += player.place_bet(self.big_blind);
        }

        self.big_blind_seat = bb_seat;
        self.current_bet = self.big_blind;
        self.in_hand = true;

        info!(
            "Hand started with {} players, dealer seat {} blinds {}/{}",
            self.contesting, self.dealer, self.small_blind, self.big_blind
        );

        Ok(())
    }

    /// The seat that opens the betting in the current street.
    ///
    /// Preflop this is the player after the big blind, after the flop the
    /// first active player after the dealer.
    pub fn first_to_act(&self) -> Option<usize> {
        if self.is_hand_complete() {
            return None;
        }

        match self.street {
            Street::Preflop => self.seats.next_active(self.big_blind_seat),
            _ => self.seats.next_active(self.dealer),
        }
    }

    /// Applies a player action.
    ///
    /// Returns `Ok(false)` if the action is not allowed in the current state,
    /// in that case nothing changes. Fails if the seat is empty, the player
    /// cannot act or the hand is complete.
    pub fn process_action(&mut self, seat: usize, action: Action) -> Result<bool, TableError> {
        if self.is_hand_complete() {
            return Err(TableError::HandOver);
        }

        let current_bet = self.current_bet;
        let player = self
            .seats
            .get_mut(seat)
            .ok_or(TableError::NoSuchSeat(seat))?;

        if player.status != PlayerStatus::Active {
            return Err(TableError::PlayerNotActive(seat));
        }

        match action {
            Action::Fold => {
                player.fold();
                self.contesting = self.contesting.saturating_sub(1);
            }
            Action::Check => {
                if player.bet < current_bet {
                    warn!(
                        "Player {} cannot check a bet of {}, bet {}",
                        player.name, current_bet, player.bet
                    );
                    return Ok(false);
                }
            }
            Action::Call => {
                self.pot += player.place_bet(current_bet - player.bet);
            }
            Action::Raise(amount) => {
                if amount <= current_bet || amount < current_bet * 2 || player.chips <= amount {
                    warn!(
                        "Player {} cannot raise to {}, bet {} chips {}",
                        player.name, amount, current_bet, player.chips
                    );
                    return Ok(false);
                }

                self.pot += player.place_bet(amount - player.bet);
                self.current_bet = amount;
            }
            Action::AllIn => {
                self.pot += player.place_bet(player.chips);
                if player.bet > current_bet {
                    self.current_bet = player.bet;
                }
            }
        }

        debug!(
            "Player {} {} on the {}, bet {} pot {}",
            player.name, action, self.street, player.bet, self.pot
        );

        Ok(true)
    }

    /// Moves the hand to the next street and returns it.
    ///
    /// Burns a card before dealing three cards on the flop and one card on
    /// the turn and on the river, the street bets are cleared.
    pub fn advance_street(&mut self) -> Result<Street, TableError> {
        if !self.in_hand {
            return Err(TableError::HandOver);
        }

        let (next, count) = match self.street {
            Street::Preflop => (Street::Flop, 3),
            Street::Flop => (Street::Turn, 1),
            Street::Turn => (Street::River, 1),
            Street::River => (Street::Showdown, 0),
            Street::Showdown => return Err(TableError::HandOver),
        };

        if count > 0 {
            // The first card is the burn card.
            let cards = self.deck.deal_n(count + 1)?;
            self.board.extend_from_slice(&cards[1..]);
        }

        self.street = next;
        self.current_bet = Chips::ZERO;
        self.seats.start_round();

        debug!("Dealt the {} board [{}]", next, CardsList(&self.board));

        Ok(next)
    }

    /// Checks if there is no more betting in this hand.
    pub fn is_hand_complete(&self) -> bool {
        !self.in_hand || self.contesting <= 1 || self.street == Street::Showdown
    }

    /// The seats of the players with the best hand in ascending order.
    pub fn determine_winners(&self) -> Result<Vec<usize>, TableError> {
        Ok(self.winners()?.into_iter().map(|(seat, _)| seat).collect())
    }

    /// Pays the pot to the winners and ends the hand.
    ///
    /// Tied winners split the pot, the odd chips go one each to the winners
    /// in seat order. Fails with [TableError::HandInProgress] while betting
    /// is still open.
    pub fn award_pot(&mut self) -> Result<Vec<Payoff>, TableError> {
        if !self.in_hand {
            return Err(TableError::HandOver);
        }

        // Betting must be over before the pot can be paid.
        if !self.is_hand_complete() {
            return Err(TableError::HandInProgress);
        }

        let winners = self.winners()?;

        let count = winners.len() as u32;
        let share = self.pot / count;
        let odd_chips = (self.pot % count).amount();

        let mut payoffs = Vec::with_capacity(winners.len());
        for (idx, (seat, hand)) in winners.into_iter().enumerate() {
            let chips = if (idx as u32) < odd_chips {
                share + Chips::new(1)
            } else {
                share
            };

            if let Some(player) = self.seats.get_mut(seat) {
                player.award(chips);

                match hand {
                    Some(hv) => info!("Player {} wins {} with {}", player.name, chips, hv),
                    None => info!("Player {} wins {}", player.name, chips),
                }

                payoffs.push(Payoff {
                    seat,
                    name: player.name.clone(),
                    chips,
                    hand,
                });
            }
        }

        self.pot = Chips::ZERO;
        self.in_hand = false;

        Ok(payoffs)
    }

    /// Moves the button to the next seat.
    pub fn next_dealer(&mut self) {
        let count = self.seats.count();
        if count > 0 {
            self.dealer = (self.dealer + 1) % count;
        }
    }

    fn winners(&self) -> Result<Vec<(usize, Option<HandValue>)>, TableError> {
        let contesting = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, p)| p.status.is_contesting())
            .collect::<Vec<_>>();

        match contesting.as_slice() {
            [] => Err(TableError::NoContestingPlayers),
            // Everybody else folded, no need to show the cards.
            [(seat, _)] => Ok(vec![(*seat, None)]),
            _ => {
                let hands = contesting
                    .into_iter()
                    .map(|(seat, p)| -> Result<_, TableError> {
                        Ok((seat, HandValue::eval(&p.all_cards(&self.board))?))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let best = hands
                    .iter()
                    .map(|(_, hv)| *hv)
                    .max()
                    .ok_or(TableError::NoContestingPlayers)?;

                Ok(hands
                    .into_iter()
                    .filter(|(_, hv)| *hv == best)
                    .map(|(seat, hv)| (seat, Some(hv)))
                    .collect())
            }
        }
    }
}

/// Formats a cards slice for logging.
struct CardsList<'a>(&'a [Card]);

impl std::fmt::Display for CardsList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
