// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte-Carlo equity simulation.
//!
//! Each trial removes the known cards from a deck, shuffles it with the given
//! random generator, completes the board and deals the opponents cards, and
//! compares the evaluated hands. Using a seeded generator makes a simulation
//! reproducible:
//!
//! ```
//! # use holdem_eval::{*, sim::*};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let hero: HoleCards = "Ah Ad".parse().unwrap();
//! let r1 = simulate_hand(hero, &[], 1, 500, &mut StdRng::seed_from_u64(1)).unwrap();
//! let r2 = simulate_hand(hero, &[], 1, 500, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(r1, r2);
//! assert!(r1.equity() > 0.7);
//! ```
use log::debug;
use rand::prelude::*;
use std::{cmp::Ordering, panic, thread};
use thiserror::Error;

use holdem_cards::{Card, Deck, DeckError, HoleCards};

use crate::{EvalError, HandValue};

/// Number of cards on a complete board.
const BOARD_SIZE: usize = 5;

/// A player hole cards plus a complete board.
const HAND_SIZE: usize = 7;

/// Simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The board has more than five cards.
    #[error("the board has {0} cards, at most 5 are allowed")]
    BoardTooLarge(usize),
    /// A known card is used more than once.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    /// There must be at least one opponent.
    #[error("at least one opponent is required")]
    NoOpponents,
    /// The deck cannot deal cards for this many opponents.
    #[error("not enough cards left to deal {0} opponents")]
    TooManyOpponents(usize),
    /// Parallel simulations need at least one task.
    #[error("at least one task is required")]
    NoTasks,
    /// Deck error.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Outcome counts of a simulation from one player point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimResult {
    /// Number of trials won.
    pub wins: u64,
    /// Number of trials tied with the best opponent.
    pub ties: u64,
    /// Number of trials lost.
    pub losses: u64,
    /// Total number of trials.
    pub total: u64,
}

impl SimResult {
    /// The fraction of trials won.
    pub fn win_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.wins as f64 / self.total as f64
        }
    }

    /// The expected share of the pot, ties count for half a win.
    pub fn equity(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.wins as f64 + self.ties as f64 / 2.0) / self.total as f64
        }
    }

    /// Adds the counts of another result to this result.
    pub fn merge(&mut self, other: &SimResult) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        self.total += other.total;
    }

    fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }

        self.total += 1;
    }
}

/// Simulates two known hands against each other, returns the results for the
/// hero and the villain.
pub fn simulate_heads_up<R: Rng + ?Sized>(
    hero: HoleCards,
    villain: HoleCards,
    board: &[Card],
    iterations: usize,
    rng: &mut R,
) -> Result<(SimResult, SimResult), SimError> {
    let mut known = hero.cards().to_vec();
    known.extend_from_slice(&villain.cards());
    let deck = deck_without(&known, board)?;

    let mut hero_result = SimResult::default();
    let mut villain_result = SimResult::default();

    let mut hero_hand = [hero.cards()[0]; HAND_SIZE];
    let mut villain_hand = [villain.cards()[0]; HAND_SIZE];
    hero_hand[..2].copy_from_slice(&hero.cards());
    villain_hand[..2].copy_from_slice(&villain.cards());
    hero_hand[2..2 + board.len()].copy_from_slice(board);
    villain_hand[2..2 + board.len()].copy_from_slice(board);

    for _ in 0..iterations {
        let mut deck = deck.clone();
        deck.shuffle(rng);

        for pos in (2 + board.len())..HAND_SIZE {
            let card = deck.deal()?;
            hero_hand[pos] = card;
            villain_hand[pos] = card;
        }

        let hero_value = HandValue::eval(&hero_hand)?;
        let villain_value = HandValue::eval(&villain_hand)?;
        hero_result.record(hero_value.cmp(&villain_value));
        villain_result.record(villain_value.cmp(&hero_value));
    }

    debug!(
        "Simulated {hero} vs {villain}: {:.3} / {:.3}",
        hero_result.equity(),
        villain_result.equity()
    );

    Ok((hero_result, villain_result))
}

/// Simulates a hand against `opponents` random hands.
///
/// A trial is lost if any opponent has a better hand, it is a tie if no
/// opponent is better but at least one has the same hand value.
pub fn simulate_hand<R: Rng + ?Sized>(
    hero: HoleCards,
    board: &[Card],
    opponents: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<SimResult, SimError> {
    let deck = opponents_deck(hero, board, opponents)?;
    let result = run_trials(hero, board, &deck, opponents, iterations, rng)?;

    debug!(
        "Simulated {hero} against {opponents} opponents: {:.3}",
        result.equity()
    );

    Ok(result)
}

/// Runs [simulate_hand] on `tasks` threads.
///
/// Each task uses its own deck and a generator seeded with `seed` and the
/// task id, so the same seed and number of tasks give the same result.
pub fn par_simulate_hand(
    tasks: usize,
    seed: u64,
    hero: HoleCards,
    board: &[Card],
    opponents: usize,
    iterations: usize,
) -> Result<SimResult, SimError> {
    if tasks == 0 {
        return Err(SimError::NoTasks);
    }

    let deck = opponents_deck(hero, board, opponents)?;

    let results = thread::scope(|s| {
        let handles = (0..tasks)
            .map(|task_id| {
                // Spread the remainder on the first tasks.
                let task_iterations = iterations / tasks + usize::from(task_id < iterations % tasks);
                let deck = &deck;
                s.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(task_id as u64));
                    run_trials(hero, board, deck, opponents, task_iterations, &mut rng)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    let mut total = SimResult::default();
    for result in results {
        total.merge(&result?);
    }

    Ok(total)
}

/// Validates a simulation against opponents and returns the deck to sample from.
fn opponents_deck(hero: HoleCards, board: &[Card], opponents: usize) -> Result<Deck, SimError> {
    if opponents == 0 {
        return Err(SimError::NoOpponents);
    }

    let deck = deck_without(&hero.cards(), board)?;
    let needed = opponents * 2 + (BOARD_SIZE - board.len());
    if needed > deck.count() {
        return Err(SimError::TooManyOpponents(opponents));
    }

    Ok(deck)
}

/// Returns a deck without the known cards.
fn deck_without(hole: &[Card], board: &[Card]) -> Result<Deck, SimError> {
    if board.len() > BOARD_SIZE {
        return Err(SimError::BoardTooLarge(board.len()));
    }

    let mut deck = Deck::default();
    for &card in hole.iter().chain(board) {
        if !deck.remove(card) {
            return Err(SimError::DuplicateCard(card));
        }
    }

    Ok(deck)
}

fn run_trials<R: Rng + ?Sized>(
    hero: HoleCards,
    board: &[Card],
    deck: &Deck,
    opponents: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<SimResult, SimError> {
    let mut result = SimResult::default();
    let mut hand = [hero.cards()[0]; HAND_SIZE];
    hand[2..2 + board.len()].copy_from_slice(board);

    for _ in 0..iterations {
        let mut deck = deck.clone();
        deck.shuffle(rng);

        let opponents_cards = deck.deal_n(opponents * 2)?;
        for pos in (2 + board.len())..HAND_SIZE {
            hand[pos] = deck.deal()?;
        }

        hand[..2].copy_from_slice(&hero.cards());
        let hero_value = HandValue::eval(&hand)?;

        let mut outcome = Ordering::Greater;
        for cards in opponents_cards.chunks_exact(2) {
            hand[..2].copy_from_slice(cards);
            match hero_value.cmp(&HandValue::eval(&hand)?) {
                Ordering::Less => {
                    outcome = Ordering::Less;
                    break;
                }
                Ordering::Equal => outcome = Ordering::Equal,
                Ordering::Greater => {}
            }
        }

        result.record(outcome);
    }

    Ok(result)
}
