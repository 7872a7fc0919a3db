// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Self play command.
use anyhow::Result;
use clap::{Args, value_parser};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

use holdem_table::{
    Action, Chips, Game, GameConfig, Payoff, PlayerStatus, Street, Table, TableError,
};

static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Mike", "Olivia",
];

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 3, value_parser = value_parser!(u8).range(2..=9))]
    players: u8,
    /// Maximum number of hands to play.
    #[clap(long, short = 'n', default_value_t = 10)]
    hands: usize,
    /// The game seed.
    #[clap(long, short, default_value_t = 0)]
    seed: u64,
    /// The small blind amount.
    #[clap(long, default_value_t = 25)]
    small_blind: u32,
    /// The big blind amount.
    #[clap(long, default_value_t = 50)]
    big_blind: u32,
    /// The players starting chips.
    #[clap(long, short, default_value_t = 1_000)]
    chips: u32,
}

/// A player strategy.
pub trait Strategy {
    /// Returns the action for the player at `seat`.
    fn execute(&mut self, table: &Table, seat: usize) -> Action;
}

/// Calls or checks, raises preflop with a pair and sometimes folds.
#[derive(Debug)]
pub struct AlwaysCallOrCheck {
    rng: StdRng,
}

impl AlwaysCallOrCheck {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for AlwaysCallOrCheck {
    fn execute(&mut self, table: &Table, seat: usize) -> Action {
        let Some(player) = table.player(seat) else {
            return Action::Fold;
        };

        // Some randomness.
        let p = self.rng.random::<f64>();
        let can_check = player.bet >= table.current_bet();

        // Raise an unraised pot preflop with a pair.
        if player.hole_cards.is_some_and(|h| h.is_pocket_pair())
            && table.street() == Street::Preflop
            && table.current_bet() == table.big_blind()
            && p > 0.2
        {
            return Action::Raise(table.current_bet() * 3);
        }

        if p < 0.1 && !can_check {
            Action::Fold
        } else if can_check {
            Action::Check
        } else {
            Action::Call
        }
    }
}

/// Plays a hand to completion and moves the button.
pub fn play_hand<S: Strategy>(
    game: &mut Game,
    strategy: &mut S,
) -> Result<Vec<Payoff>, TableError> {
    game.play_hand()?;

    let table = game.table_mut();
    while !table.is_hand_complete() {
        betting_round(table, strategy)?;

        if table.contesting() > 1 {
            table.advance_street()?;
        }
    }

    let payoffs = table.award_pot()?;
    table.next_dealer();

    Ok(payoffs)
}

/// Asks each player to act until all the active players matched the bet.
fn betting_round<S: Strategy>(table: &mut Table, strategy: &mut S) -> Result<(), TableError> {
    let Some(mut seat) = table.first_to_act() else {
        return Ok(());
    };

    // Players that still have to act, everybody acts again after a raise.
    let mut to_act = count_active(table, None);

    while to_act > 0 && !table.is_hand_complete() {
        let bet = table.current_bet();
        let action = strategy.execute(table, seat);

        if !table.process_action(seat, action)? {
            let can_check = table.player(seat).is_some_and(|p| p.bet >= bet);
            let fallback = if can_check { Action::Check } else { Action::Call };
            table.process_action(seat, fallback)?;
        }

        to_act = if table.current_bet() > bet {
            count_active(table, Some(seat))
        } else {
            to_act - 1
        };

        match table.next_active_seat(seat) {
            Some(next) => seat = next,
            None => break,
        }
    }

    Ok(())
}

fn count_active(table: &Table, skip: Option<usize>) -> usize {
    table
        .players()
        .iter()
        .enumerate()
        .filter(|&(idx, p)| Some(idx) != skip && p.status == PlayerStatus::Active)
        .count()
}

pub fn run(args: PlayArgs) -> Result<()> {
    let config = GameConfig {
        small_blind: Chips::new(args.small_blind),
        big_blind: Chips::new(args.big_blind),
        starting_chips: Chips::new(args.chips),
        max_players: NICKNAMES.len(),
    };

    let mut game = Game::with_seed(config, args.seed)?;
    for name in NICKNAMES.iter().take(args.players as usize) {
        game.add_player(name)?;
    }

    let mut strategy = AlwaysCallOrCheck::new(args.seed);

    for hand in 1..=args.hands {
        let with_chips = game
            .table()
            .players()
            .iter()
            .filter(|p| p.chips > Chips::ZERO)
            .count();

        if with_chips < 2 {
            info!("Game over after {} hands", hand - 1);
            break;
        }

        let payoffs = play_hand(&mut game, &mut strategy)?;
        let board = game
            .table()
            .board()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        info!(
            "Hand {hand} board [{}] paid {} to {} players",
            board.join(" "),
            payoffs.iter().map(|p| p.chips).sum::<Chips>(),
            payoffs.len()
        );
    }

    for player in game.table().players() {
        println!("{:<8} {:>10}", player.name, player.chips.to_string());
    }

    Ok(())
}
