// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A game with a fixed configuration and a seeded random generator.
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{Chips, Player, Table, TableError};

/// Game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The small blind amount.
    pub small_blind: Chips,
    /// The big blind amount.
    pub big_blind: Chips,
    /// The chips each player starts with.
    pub starting_chips: Chips,
    /// The number of seats at the table.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips::new(25),
            big_blind: Chips::new(50),
            starting_chips: Chips::new(1_000),
            max_players: 9,
        }
    }
}

impl GameConfig {
    /// Checks the configuration values.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.small_blind == Chips::ZERO {
            return Err(TableError::InvalidConfig("small blind must be positive"));
        }

        if self.big_blind < self.small_blind {
            return Err(TableError::InvalidConfig(
                "big blind must not be less than the small blind",
            ));
        }

        if self.starting_chips == Chips::ZERO {
            return Err(TableError::InvalidConfig("starting chips must be positive"));
        }

        if self.max_players < 2 {
            return Err(TableError::InvalidConfig("a table needs at least 2 seats"));
        }

        if self.max_players > Table::MAX_SEATS {
            return Err(TableError::InvalidConfig(
                "not enough cards in the deck for all the seats",
            ));
        }

        Ok(())
    }
}

/// A game at a single table.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    table: Table,
    rng: StdRng,
}

impl Game {
    /// Creates a game with a generator seeded with `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, TableError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a game with user initialized randomness.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, TableError> {
        config.validate()?;

        Ok(Self {
            config,
            table: Table::new(config.small_blind, config.big_blind),
            rng,
        })
    }

    /// Seats a new player with the starting chips, returns the seat.
    pub fn add_player(&mut self, name: &str) -> Result<usize, TableError> {
        let seated = self.table.players().len();
        if seated >= self.config.max_players {
            return Err(TableError::TableFull(seated));
        }

        self.table
            .add_player(Player::new(name, self.config.starting_chips))
    }

    /// Starts a new hand at the table.
    pub fn play_hand(&mut self) -> Result<(), TableError> {
        self.table.start_hand(&mut self.rng)
    }

    /// The game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The game table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The mutable game table.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerStatus, Street};

    #[test]
    fn config_validation() {
        assert!(GameConfig::default().validate().is_ok());

        let invalid = [
            GameConfig {
                small_blind: Chips::ZERO,
                ..Default::default()
            },
            GameConfig {
                big_blind: Chips::new(10),
                ..Default::default()
            },
            GameConfig {
                starting_chips: Chips::ZERO,
                ..Default::default()
            },
            GameConfig {
                max_players: 1,
                ..Default::default()
            },
            GameConfig {
                max_players: Table::MAX_SEATS + 1,
                ..Default::default()
            },
        ];

        for config in invalid {
            assert!(matches!(
                config.validate(),
                Err(TableError::InvalidConfig(_))
            ));
            assert!(Game::with_seed(config, 1).is_err());
        }

        // The largest table plays a hand to the showdown.
        let config = GameConfig {
            max_players: Table::MAX_SEATS,
            ..Default::default()
        };

        let mut game = Game::with_seed(config, 8).unwrap();
        for idx in 0..Table::MAX_SEATS {
            game.add_player(&format!("P{idx}")).unwrap();
        }
        assert_eq!(game.add_player("Extra"), Err(TableError::TableFull(22)));

        game.play_hand().unwrap();
        let table = game.table_mut();
        while table.advance_street().is_ok() {}
        assert_eq!(table.street(), Street::Showdown);
        assert!(table.award_pot().is_ok());
    }

    #[test]
    fn add_players() {
        let config = GameConfig {
            max_players: 2,
            ..Default::default()
        };

        let mut game = Game::with_seed(config, 1).unwrap();
        assert_eq!(game.play_hand(), Err(TableError::NotEnoughPlayers(0)));

        assert_eq!(game.add_player("Alice"), Ok(0));
        assert_eq!(
            game.add_player("Alice"),
            Err(TableError::DuplicatePlayer("Alice".to_string()))
        );
        assert_eq!(game.add_player("Bob"), Ok(1));
        assert_eq!(game.add_player("Carol"), Err(TableError::TableFull(2)));

        let player = game.table().player(1).unwrap();
        assert_eq!(player.chips, Chips::new(1_000));
        assert_eq!(player.status, PlayerStatus::Active);
    }

    #[test]
    fn play_hand() {
        let mut game = Game::with_seed(GameConfig::default(), 42).unwrap();
        for name in ["Alice", "Bob", "Carol"] {
            game.add_player(name).unwrap();
        }

        game.play_hand().unwrap();
        let table = game.table_mut();
        assert_eq!(table.street(), Street::Preflop);
        assert_eq!(table.pot(), Chips::new(75));

        while let Ok(street) = table.advance_street() {
            if street == Street::Showdown {
                break;
            }
        }

        assert_eq!(table.board().len(), 5);
        let payoffs = table.award_pot().unwrap();
        assert!(!payoffs.is_empty());
        assert_eq!(table.total_chips(), Chips::new(3_000));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let board = |seed| {
            let mut game = Game::with_seed(GameConfig::default(), seed).unwrap();
            game.add_player("Alice").unwrap();
            game.add_player("Bob").unwrap();
            game.play_hand().unwrap();
            for _ in 0..3 {
                game.table_mut().advance_street().unwrap();
            }
            game.table().board().to_vec()
        };

        assert_eq!(board(9), board(9));
        assert_ne!(board(9), board(10));
    }
}
