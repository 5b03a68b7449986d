use crate::{tiles_len, MAX_TYPES};
use derive_more::{Display, Error};

/// Describes who decides the moves of a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayerKind {
    /// Moves come from outside the engine.
    Human,
    /// Moves come from [the move search](crate::GameState::computer_play).
    Computer,
}

/// The dimensions of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GameConfig {
    /// The number of distinct shapes, which is also the number of distinct colors.
    pub num_types: usize,
    /// The number of identical copies of each [tile](crate::Tile) in the bag.
    pub copies: usize,
    /// The number of [tiles](crate::Tile) each player holds when the bag allows it.
    pub tiles_per_player: usize,
}

/// Describes the reason why [a game](crate::GameState::init_state) could not be created.
#[derive(Debug, Display, Error, Clone, Eq, PartialEq, Hash)]
pub enum InitError {
    /// Attempting to create a game with more than [MAX_TYPES] shapes or colors.
    #[display("{num_types} types requested but at most {MAX_TYPES} are supported")]
    TooManyTypes {
        /// The requested number of types.
        num_types: usize,
    },
    /// Attempting to create a game with no shapes or colors.
    #[display("at least one type is required")]
    NoTypes,
    /// Attempting to create a game with no copies of each tile.
    #[display("at least one copy of each tile is required")]
    NoCopies,
    /// Attempting to create a game with no players.
    #[display("at least one player is required")]
    EmptyPlayers,
    /// Attempting to create a game where names and kinds describe different players.
    #[display("{names} player names given for {kinds} player kinds")]
    MismatchedPlayers {
        /// The number of player names.
        names: usize,
        /// The number of player kinds.
        kinds: usize,
    },
    /// Attempting to create a game with more tiles than can be counted.
    #[display("{num_types} types with {copies} copies of each tile do not fit in a bag")]
    TooManyTiles {
        /// The requested number of types.
        num_types: usize,
        /// The requested number of copies of each tile.
        copies: usize,
    },
    /// Attempting to deal more tiles than the bag holds.
    #[display("{requested_tiles} tiles requested for racks but the bag holds {tiles_in_bag}")]
    NotEnoughTiles {
        /// The number of tiles requested for the racks.
        requested_tiles: usize,
        /// The number of tiles in the bag.
        tiles_in_bag: usize,
    },
}

impl GameConfig {
    /// Checks the dimensions of a game with `players` players, where players hold
    /// `num_types` [tiles](crate::Tile) each.
    ///
    /// # Errors
    ///
    /// * [InitError::TooManyTypes] when `num_types` is greater than [MAX_TYPES]
    /// * [InitError::NoTypes] when `num_types` is `0`
    /// * [InitError::NoCopies] when `copies` is `0`
    /// * [InitError::EmptyPlayers] when `players` is `0`
    /// * [InitError::TooManyTiles] when the number of [tiles](crate::Tile) overflows a `usize`
    /// * [InitError::NotEnoughTiles] when the racks need more tiles than the bag holds
    pub fn new(num_types: usize, copies: usize, players: usize) -> Result<GameConfig, InitError> {
        if num_types > MAX_TYPES {
            return Err(InitError::TooManyTypes { num_types });
        }
        if num_types == 0 {
            return Err(InitError::NoTypes);
        }
        if copies == 0 {
            return Err(InitError::NoCopies);
        }
        if players == 0 {
            return Err(InitError::EmptyPlayers);
        }
        let Some(tiles_in_bag) = tiles_len(num_types).checked_mul(copies) else {
            return Err(InitError::TooManyTiles { num_types, copies });
        };

        let config = GameConfig {
            num_types,
            copies,
            tiles_per_player: num_types,
        };
        let requested_tiles = players.saturating_mul(config.tiles_per_player);
        if requested_tiles > tiles_in_bag {
            return Err(InitError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag,
            });
        }

        Ok(config)
    }

    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) in the game, `num_types² * copies`.
    #[inline]
    pub fn total_tiles(&self) -> usize {
        tiles_len(self.num_types).saturating_mul(self.copies)
    }

    /// # Returns
    ///
    /// The points scored by a line of exactly `num_types` [tiles](crate::Tile).
    #[inline]
    pub fn full_line_points(&self) -> usize {
        2 * self.num_types
    }
}
