use crate::{Coordinate, Tile, HAND_CAPACITY, PLAYER_CAPACITY};
use smallvec::SmallVec;
use std::collections::HashMap;

/// A single placement of a [tile](Tile) at a row and a column on the board.
///
/// Moves order by row, then column, then [tile](Tile), which is the order of
/// [placements](crate::GameState::tile_placements).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    /// The row of the placement.
    pub row: isize,
    /// The column of the placement.
    pub col: isize,
    /// The [tile](Tile) being placed.
    pub tile: Tile,
}

impl Move {
    /// # Returns
    ///
    /// A new [Move] placing `tile` at `row` and `col`.
    #[inline]
    pub fn new(row: isize, col: isize, tile: Tile) -> Move {
        Move { row, col, tile }
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) of the placement.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        (self.row, self.col)
    }
}

/// An ordered sequence of [moves](Move) in placement order.
///
/// # See Also
///
/// * [GameState::tentative_turn](crate::GameState::tentative_turn)
/// * [HistoryEntry::Play]
pub type Turn = Vec<Move>;

/// One committed turn in the game history.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum HistoryEntry {
    /// [Moves](Move) placed on the board, in placement order.
    Play(Turn),
    /// [Tiles](Tile) returned to the bag.
    Exchange(Vec<Tile>),
}

impl HistoryEntry {
    /// # Returns
    ///
    /// The placed [moves](Move) of a [play](HistoryEntry::Play), or nothing for
    /// an [exchange](HistoryEntry::Exchange).
    #[inline]
    pub fn moves(&self) -> &[Move] {
        match self {
            HistoryEntry::Play(moves) => moves,
            HistoryEntry::Exchange(_) => &[],
        }
    }
}

/// The decision returned by [the move search](crate::GameState::computer_play).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Decision {
    /// Place these [moves](Move) in order and end a scoring turn.
    Play(Turn),
    /// Return these [tiles](Tile) to the bag and end an exchange turn.
    Exchange(Vec<Tile>),
}

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// # See Also
///
/// * [Player::draw_tiles](crate::Player::draw_tiles)
pub type Bag = Vec<Tile>;
/// A map of [coordinates](Coordinate) to [tiles](Tile) on the board.
///
/// # See Also
///
/// * [Board::grid](crate::Board::grid)
pub type Grid = HashMap<Coordinate, Tile>;
/// A multiset of [tiles](Tile) held by one player.
///
/// # See Also
///
/// * [HAND_CAPACITY]
/// * [Player::tiles](crate::Player::tiles)
pub type Rack = SmallVec<[Tile; HAND_CAPACITY]>;
/// A vector of players in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState::players](crate::GameState::players)
pub type Players<P> = SmallVec<[P; PLAYER_CAPACITY]>;
