use crate::{color_of, shape_of, Bag, Move, PlayerKind, Rack, Tile, HAND_CAPACITY};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Owns a rack of [tiles](Tile) and a score, and answers rack-only line queries for
/// [the game state](crate::GameState).
pub trait Player {
    /// # Returns
    ///
    /// The display name of the player.
    fn name(&self) -> &str;

    /// # Returns
    ///
    /// Who decides the moves of the player.
    fn kind(&self) -> PlayerKind;

    /// # Returns
    ///
    /// The [tiles](Tile) held by the player.
    fn tiles(&self) -> &Rack;

    /// A mutable reference to the [tiles](Tile) held by the player.
    fn tiles_mut(&mut self) -> &mut Rack;

    /// # Returns
    ///
    /// The cumulative score of the player.
    fn score(&self) -> usize;

    /// A mutable reference to the cumulative score of the player.
    fn score_mut(&mut self) -> &mut usize;

    /// Moves up to `n` [tiles](Tile) from the end of `bag` into the rack. When the bag holds
    /// fewer than `n` [tiles](Tile), every remaining [tile](Tile) is drawn.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    fn draw_tiles(&mut self, bag: &mut Bag, n: usize) -> usize {
        let start = bag.len().saturating_sub(n);
        let drawn = bag.len() - start;
        self.tiles_mut().extend(bag.drain(start..));
        drawn
    }

    /// Removes one instance of `tile` from the rack.
    ///
    /// # Returns
    ///
    /// Whether the rack held `tile`.
    fn remove_tile(&mut self, tile: Tile) -> bool {
        let tiles = self.tiles_mut();
        match tiles.iter().position(|&held| held == tile) {
            Some(index) => {
                tiles.remove(index);
                true
            }
            None => false,
        }
    }

    /// # Returns
    ///
    /// The rack without the [tiles](Tile) placed by `turn`, removing one instance per
    /// [move](Move).
    fn turn_tiles(&self, turn: &[Move]) -> Rack {
        let mut tiles = self.tiles().clone();
        for placed in turn {
            if let Some(index) = tiles.iter().position(|&held| held == placed.tile) {
                tiles.remove(index);
            }
        }
        tiles
    }

    /// Finds every group of unique [tiles](Tile) in the rack that share a [color](color_of)
    /// or share a [shape](shape_of). Color groups come first, then shape groups, each
    /// in ascending order of the shared attribute with [tiles](Tile) in ascending order.
    /// Identical groups are reported once.
    ///
    /// # Returns
    ///
    /// The lines that could be built from the rack alone.
    fn all_lines_in_rack(&self, num_types: usize) -> Vec<Vec<Tile>> {
        rack_lines(self.tiles(), num_types)
    }

    /// # Returns
    ///
    /// The first of the longest [lines in the rack](Player::all_lines_in_rack), or an empty
    /// line for an empty rack.
    fn longest_line(&self, num_types: usize) -> Vec<Tile> {
        self.all_lines_in_rack(num_types)
            .into_iter()
            .fold(Vec::new(), |longest, line| {
                if line.len() > longest.len() {
                    line
                } else {
                    longest
                }
            })
    }
}

/// Groups unique `tiles` by [color](color_of) and by [shape](shape_of).
///
/// # See Also
///
/// * [Player::all_lines_in_rack]
fn rack_lines(tiles: &[Tile], num_types: usize) -> Vec<Vec<Tile>> {
    let group_by = |attribute: fn(Tile, usize) -> usize| {
        tiles
            .iter()
            .copied()
            .unique()
            .fold(BTreeMap::<usize, Vec<Tile>>::new(), |mut groups, tile| {
                groups
                    .entry(attribute(tile, num_types))
                    .or_default()
                    .push(tile);
                groups
            })
            .into_values()
            .map(|mut line| {
                line.sort_unstable();
                line
            })
    };

    group_by(color_of)
        .chain(group_by(shape_of))
        .unique()
        .collect()
}

/// A [Player] holding a rack of [tiles](Tile) and a score.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RackPlayer {
    /// The display name of the player.
    name: String,
    /// Who decides the moves of the player.
    kind: PlayerKind,
    /// The [tiles](Tile) held by the player.
    tiles: Rack,
    /// The cumulative score of the player.
    score: usize,
}

impl RackPlayer {
    /// # Returns
    ///
    /// A new player with an empty rack and no points.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> RackPlayer {
        RackPlayer {
            name: name.into(),
            kind,
            tiles: Rack::with_capacity(HAND_CAPACITY),
            score: 0,
        }
    }
}

impl Player for RackPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        self.kind
    }

    fn tiles(&self) -> &Rack {
        &self.tiles
    }

    fn tiles_mut(&mut self) -> &mut Rack {
        &mut self.tiles
    }

    fn score(&self) -> usize {
        self.score
    }

    fn score_mut(&mut self) -> &mut usize {
        &mut self.score
    }
}
