use crate::{Board, Coordinate, ORIGIN};
use map_macro::btree_set;
use std::collections::BTreeSet;
use tracing::trace;

/// The set of [coordinates](Coordinate) where a placement is legal given only committed
/// [tiles](crate::Tile). Iterates in row-major order.
///
/// The frontier describes the board at the start of a turn and is only advanced when
/// placements are committed or committed placements are removed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Frontier {
    /// Open [coordinates](Coordinate) ordered by row, then column.
    coordinates: BTreeSet<Coordinate>,
}

impl Default for Frontier {
    fn default() -> Frontier {
        Frontier::new()
    }
}

impl Frontier {
    /// # Returns
    ///
    /// The frontier of an empty board, which only contains the [origin](ORIGIN).
    pub fn new() -> Frontier {
        Frontier {
            coordinates: btree_set! { ORIGIN },
        }
    }

    /// Updates the frontier after the cell at `row` and `col` changed on `board`.
    ///
    /// When a [tile](crate::Tile) was committed there, the cell is no longer open. When
    /// a committed [tile](crate::Tile) was removed (`is_undo`), the cell is open again if
    /// it is still [playable](Board::is_playable). Afterwards every cell
    /// [classified](Board::playable_neighbors) around the change is added when playable
    /// and removed when unplayable. The cost depends on the number of classified cells and
    /// not on the size of the board.
    ///
    /// `board` must hold committed [tiles](crate::Tile) only.
    pub fn advance(&mut self, board: &impl Board, row: isize, col: isize, is_undo: bool) {
        if is_undo && board.is_playable(row, col) {
            self.coordinates.insert((row, col));
        } else {
            self.coordinates.remove(&(row, col));
        }

        let neighbors = board.playable_neighbors(row, col);
        for coordinate in &neighbors.unplayable {
            self.coordinates.remove(coordinate);
        }
        self.coordinates.extend(neighbors.playable.iter().copied());

        trace!(
            row,
            col,
            is_undo,
            opened = neighbors.playable.len(),
            closed = neighbors.unplayable.len(),
            "advanced frontier"
        );
    }

    /// Restores the frontier of an empty board.
    pub fn reset(&mut self) {
        self.coordinates = btree_set! { ORIGIN };
    }

    /// # Returns
    ///
    /// Whether `coordinate` is open.
    #[inline]
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.coordinates.contains(coordinate)
    }

    /// # Returns
    ///
    /// The open [coordinates](Coordinate) in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates.iter().copied()
    }

    /// # Returns
    ///
    /// The number of open [coordinates](Coordinate).
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// # Returns
    ///
    /// Whether no [coordinate](Coordinate) is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// A mutable reference to the open [coordinates](Coordinate).
    #[cfg(test)]
    pub fn mut_coordinates(&mut self) -> &mut BTreeSet<Coordinate> {
        &mut self.coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tile_of, GridBoard};
    use itertools::Itertools;

    #[test]
    fn new_frontier_origin() {
        let frontier = Frontier::new();

        assert_eq!(vec![ORIGIN], frontier.iter().collect_vec());
    }

    #[test]
    fn advance_first_tile() {
        let mut board = GridBoard::new(6, 3);
        let mut frontier = Frontier::new();
        assert!(board.place_tile_validate(0, 0, 0));

        frontier.advance(&board, 0, 0, false);

        assert_eq!(
            vec![(-1, 0), (0, -1), (0, 1), (1, 0)],
            frontier.iter().collect_vec()
        );
    }

    #[test]
    fn advance_closes_full_line() {
        let mut board = GridBoard::new(6, 3);
        let mut frontier = Frontier::new();
        for col in 0..6 {
            assert!(board.place_tile_validate(0, col, tile_of(0, col as usize, 6)));
        }
        for col in 0..6 {
            frontier.advance(&board, 0, col, false);
        }

        assert!(!frontier.contains(&(0, -1)));
        assert!(!frontier.contains(&(0, 6)));
        for col in 0..6 {
            assert!(frontier.contains(&(-1, col)));
            assert!(frontier.contains(&(1, col)));
            assert!(!frontier.contains(&(0, col)));
        }
        assert_eq!(12, frontier.len());
    }

    #[test]
    fn advance_no_duplicates() {
        let mut board = GridBoard::new(6, 3);
        let mut frontier = Frontier::new();
        assert!(board.place_tile_validate(0, 0, 0));

        frontier.advance(&board, 0, 0, false);
        frontier.advance(&board, 0, 0, false);

        assert_eq!(4, frontier.len());
    }

    #[test]
    fn advance_undo_reopens() {
        let mut board = GridBoard::new(6, 3);
        let mut frontier = Frontier::new();
        assert!(board.place_tile_validate(0, 0, 0));
        frontier.advance(&board, 0, 0, false);
        assert!(board.place_tile_validate(0, 1, 1));
        frontier.advance(&board, 0, 1, false);

        assert_eq!(Some(1), board.lift_tile(0, 1));
        frontier.advance(&board, 0, 1, true);

        assert!(frontier.contains(&(0, 1)));
        // the cells around the removed tile are no longer connected
        assert!(!frontier.contains(&(-1, 1)));
        assert!(!frontier.contains(&(1, 1)));
        assert!(!frontier.contains(&(0, 2)));
    }

    #[test]
    fn advance_undo_isolated_cell_stays_closed() {
        let mut board = GridBoard::new(6, 3);
        let mut frontier = Frontier::new();
        for col in 0..3 {
            assert!(board.place_tile_validate(0, col, col as usize));
        }
        for col in 0..3 {
            frontier.advance(&board, 0, col, false);
        }

        assert_eq!(Some(1), board.lift_tile(0, 1));
        frontier.advance(&board, 0, 1, true);
        assert_eq!(Some(2), board.lift_tile(0, 2));
        frontier.advance(&board, 0, 2, true);

        assert_eq!(
            vec![(-1, 0), (0, -1), (0, 1), (1, 0)],
            frontier.iter().collect_vec()
        );
    }

    #[test]
    fn reset_restores_origin() {
        let mut frontier = Frontier::new();
        frontier.mut_coordinates().extend([(4, 4), (5, 5)]);

        frontier.reset();

        assert_eq!(Frontier::new(), frontier);
    }
}
