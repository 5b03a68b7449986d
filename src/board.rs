use crate::{
    adjacent_coordinates, color_of, max_dimension, shape_of, tiles, Coordinate, Grid, Tile, ORIGIN,
};
use itertools::Itertools;

/// The two lines through a cell on the board and the cells just beyond their ends.
///
/// # See Also
///
/// * [Board::lines_at]
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Lines {
    /// The contiguous run of [tiles](Tile) along the row, ordered by ascending column.
    pub row_line: Vec<Tile>,
    /// The contiguous run of [tiles](Tile) along the column, ordered by ascending row.
    pub col_line: Vec<Tile>,
    /// The first empty cells before and after `row_line`.
    pub row_bounds: Vec<Coordinate>,
    /// The first empty cells before and after `col_line`.
    pub col_bounds: Vec<Coordinate>,
}

/// Empty cells near a changed cell, partitioned by whether some [tile](Tile) could be legally
/// placed there.
///
/// # See Also
///
/// * [Board::playable_neighbors]
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Neighbors {
    /// Cells where some [tile](Tile) can be placed.
    pub playable: Vec<Coordinate>,
    /// Cells where no [tile](Tile) can be placed.
    pub unplayable: Vec<Coordinate>,
}

/// Owns the grid and answers line, adjacency and legality queries for
/// [the game state](crate::GameState).
///
/// The board holds every committed [tile](Tile) and every [tile](Tile) of the tentative turn.
pub trait Board {
    /// Places `tile` at `row` and `col` if the placement is legal.
    ///
    /// # Returns
    ///
    /// Whether the [tile](Tile) was placed. Nothing changes when `false` is returned.
    fn place_tile_validate(&mut self, row: isize, col: isize, tile: Tile) -> bool;

    /// Removes the [tile](Tile) at `row` and `col`, the inverse of
    /// [place_tile_validate](Board::place_tile_validate).
    ///
    /// # Returns
    ///
    /// The removed [tile](Tile) or [None] if the cell was empty.
    fn lift_tile(&mut self, row: isize, col: isize) -> Option<Tile>;

    /// # Returns
    ///
    /// The row and column lines through `row` and `col` together with their bounds.
    fn lines_at(&self, row: isize, col: isize) -> Lines;

    /// # Returns
    ///
    /// Whether every [tile](Tile) in `line` shares one attribute and no [tile](Tile) repeats.
    fn line_is_valid(&self, line: &[Tile]) -> bool;

    /// # Returns
    ///
    /// Whether some [tile](Tile) could be placed at `row` and `col`.
    fn is_playable(&self, row: isize, col: isize) -> bool;

    /// Classifies every empty cell whose lines or adjacency depend on the cell at
    /// `row` and `col`.
    fn playable_neighbors(&self, row: isize, col: isize) -> Neighbors;

    /// # Returns
    ///
    /// The [tile](Tile) at `row` and `col`, if any.
    fn tile_at(&self, row: isize, col: isize) -> Option<Tile>;

    /// # Returns
    ///
    /// A snapshot of the board for rendering.
    fn grid(&self) -> &Grid;

    /// # Returns
    ///
    /// The number of [tiles](Tile) on the board.
    fn len(&self) -> usize {
        self.grid().len()
    }

    /// # Returns
    ///
    /// Whether the board holds no [tiles](Tile).
    fn is_empty(&self) -> bool {
        self.grid().is_empty()
    }
}

/// Checks whether `line` is a legal line of [tiles](Tile) with `num_types` shapes and colors.
/// A line is legal when it holds at most one [tile](Tile), or when all of its [tiles](Tile)
/// are unique and either share a [color](color_of) or share a [shape](shape_of).
///
/// # See Also
///
/// * [Board::line_is_valid]
pub fn check_line(line: &[Tile], num_types: usize) -> bool {
    if line.len() <= 1 {
        return true;
    }
    if !line.iter().all_unique() {
        return false;
    }

    line.iter().map(|&tile| color_of(tile, num_types)).all_equal()
        || line.iter().map(|&tile| shape_of(tile, num_types)).all_equal()
}

/// A [Board] backed by a hash map of [coordinates](Coordinate) to [tiles](Tile).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GridBoard {
    /// The number of distinct shapes and colors.
    num_types: usize,
    /// The exclusive maximum absolute value of a component in a [coordinate](Coordinate).
    limit: isize,
    /// A map of [coordinates](Coordinate) to [tiles](Tile) on the board.
    grid: Grid,
}

impl GridBoard {
    /// # Returns
    ///
    /// An empty board for [tiles](Tile) with `num_types` shapes and colors and `copies`
    /// copies of each [tile](Tile).
    pub fn new(num_types: usize, copies: usize) -> GridBoard {
        GridBoard {
            num_types,
            limit: isize::try_from(max_dimension(num_types, copies)).unwrap_or(isize::MAX),
            grid: Grid::with_capacity(num_types.saturating_mul(num_types).saturating_mul(copies)),
        }
    }

    /// Whether both components of the [coordinate](Coordinate) lie inside the
    /// coordinate limit.
    fn in_bounds(&self, (row, col): Coordinate) -> bool {
        -self.limit < row && row < self.limit && -self.limit < col && col < self.limit
    }

    /// Walks from `start` (exclusive) by `step` while cells are occupied.
    ///
    /// # Returns
    ///
    /// The [tiles](Tile) walked over in walking order and the first empty cell.
    fn walk(&self, (row, col): Coordinate, (d_row, d_col): Coordinate) -> (Vec<Tile>, Coordinate) {
        let mut run = Vec::new();
        let mut cursor = (row + d_row, col + d_col);
        while let Some(&tile) = self.grid.get(&cursor) {
            run.push(tile);
            cursor = (cursor.0 + d_row, cursor.1 + d_col);
        }
        (run, cursor)
    }

    /// The line through `coordinate` along `step`, with `center` standing in for the
    /// [tile](Tile) at `coordinate`.
    fn line_through(
        &self,
        coordinate: Coordinate,
        (d_row, d_col): Coordinate,
        center: Option<Tile>,
    ) -> (Vec<Tile>, Vec<Coordinate>) {
        let (before, first_bound) = self.walk(coordinate, (-d_row, -d_col));
        let (after, last_bound) = self.walk(coordinate, (d_row, d_col));
        let line = before
            .into_iter()
            .rev()
            .chain(center)
            .chain(after)
            .collect();
        (line, vec![first_bound, last_bound])
    }

    /// Whether `tile` placed at the empty cell `coordinate` forms legal lines in both directions.
    fn fits(&self, coordinate: Coordinate, tile: Tile) -> bool {
        let (row_line, _) = self.line_through(coordinate, (0, 1), Some(tile));
        if !check_line(&row_line, self.num_types) {
            return false;
        }
        let (col_line, _) = self.line_through(coordinate, (1, 0), Some(tile));
        check_line(&col_line, self.num_types)
    }

    /// Whether some occupied cell is adjacent to `coordinate`.
    fn is_connected(&self, coordinate: Coordinate) -> bool {
        adjacent_coordinates(coordinate)
            .iter()
            .any(|adjacent| self.grid.contains_key(adjacent))
    }

    /// # Returns
    ///
    /// A mutable reference to the grid.
    #[cfg(test)]
    pub fn mut_grid(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Board for GridBoard {
    fn place_tile_validate(&mut self, row: isize, col: isize, tile: Tile) -> bool {
        let coordinate = (row, col);
        if tile >= self.num_types * self.num_types
            || !self.in_bounds(coordinate)
            || self.grid.contains_key(&coordinate)
            || (!self.grid.is_empty() && !self.is_connected(coordinate))
            || !self.fits(coordinate, tile)
        {
            return false;
        }

        self.grid.insert(coordinate, tile);
        true
    }

    fn lift_tile(&mut self, row: isize, col: isize) -> Option<Tile> {
        self.grid.remove(&(row, col))
    }

    fn lines_at(&self, row: isize, col: isize) -> Lines {
        let center = self.tile_at(row, col);
        let (row_line, row_bounds) = self.line_through((row, col), (0, 1), center);
        let (col_line, col_bounds) = self.line_through((row, col), (1, 0), center);
        Lines {
            row_line,
            col_line,
            row_bounds,
            col_bounds,
        }
    }

    fn line_is_valid(&self, line: &[Tile]) -> bool {
        check_line(line, self.num_types)
    }

    fn is_playable(&self, row: isize, col: isize) -> bool {
        let coordinate = (row, col);
        if !self.in_bounds(coordinate) || self.grid.contains_key(&coordinate) {
            return false;
        }
        if self.grid.is_empty() {
            return coordinate == ORIGIN;
        }

        self.is_connected(coordinate) && tiles(self.num_types).any(|tile| self.fits(coordinate, tile))
    }

    fn playable_neighbors(&self, row: isize, col: isize) -> Neighbors {
        let Lines {
            row_bounds,
            col_bounds,
            ..
        } = self.lines_at(row, col);

        let (playable, unplayable): (Vec<Coordinate>, Vec<Coordinate>) = row_bounds
            .into_iter()
            .chain(col_bounds)
            .filter(|&coordinate| coordinate != (row, col))
            .unique()
            .partition(|&(row, col)| self.is_playable(row, col));
        Neighbors {
            playable,
            unplayable,
        }
    }

    fn tile_at(&self, row: isize, col: isize) -> Option<Tile> {
        self.grid.get(&(row, col)).copied()
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }
}
