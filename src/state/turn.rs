use crate::{coords_in, Board, Coordinate, GameState, HistoryEntry, Lines, Move, Player, Tile};
use std::iter;
use tracing::debug;

impl<B: Board, P: Player> GameState<B, P> {
    /// Places `tile` at `row` and `col` as part of the tentative turn. The cell must be
    /// [open for this turn](GameState::playable), the current player must still hold the
    /// [tile](Tile) outside the tentative turn, and the [board](Board::place_tile_validate)
    /// must accept the placement.
    ///
    /// # Returns
    ///
    /// Whether the [tile](Tile) was placed. Nothing changes when `false` is returned.
    pub fn tile_place(&mut self, row: isize, col: isize, tile: Tile) -> bool {
        if !self.current_player().turn_tiles(&self.turn).contains(&tile)
            || !self.is_open((row, col))
            || !self.board.place_tile_validate(row, col, tile)
        {
            return false;
        }

        self.turn.push(Move::new(row, col, tile));
        true
    }

    /// Takes back the last placement of the tentative turn.
    ///
    /// # Returns
    ///
    /// Whether there was a placement to take back.
    pub fn undo_tile_place(&mut self) -> bool {
        let Some(last) = self.turn.pop() else {
            return false;
        };

        self.board.lift_tile(last.row, last.col);
        true
    }

    /// Removes the [tile](Tile) at `row` and `col`. A placement of the tentative turn is
    /// simply taken back. Between turns, a committed placement is erased from the history,
    /// its [tile](Tile) returns to the bag and the [frontier](crate::Frontier) is updated
    /// around its cell.
    ///
    /// # Returns
    ///
    /// Whether some placement was removed. Committed placements are kept while a tentative
    /// turn is in progress.
    pub fn remove_tile(&mut self, row: isize, col: isize) -> bool {
        let tentative = self.turn.iter().map(Move::coordinate).collect::<Vec<_>>();
        if let Some(index) = coords_in((row, col), &tentative) {
            let removed = self.turn.remove(index);
            self.board.lift_tile(removed.row, removed.col);
            return true;
        }
        if !self.turn.is_empty() {
            return false;
        }

        let Some((entry, index)) = self
            .history
            .iter()
            .enumerate()
            .rev()
            .find_map(|(entry, committed)| {
                committed
                    .moves()
                    .iter()
                    .position(|placed| placed.coordinate() == (row, col))
                    .map(|index| (entry, index))
            })
        else {
            return false;
        };
        let Some(tile) = self.board.lift_tile(row, col) else {
            return false;
        };
        if let HistoryEntry::Play(moves) = &mut self.history[entry] {
            moves.remove(index);
        }

        self.bag.push(tile);
        if self.board.is_empty() {
            self.frontier.reset();
        } else {
            self.frontier.advance(&self.board, row, col, true);
        }

        debug!(row, col, tile, "removed committed tile");
        true
    }

    /// Discards the tentative turn without committing it.
    pub fn reset_turn(&mut self) {
        for placed in self.turn.drain(..).rev() {
            self.board.lift_tile(placed.row, placed.col);
        }
    }

    /// # Returns
    ///
    /// Whether the first two placements of the tentative turn share a row.
    pub fn turn_is_row(&self) -> bool {
        self.turn.len() > 1 && self.turn[0].row == self.turn[1].row
    }

    /// # Returns
    ///
    /// Whether the first two placements of the tentative turn share a column.
    pub fn turn_is_column(&self) -> bool {
        self.turn.len() > 1 && self.turn[0].col == self.turn[1].col
    }

    /// The cells where the next placement of the tentative turn may go. Before any
    /// placement these are the cells of the [frontier](crate::Frontier). After one
    /// placement they are the cells just beyond both lines through it. Afterwards they are
    /// the cells just beyond the line the turn is being played along.
    ///
    /// # Returns
    ///
    /// The open cells for the next placement.
    pub fn playable(&self) -> Vec<Coordinate> {
        let Some(first) = self.turn.first() else {
            return self.frontier.iter().collect();
        };

        let Lines {
            row_bounds,
            col_bounds,
            ..
        } = self.board.lines_at(first.row, first.col);
        if self.turn.len() == 1 {
            row_bounds.into_iter().chain(col_bounds).collect()
        } else if self.turn_is_row() {
            row_bounds
        } else {
            col_bounds
        }
    }

    /// Whether `coordinate` is one of the [playable](GameState::playable) cells.
    fn is_open(&self, coordinate: Coordinate) -> bool {
        if self.turn.is_empty() {
            self.frontier.contains(&coordinate)
        } else {
            self.playable().contains(&coordinate)
        }
    }

    /// The lines scored by the tentative turn. A single placement scores the row and the
    /// column through it. A turn along a row scores the column through every placement and
    /// the row once, and a turn along a column scores the row through every placement and
    /// the column once.
    ///
    /// # Returns
    ///
    /// The lines of [tiles](Tile) formed by the tentative turn.
    pub fn move_lines(&self) -> Vec<Vec<Tile>> {
        let Some(first) = self.turn.first() else {
            return Vec::new();
        };

        let lines = self.board.lines_at(first.row, first.col);
        if self.turn.len() == 1 {
            return vec![lines.row_line, lines.col_line];
        }

        if self.turn_is_row() {
            self.turn
                .iter()
                .map(|placed| self.board.lines_at(placed.row, placed.col).col_line)
                .chain(iter::once(lines.row_line))
                .collect()
        } else {
            self.turn
                .iter()
                .map(|placed| self.board.lines_at(placed.row, placed.col).row_line)
                .chain(iter::once(lines.col_line))
                .collect()
        }
    }

    /// # Returns
    ///
    /// The points of one line of `len` [tiles](Tile). A lone [tile](Tile) extends no line
    /// and scores nothing, and a complete line scores double.
    fn score_line(&self, len: usize) -> usize {
        if len == 1 {
            0
        } else if len == self.config.num_types {
            self.config.full_line_points()
        } else {
            len
        }
    }

    /// Scores the tentative turn. The very first placement of the game, when it is a
    /// single [tile](Tile), scores `1`. Otherwise every line of [move_lines](GameState::move_lines)
    /// scores its length, except that a lone [tile](Tile) scores nothing and a complete line
    /// scores double. The points of all lines are summed, and a turn that ends the game
    /// earns an extra `num_types` points.
    ///
    /// # Returns
    ///
    /// The points the tentative turn would earn, or `0` without a tentative turn.
    pub fn score_turn(&self) -> usize {
        if self.turn.is_empty() {
            return 0;
        }
        if self.turn.len() == 1 && self.board.len() == 1 {
            return 1;
        }

        let bonus = if self.game_over() {
            self.config.num_types
        } else {
            0
        };
        bonus
            + self
                .move_lines()
                .iter()
                .map(|line| self.score_line(line.len()))
                .sum::<usize>()
    }

    /// Checks the lines of the tentative turn against the [board](Board::line_is_valid).
    ///
    /// The check rejects the turn as soon as any of its lines is valid and accepts it
    /// otherwise, including when there is no tentative turn.
    ///
    /// # Returns
    ///
    /// Whether the turn is accepted.
    pub fn validate_turn_history(&self) -> bool {
        !self
            .move_lines()
            .iter()
            .any(|line| self.board.line_is_valid(line))
    }
}
