use crate::{Board, GameState, HistoryEntry, Player, Tile};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::debug;

impl<B: Board, P: Player> GameState<B, P> {
    /// Commits the tentative turn. The current player earns the [score](GameState::score_turn)
    /// of the turn, gives up the placed [tiles](Tile) and refills the rack from the bag. The
    /// [frontier](crate::Frontier) advances past every placement in placement order, and the
    /// turn is appended to the history so the next player is up.
    ///
    /// # Returns
    ///
    /// The points earned, or [None] without a tentative turn.
    pub fn end_scoring_turn(&mut self) -> Option<usize> {
        if self.turn.is_empty() {
            return None;
        }

        let score = self.score_turn();
        let index = self.current_player_index();
        let player = &mut self.players[index];
        *player.score_mut() += score;
        for placed in &self.turn {
            player.remove_tile(placed.tile);
        }
        let drawn = player.draw_tiles(&mut self.bag, self.turn.len());

        for placed in &self.turn {
            self.frontier.advance(&self.board, placed.row, placed.col, false);
        }

        let turn = std::mem::take(&mut self.turn);
        debug!(
            player = index,
            score,
            placed = turn.len(),
            drawn,
            frontier = self.frontier.len(),
            "ended scoring turn"
        );
        self.history.push(HistoryEntry::Play(turn));
        Some(score)
    }

    /// Swaps the `selected` [tiles](Tile) of the current player for the same number of
    /// [tiles](Tile) from the bag, then hands the turn to the next player. Replacements are
    /// drawn before the `selected` [tiles](Tile) are shuffled back into the bag, so a
    /// player never draws back what they returned. Exchanging nothing passes the turn.
    ///
    /// # Returns
    ///
    /// Whether the exchange happened. It is refused during a tentative turn, when the rack
    /// does not hold every `selected` [tile](Tile), or when the bag holds fewer
    /// [tiles](Tile) than `selected`.
    pub fn end_exchange_turn<R: Rng + ?Sized>(&mut self, selected: &[Tile], rng: &mut R) -> bool {
        if !self.turn.is_empty() || selected.len() > self.bag.len() {
            return false;
        }

        let index = self.current_player_index();
        let mut rack = self.players[index].tiles().clone();
        for &tile in selected {
            match rack.iter().position(|&held| held == tile) {
                Some(position) => {
                    rack.remove(position);
                }
                None => return false,
            }
        }

        let player = &mut self.players[index];
        *player.tiles_mut() = rack;
        player.draw_tiles(&mut self.bag, selected.len());

        // shuffle the returned tiles into the bag in place
        let start = self.bag.len();
        self.bag.extend_from_slice(selected);
        let end = self.bag.len();
        if start < end {
            let possible_indexes = Uniform::from(0..end);
            for position in start..end {
                self.bag.swap(position, possible_indexes.sample(rng));
            }
        }

        debug!(player = index, exchanged = selected.len(), "ended exchange turn");
        self.history.push(HistoryEntry::Exchange(selected.to_vec()));
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{tile_of, Board, GameState, HistoryEntry, Move, Player, Tile};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sorted(tiles: &[Tile]) -> Vec<Tile> {
        tiles.iter().copied().sorted_unstable().collect()
    }

    #[test]
    fn end_scoring_turn_without_turn() {
        let mut state = GameState::seeded(6, 3, 2, 8);

        assert_eq!(None, state.end_scoring_turn());
        assert_eq!(0, state.turn());
    }

    #[test]
    fn end_scoring_turn_refills_rack() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let rack = [tile_of(0, 0, 6), tile_of(0, 1, 6), tile_of(4, 4, 6)];
        state.set_rack(0, &rack);
        let bag_len = state.bag().len();

        assert!(state.tile_place(0, 0, rack[0]));
        assert!(state.tile_place(0, 1, rack[1]));
        assert_eq!(Some(2), state.end_scoring_turn());

        let player = &state.players()[0];
        assert_eq!(2, player.score());
        assert_eq!(3, player.tiles().len());
        assert_eq!(rack[2], player.tiles()[0]);
        assert_eq!(bag_len - 2, state.bag().len());
        assert_eq!(state.config().total_tiles(), state.tile_count());
    }

    #[test]
    fn end_scoring_turn_records_history() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let moves = [
            Move::new(0, 0, tile_of(2, 5, 6)),
            Move::new(1, 0, tile_of(2, 3, 6)),
        ];

        state.play_moves(&moves);

        assert_eq!(&[HistoryEntry::Play(moves.to_vec())], state.history());
        assert!(state.tentative_turn().is_empty());
        assert_eq!(1, state.current_player_index());
        assert_eq!(2, state.board().len());
    }

    #[test]
    fn end_scoring_turn_advances_frontier() {
        let mut state = GameState::seeded(6, 3, 2, 8);

        state.play_moves(&[
            Move::new(0, 0, tile_of(1, 0, 6)),
            Move::new(0, 1, tile_of(1, 1, 6)),
        ]);

        assert_eq!(
            vec![(-1, 0), (-1, 1), (0, -1), (0, 2), (1, 0), (1, 1)],
            state.frontier().iter().collect_vec()
        );
        state.assert_frontier_matches_board();
    }

    #[test]
    fn end_scoring_turn_short_bag() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let rack = [tile_of(0, 0, 6), tile_of(0, 1, 6)];
        state.set_rack(0, &rack);
        let last = state.mut_bag().split_off(1);
        state.mut_players()[1].tiles_mut().extend(last);

        state.play_moves(&[Move::new(0, 0, rack[0]), Move::new(0, 1, rack[1])]);

        assert!(state.bag().is_empty());
        assert_eq!(1, state.players()[0].tiles().len());
        assert_eq!(state.config().total_tiles(), state.tile_count());
    }

    #[test]
    fn end_exchange_turn_swaps_tiles() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let rack = [tile_of(0, 0, 6), tile_of(0, 0, 6), tile_of(3, 2, 6), tile_of(5, 1, 6)];
        state.set_rack(0, &rack);
        let mut bag = state.bag().clone();
        let drawn = bag.split_off(bag.len() - 2);

        assert!(state.end_exchange_turn(
            &[tile_of(0, 0, 6), tile_of(5, 1, 6)],
            &mut ChaCha8Rng::seed_from_u64(8)
        ));

        let expected_rack = [tile_of(0, 0, 6), tile_of(3, 2, 6)]
            .into_iter()
            .chain(drawn)
            .collect_vec();
        assert_eq!(expected_rack.as_slice(), state.players()[0].tiles().as_slice());
        bag.extend([tile_of(0, 0, 6), tile_of(5, 1, 6)]);
        assert_eq!(sorted(&bag), sorted(state.bag()));
        assert_eq!(
            &[HistoryEntry::Exchange(vec![tile_of(0, 0, 6), tile_of(5, 1, 6)])],
            state.history()
        );
        assert_eq!(1, state.current_player_index());
        assert_eq!(state.config().total_tiles(), state.tile_count());
    }

    #[test]
    fn end_exchange_turn_pass() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let rack = state.players()[0].tiles().clone();
        let bag = state.bag().clone();

        assert!(state.end_exchange_turn(&[], &mut ChaCha8Rng::seed_from_u64(8)));

        assert_eq!(&rack, state.players()[0].tiles());
        assert_eq!(&bag, state.bag());
        assert_eq!(1, state.turn());
    }

    #[test]
    fn end_exchange_turn_not_held() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        state.set_rack(0, &[tile_of(0, 0, 6), tile_of(1, 1, 6)]);

        assert!(!state.end_exchange_turn(
            &[tile_of(0, 0, 6), tile_of(0, 0, 6)],
            &mut ChaCha8Rng::seed_from_u64(8)
        ));

        assert_eq!(2, state.players()[0].tiles().len());
        assert!(state.history().is_empty());
    }

    #[test]
    fn end_exchange_turn_bag_too_small() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let rack = state.players()[0].tiles().clone();
        state.mut_bag().truncate(1);

        assert!(!state.end_exchange_turn(&rack[..2], &mut ChaCha8Rng::seed_from_u64(8)));
        assert!(state.end_exchange_turn(&rack[..1], &mut ChaCha8Rng::seed_from_u64(8)));
    }

    #[test]
    fn end_exchange_turn_during_tentative_turn() {
        let mut state = GameState::seeded(6, 3, 2, 8);
        let rack = state.players()[0].tiles().clone();
        assert!(state.tile_place(0, 0, rack[0]));

        assert!(!state.end_exchange_turn(&rack[1..2], &mut ChaCha8Rng::seed_from_u64(8)));
        assert!(state.history().is_empty());
    }
}
