use crate::{
    adjacent_coordinates, Bag, Board, Coordinate, Frontier, GameState, Move, Player, PlayerKind,
    Players, RackPlayer, Tile,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use std::mem;

impl GameState {
    /// Generates a game of computer players named `player 0`, `player 1` and so on, dealt
    /// from a bag shuffled with `seed`.
    pub fn seeded(num_types: usize, copies: usize, players: usize, seed: u64) -> GameState {
        let names = (0..players)
            .map(|index| format!("player {index}"))
            .collect::<Vec<_>>();
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();
        let kinds = vec![PlayerKind::Computer; players];

        GameState::init_state(
            &names,
            &kinds,
            num_types,
            copies,
            &mut ChaCha8Rng::seed_from_u64(seed),
        )
        .expect("init_state should return Ok")
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players<RackPlayer> {
        &mut self.players
    }

    /// A mutable reference to `self.frontier`.
    pub fn mut_frontier(&mut self) -> &mut Frontier {
        &mut self.frontier
    }

    /// Replaces the rack of the player at `index` with exactly `tiles`. The old rack goes back
    /// into the bag. A [tile](Tile) that is not in the bag is taken from another rack, which
    /// is compensated from the bag.
    pub fn set_rack(&mut self, index: usize, tiles: &[Tile]) {
        let old_rack = mem::take(self.players[index].tiles_mut());
        self.bag.extend(old_rack);

        for &tile in tiles {
            if let Some(position) = self.bag.iter().position(|&bagged| bagged == tile) {
                self.bag.swap_remove(position);
            } else {
                let (owner, position) = self
                    .players
                    .iter()
                    .enumerate()
                    .filter(|&(owner, _)| owner != index)
                    .find_map(|(owner, player)| {
                        player
                            .tiles()
                            .iter()
                            .position(|&held| held == tile)
                            .map(|position| (owner, position))
                    })
                    .expect("tile should be in the bag or in another rack");
                let replacement = self.bag.pop().expect("bag should not be empty");
                let owner_tiles = self.players[owner].tiles_mut();
                owner_tiles.remove(position);
                owner_tiles.push(replacement);
            }
            self.players[index].tiles_mut().push(tile);
        }
    }

    /// Gives the current player exactly the [tiles](Tile) of `moves`, places them in order
    /// and ends a scoring turn.
    ///
    /// # Returns
    ///
    /// The points earned.
    pub fn play_moves(&mut self, moves: &[Move]) -> usize {
        let tiles = moves.iter().map(|placed| placed.tile).collect::<Vec<_>>();
        self.set_rack(self.current_player_index(), &tiles);
        for placed in moves {
            assert!(
                self.tile_place(placed.row, placed.col, placed.tile),
                "{placed:?} should be placeable"
            );
        }

        self.end_scoring_turn()
            .expect("end_scoring_turn should return Some")
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) in the bag, in racks and committed to the board.
    pub fn tile_count(&self) -> usize {
        self.bag.len()
            + self
                .players
                .iter()
                .map(|player| player.tiles().len())
                .sum::<usize>()
            + self.board.len()
            - self.turn.len()
    }

    /// # Returns
    ///
    /// Every empty cell next to a committed [tile](Tile) where some [tile](Tile) could be
    /// placed, or the origin on an empty board.
    pub fn expected_frontier(&self) -> BTreeSet<Coordinate> {
        if self.board.is_empty() {
            return Frontier::new().iter().collect();
        }

        self.board
            .grid()
            .keys()
            .flat_map(|&coordinate| adjacent_coordinates(coordinate))
            .filter(|&(row, col)| self.board.is_playable(row, col))
            .collect()
    }

    /// Asserts that the [frontier](Frontier) holds exactly the playable cells of the board.
    /// Only meaningful between turns.
    pub fn assert_frontier_matches_board(&self) {
        assert!(self.turn.is_empty());
        assert_eq!(
            self.expected_frontier(),
            self.frontier.iter().collect::<BTreeSet<_>>()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::{Coordinate, GameState, Player};
    use itertools::Itertools;
    use std::collections::BTreeSet;

    #[test]
    fn seeded_is_deterministic() {
        let first = GameState::seeded(6, 3, 3, 21);
        let second = GameState::seeded(6, 3, 3, 21);

        assert_eq!(first.bag(), second.bag());
        assert_eq!(first.players(), second.players());
        assert_eq!(
            vec!["player 0", "player 1", "player 2"],
            first.players().iter().map(|player| player.name()).sorted().collect_vec()
        );
    }

    #[test]
    fn set_rack_conserves_tiles() {
        let mut state = GameState::seeded(3, 1, 2, 21);
        let wanted = state.players()[1].tiles()[..2].to_vec();

        state.set_rack(0, &wanted);

        assert_eq!(wanted.as_slice(), state.players()[0].tiles().as_slice());
        assert_eq!(3, state.players()[1].tiles().len());
        assert!(wanted
            .iter()
            .all(|tile| !state.players()[1].tiles().contains(tile)));
        assert_eq!(state.config().total_tiles(), state.tile_count());
    }

    #[test]
    fn set_rack_empty() {
        let mut state = GameState::seeded(6, 3, 2, 21);

        state.set_rack(1, &[]);

        assert!(state.players()[1].tiles().is_empty());
        assert_eq!(102, state.bag().len());
    }

    #[test]
    fn expected_frontier_empty_board() {
        let state = GameState::seeded(6, 3, 2, 21);

        assert_eq!(vec![(0, 0)], state.expected_frontier().into_iter().collect_vec());
        state.assert_frontier_matches_board();
    }

    #[test]
    fn mut_frontier_detected() {
        let mut state = GameState::seeded(6, 3, 2, 21);
        state.mut_frontier().mut_coordinates().insert((4, 4));

        let frontier: BTreeSet<Coordinate> = state.frontier().iter().collect();

        assert_ne!(state.expected_frontier(), frontier);
        assert!(!state.expected_frontier().contains(&(4, 4)));
    }
}
