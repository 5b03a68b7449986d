use crate::{
    tiles, Bag, Board, Frontier, GameConfig, Grid, GridBoard, HistoryEntry, InitError, Move,
    Player, PlayerKind, Players, RackPlayer, Turn,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::RefCell;
use std::iter;
use std::rc::Rc;
use tracing::{debug, instrument};

mod commit;
mod placements;
#[cfg(test)]
mod test_setup;
mod turn;

/// Owns the state of a game and implements the turn lifecycle. Created from
/// [GameState::init_state] or [GameState::from_parts].
///
/// The board holds committed [tiles](crate::Tile) and the [tiles](crate::Tile) of the
/// tentative turn. The [frontier](Frontier) only reflects committed [tiles](crate::Tile).
#[derive(Debug, Clone)]
pub struct GameState<B = GridBoard, P = RackPlayer> {
    /// The dimensions of the game.
    config: GameConfig,
    /// The grid of placed [tiles](crate::Tile).
    board: B,
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: Bag,
    /// The players in turn order.
    players: Players<P>,
    /// Every committed turn in order.
    history: Vec<HistoryEntry>,
    /// The in-progress, uncommitted turn of the current player.
    turn: Turn,
    /// The cells open at the start of the turn.
    frontier: Frontier,
    /// The sorted placements of the last history asked for, keyed by its content.
    placements_cache: RefCell<Option<(Vec<HistoryEntry>, Rc<[Move]>)>>,
}

impl GameState {
    /// Creates a game with one player per name, fills a shuffled bag with `copies` copies of
    /// every [tile](crate::Tile), deals `num_types` [tiles](crate::Tile) to each player and
    /// [rotates the players](GameState::get_start_index) so that the player with the longest
    /// line in their rack leads.
    ///
    /// # Errors
    ///
    /// * [InitError::TooManyTypes] when `num_types` is greater than [MAX_TYPES](crate::MAX_TYPES)
    /// * [InitError::MismatchedPlayers] when names and kinds have different lengths
    /// * Any other [InitError] from [GameConfig::new]
    #[instrument(level = "debug", skip(player_kinds, rng))]
    pub fn init_state<R: Rng + ?Sized>(
        player_names: &[&str],
        player_kinds: &[PlayerKind],
        num_types: usize,
        copies: usize,
        rng: &mut R,
    ) -> Result<GameState, InitError> {
        let config = GameConfig::new(num_types, copies, player_names.len())?;
        if player_names.len() != player_kinds.len() {
            return Err(InitError::MismatchedPlayers {
                names: player_names.len(),
                kinds: player_kinds.len(),
            });
        }

        let mut bag: Bag = tiles(num_types)
            .flat_map(|tile| iter::repeat(tile).take(copies))
            .collect();
        bag.shuffle(rng);

        let players: Players<RackPlayer> = player_names
            .iter()
            .zip(player_kinds)
            .map(|(&name, &kind)| {
                let mut player = RackPlayer::new(name, kind);
                player.draw_tiles(&mut bag, config.tiles_per_player);
                player
            })
            .collect();

        let mut state =
            GameState::from_parts(config, GridBoard::new(num_types, copies), bag, players)?;
        let leader = state.get_start_index();
        debug!(leader, bag = state.bag.len(), "created game");

        Ok(state)
    }
}

impl<B: Board, P: Player> GameState<B, P> {
    /// # Returns
    ///
    /// A game that has not started yet, with the players in the given order and an
    /// empty history.
    ///
    /// # Errors
    ///
    /// * [InitError::EmptyPlayers] when `players` is empty
    pub fn from_parts(
        config: GameConfig,
        board: B,
        bag: Bag,
        players: Players<P>,
    ) -> Result<Self, InitError> {
        if players.is_empty() {
            return Err(InitError::EmptyPlayers);
        }

        Ok(GameState {
            config,
            board,
            bag,
            players,
            history: Vec::new(),
            turn: Turn::with_capacity(config.tiles_per_player),
            frontier: Frontier::new(),
            placements_cache: RefCell::new(None),
        })
    }

    /// Compares the longest line each player could build from their rack. The first player
    /// with the overall longest line leads, and the players are rotated so that player
    /// comes first while keeping the relative order of the others.
    ///
    /// # Returns
    ///
    /// The index of the leader before the rotation.
    pub fn get_start_index(&mut self) -> usize {
        let num_types = self.config.num_types;
        let (leader, _) = self
            .players
            .iter()
            .map(|player| player.longest_line(num_types).len())
            .enumerate()
            .fold((0, 0), |(leader, longest), (index, len)| {
                if len > longest {
                    (index, len)
                } else {
                    (leader, longest)
                }
            });
        self.players.rotate_left(leader);
        leader
    }

    /// # Returns
    ///
    /// The dimensions of the game.
    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// # Returns
    ///
    /// The board with committed and tentative [tiles](crate::Tile).
    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// # Returns
    ///
    /// A snapshot of the board for rendering.
    #[inline]
    pub fn turn_grid(&self) -> &Grid {
        self.board.grid()
    }

    /// # Returns
    ///
    /// The [tiles](crate::Tile) that haven't been drawn yet.
    #[inline]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// # Returns
    ///
    /// The players in turn order.
    #[inline]
    pub fn players(&self) -> &[P] {
        &self.players
    }

    /// # Returns
    ///
    /// Every committed turn in order.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// # Returns
    ///
    /// The [moves](Move) of the in-progress turn in placement order.
    #[inline]
    pub fn tentative_turn(&self) -> &[Move] {
        &self.turn
    }

    /// # Returns
    ///
    /// The cells open at the start of the turn.
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// # Returns
    ///
    /// The number of committed turns.
    #[inline]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    /// # Returns
    ///
    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player_index(&self) -> usize {
        self.history.len() % self.players.len()
    }

    /// # Returns
    ///
    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &P {
        &self.players[self.current_player_index()]
    }

    /// # Returns
    ///
    /// The index of the player who committed the last turn, or of the current player when
    /// nothing has been committed.
    fn last_player_index(&self) -> usize {
        match self.history.len() {
            0 => 0,
            len => (len - 1) % self.players.len(),
        }
    }

    /// # Returns
    ///
    /// Whether nothing has been committed or placed yet.
    #[inline]
    pub fn is_initial_state(&self) -> bool {
        self.history.is_empty() && self.turn.is_empty()
    }

    /// The game is over when the bag is empty and the acting player holds no
    /// [tiles](crate::Tile). During a tentative turn the acting player is the current player
    /// and the placed [tiles](crate::Tile) no longer count as held. Between turns the acting
    /// player is the one who committed the last turn.
    ///
    /// # Returns
    ///
    /// Whether the game is over.
    pub fn game_over(&self) -> bool {
        if !self.bag.is_empty() {
            return false;
        }

        if self.turn.is_empty() {
            self.players[self.last_player_index()].tiles().is_empty()
        } else {
            self.current_player().turn_tiles(&self.turn).is_empty()
        }
    }

    /// # Returns
    ///
    /// The indexes of every player with the maximum score, in turn order.
    pub fn determine_winner(&self) -> Vec<usize> {
        let Some(winning_score) = self.players.iter().map(P::score).max() else {
            return Vec::new();
        };

        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.score() == winning_score)
            .map(|(index, _)| index)
            .collect()
    }
}
