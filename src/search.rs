use crate::{
    Board, Coordinate, Decision, GameState, Move, Player, Tile, Turn, NEAR_COMPLETE_PENALTY,
    ORIGIN,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::iter;
use tracing::{debug, instrument, trace};

/// Tunes [the move search](GameState::computer_play).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SearchConfig {
    /// Whether candidates that leave a line one [tile](Tile) short of complete are penalized.
    pub avoid_near_complete: bool,
    /// The points subtracted from such candidates.
    pub near_complete_penalty: usize,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            avoid_near_complete: true,
            near_complete_penalty: NEAR_COMPLETE_PENALTY,
        }
    }
}

/// The candidates recorded during one search.
#[derive(Debug)]
struct SearchContext {
    /// Adjusted scores keyed by the ordered [moves](Move) of each candidate.
    scores: BTreeMap<Turn, isize>,
    /// Set once a candidate scores above `threshold`. Stops the current line of the rack.
    killswitch: bool,
    /// Raw scores above this end the exploration of the current line of the rack.
    threshold: usize,
    /// The points subtracted from candidates exposing a near-complete line, if any.
    penalty: Option<isize>,
    /// The length of a near-complete line.
    near_complete: usize,
}

impl SearchContext {
    fn new(config: &SearchConfig, num_types: usize) -> SearchContext {
        SearchContext {
            scores: BTreeMap::new(),
            killswitch: false,
            threshold: 2 * num_types + 1,
            penalty: config
                .avoid_near_complete
                .then(|| isize::try_from(config.near_complete_penalty).unwrap_or(isize::MAX)),
            near_complete: num_types.saturating_sub(1),
        }
    }

    /// # Returns
    ///
    /// The highest adjusted score and every candidate reaching it, in key order.
    fn best(&self) -> Option<(isize, Vec<&Turn>)> {
        let best = *self.scores.values().max()?;
        let candidates = self
            .scores
            .iter()
            .filter(|(_, &score)| score == best)
            .map(|(candidate, _)| candidate)
            .collect();
        Some((best, candidates))
    }
}

impl<B: Board, P: Player> GameState<B, P> {
    /// Chooses a decision for the current player. Any tentative turn is discarded first.
    ///
    /// Before the first committed turn the player opens with their
    /// [longest line](Player::longest_line) from the [origin](ORIGIN) along row `0`.
    /// Otherwise, every [line in the rack](Player::all_lines_in_rack) is searched
    /// exhaustively by placing its [tiles](Tile) on [playable](GameState::playable) cells and
    /// undoing every placement afterwards. Every tentative turn reached is a candidate
    /// scored by [score_turn](GameState::score_turn), optionally penalized when one of its
    /// [lines](GameState::move_lines) is one [tile](Tile) short of complete. Once a candidate
    /// scores more than `2 * num_types + 1`, the rest of its line of the rack is skipped.
    ///
    /// # Returns
    ///
    /// A random candidate among those with the best positive score. Without one, an
    /// exchange of every [tile](Tile) outside the longest line in the rack.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn computer_play<R: Rng + ?Sized>(&mut self, config: &SearchConfig, rng: &mut R) -> Decision {
        self.reset_turn();
        let num_types = self.config().num_types;

        if self.is_initial_state() {
            let opening = self
                .current_player()
                .longest_line(num_types)
                .into_iter()
                .zip(cells_from(ORIGIN, (0, 1)))
                .map(|(tile, (row, col))| Move::new(row, col, tile))
                .collect();
            return Decision::Play(opening);
        }

        let context = self.collect_candidates(config);
        if let Some((best, candidates)) = context.best() {
            if best > 0 {
                if let Some(&chosen) = candidates.choose(rng) {
                    debug!(
                        candidates = context.scores.len(),
                        best,
                        ties = candidates.len(),
                        "chose play"
                    );
                    return Decision::Play(chosen.clone());
                }
            }
        }

        let player = self.current_player();
        let mut exchange = player.tiles().to_vec();
        for tile in player.longest_line(num_types) {
            if let Some(index) = exchange.iter().position(|&held| held == tile) {
                exchange.remove(index);
            }
        }
        debug!(
            candidates = context.scores.len(),
            exchanged = exchange.len(),
            "chose exchange"
        );
        Decision::Exchange(exchange)
    }

    /// Explores every line in the rack of the current player, last line first. Each line
    /// starts with a cleared killswitch.
    fn collect_candidates(&mut self, config: &SearchConfig) -> SearchContext {
        let num_types = self.config().num_types;
        let mut context = SearchContext::new(config, num_types);
        for line in self.current_player().all_lines_in_rack(num_types).iter().rev() {
            context.killswitch = false;
            self.explore(&mut context, line);
        }
        context
    }

    /// Places every [tile](Tile) of `rack` on every [playable](GameState::playable) cell,
    /// records the candidate and recurses with the remaining [tiles](Tile). Every placement
    /// is undone before the next one is tried.
    fn explore(&mut self, context: &mut SearchContext, rack: &[Tile]) {
        for (row, col) in self.playable() {
            for (index, &tile) in rack.iter().enumerate().rev() {
                if !self.tile_place(row, col, tile) {
                    continue;
                }

                self.record_candidate(context);
                if !context.killswitch {
                    let remaining = rack[..index]
                        .iter()
                        .chain(&rack[index + 1..])
                        .copied()
                        .collect::<Vec<_>>();
                    self.explore(context, &remaining);
                }
                self.undo_tile_place();

                if context.killswitch {
                    return;
                }
            }
        }
    }

    /// Scores the tentative turn and records it unless it was recorded before.
    fn record_candidate(&self, context: &mut SearchContext) {
        let score = self.score_turn();
        let mut adjusted = isize::try_from(score).unwrap_or(isize::MAX);
        if let Some(penalty) = context.penalty {
            if self
                .move_lines()
                .iter()
                .any(|line| line.len() == context.near_complete)
            {
                adjusted = adjusted.saturating_sub(penalty);
            }
        }

        context
            .scores
            .entry(self.tentative_turn().to_vec())
            .or_insert(adjusted);
        if score > context.threshold {
            trace!(score, threshold = context.threshold, "killswitch fired");
            context.killswitch = true;
        }
    }

    /// Executes `decision` for the current player through the ordinary turn operations.
    /// Any tentative turn is discarded first.
    ///
    /// # Returns
    ///
    /// The points earned by a play, `0` for an exchange, or [None] when the decision could
    /// not be executed. A play is undone entirely when one of its placements is refused.
    pub fn apply_decision<R: Rng + ?Sized>(
        &mut self,
        decision: &Decision,
        rng: &mut R,
    ) -> Option<usize> {
        self.reset_turn();
        match decision {
            Decision::Play(moves) => {
                for placed in moves {
                    if !self.tile_place(placed.row, placed.col, placed.tile) {
                        self.reset_turn();
                        return None;
                    }
                }
                self.end_scoring_turn()
            }
            Decision::Exchange(tiles) => self.end_exchange_turn(tiles, rng).then_some(0),
        }
    }

    /// Lets [the move search](GameState::computer_play) decide for the current player and
    /// [applies](GameState::apply_decision) the decision. An exchange is trimmed to the
    /// number of [tiles](Tile) left in the bag.
    ///
    /// # Returns
    ///
    /// The decision that was applied, or [None] when the game is over or the decision
    /// could not be applied.
    pub fn play_computer_turn<R: Rng + ?Sized>(
        &mut self,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Option<Decision> {
        if self.game_over() {
            return None;
        }

        let decision = match self.computer_play(config, rng) {
            Decision::Exchange(mut tiles) => {
                tiles.truncate(self.bag().len());
                Decision::Exchange(tiles)
            }
            play => play,
        };
        self.apply_decision(&decision, rng)?;
        Some(decision)
    }
}

/// An endless walk of cells from `start` (inclusive) by `step`.
fn cells_from(start: Coordinate, step: Coordinate) -> impl Iterator<Item = Coordinate> {
    iter::successors(Some(start), move |&(row, col)| Some((row + step.0, col + step.1)))
}
