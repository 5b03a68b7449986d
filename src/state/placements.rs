use crate::{Board, GameState, HistoryEntry, Move, Player};
use std::rc::Rc;

impl<B: Board, P: Player> GameState<B, P> {
    /// # Returns
    ///
    /// Every committed [move](Move) and every [move](Move) of the tentative turn, sorted by
    /// row, then column.
    pub fn tile_placements(&self) -> Rc<[Move]> {
        if self.turn.is_empty() {
            return self.committed_placements();
        }

        let tentative = HistoryEntry::Play(self.turn.clone());
        self.placements_of(&self.history, Some(&tentative))
    }

    /// # Returns
    ///
    /// Every committed [move](Move), sorted by row, then column.
    pub fn committed_placements(&self) -> Rc<[Move]> {
        self.placements_of(&self.history, None)
    }

    /// Flattens and sorts the [moves](Move) of `history` followed by `tentative`. The last
    /// result is memoized by the content of the entries, so asking twice without changing
    /// anything in between returns the same allocation.
    fn placements_of(
        &self,
        history: &[HistoryEntry],
        tentative: Option<&HistoryEntry>,
    ) -> Rc<[Move]> {
        let entries = || history.iter().chain(tentative);
        if let Some((key, placements)) = self.placements_cache.borrow().as_ref() {
            if key.iter().eq(entries()) {
                return Rc::clone(placements);
            }
        }

        let mut moves = entries()
            .flat_map(HistoryEntry::moves)
            .copied()
            .collect::<Vec<_>>();
        moves.sort_unstable();
        let placements: Rc<[Move]> = moves.into();
        *self.placements_cache.borrow_mut() =
            Some((entries().cloned().collect(), Rc::clone(&placements)));
        placements
    }
}
