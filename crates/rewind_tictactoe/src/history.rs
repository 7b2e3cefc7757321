//! Board snapshots, oldest first.

use super::{Board, Player, Position};
use tracing::{instrument, trace};

/// Ordered sequence of board snapshots.
///
/// Never empty: index 0 is always the empty board. Each later snapshot
/// adds exactly one mark to the one before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// History holding only the starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.boards.len() - 1
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// Iterates snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// Builds the history that results from playing `pos` at `step`.
    ///
    /// Snapshots after `step` are dropped and the new board is appended.
    /// `step` must be in range and `pos` empty on that board; the caller
    /// checks both.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn branch(&self, step: usize, pos: Position, player: Player) -> Self {
        let mut boards = self.boards[..=step].to_vec();
        let next = boards[step].with_mark(pos, player);
        boards.push(next);
        trace!(
            discarded = self.boards.len() - (step + 1),
            "Branched history"
        );
        Self { boards }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for History {
    type Output = Board;

    fn index(&self, step: usize) -> &Board {
        &self.boards[step]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_history_starts_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_step(), 0);
        assert_eq!(history.get(0), Some(&Board::new()));
        assert!(!history.is_empty());
    }

    #[test]
    fn test_branch_appends_one_mark() {
        let history = History::new();
        let next = history.branch(0, Position::Center, Player::X);
        assert_eq!(history.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(
            next.get(1).map(|b| b.get(Position::Center)),
            Some(Square::Occupied(Player::X))
        );
    }

    #[test]
    fn test_branch_discards_redo_entries() {
        let history = History::new()
            .branch(0, Position::TopLeft, Player::X)
            .branch(1, Position::Center, Player::O)
            .branch(2, Position::TopRight, Player::X);
        assert_eq!(history.len(), 4);

        let rewritten = history.branch(1, Position::BottomRight, Player::O);
        assert_eq!(rewritten.len(), 3);
        let last = rewritten.get(2).expect("new snapshot");
        assert!(last.is_empty(Position::Center));
        assert_eq!(last.get(Position::BottomRight), Square::Occupied(Player::O));
    }
}
