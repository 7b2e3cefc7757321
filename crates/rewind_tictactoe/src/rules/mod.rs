//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here knows about history
//! or turns; callers derive those from the board sequence.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, evaluate, winning_line};

use super::{Board, Player};
use derive_more::Display;

/// Phase of a single board position.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No winner and at least one empty square.
    #[display("in progress")]
    InProgress,
    /// A player has three in a row.
    #[display("won by {_0}")]
    Won(Player),
    /// Board full, no winner.
    #[display("draw")]
    Draw,
}

impl Phase {
    /// True once no further move can be made.
    pub fn is_finished(self) -> bool {
        self != Phase::InProgress
    }
}

/// Classifies a board.
pub fn phase(board: &Board) -> Phase {
    match evaluate(board) {
        Some(player) => Phase::Won(player),
        None if is_full(board) => Phase::Draw,
        None => Phase::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_phase_of_empty_board() {
        assert_eq!(phase(&Board::new()), Phase::InProgress);
        assert!(!Phase::InProgress.is_finished());
    }

    #[test]
    fn test_phase_won() {
        let board = [Position::TopLeft, Position::Center, Position::BottomRight]
            .iter()
            .fold(Board::new(), |b, &pos| b.with_mark(pos, Player::O));
        assert_eq!(phase(&board), Phase::Won(Player::O));
        assert!(phase(&board).is_finished());
        assert_eq!(Phase::Won(Player::O).to_string(), "won by O");
    }
}
