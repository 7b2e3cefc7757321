//! User intents and the reasons they can be turned down.
//!
//! Actions are domain events, not side effects: the reducer in
//! [`GameState`](super::GameState) turns an action into the next state.

use super::Position;
use super::rules::Phase;
use derive_more::{Display, Error};

/// Something the player asked for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place the current player's mark on square `0..=8`.
    #[display("activate cell {_0}")]
    ActivateCell(usize),
    /// Show the board as it was after the given number of moves.
    #[display("jump to step {_0}")]
    JumpTo(usize),
}

/// Why an action left the state unchanged.
///
/// Rejections are informational. The controller absorbs them; they exist
/// for logging and for tests that want to know which rule applied.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No such square.
    #[display("Cell {_0} is off the board")]
    CellOutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The displayed board is already decided.
    #[display("Game is already over ({_0})")]
    GameFinished(#[error(not(source))] Phase),

    /// No snapshot at that step.
    #[display("Step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },
}
