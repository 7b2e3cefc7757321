//! Game state and the pure reducer over it.

use super::action::{Action, Rejection};
use super::history::History;
use super::rules::{self, Phase};
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use tracing::{debug, instrument};

/// Line shown above the move list.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The displayed board has a winner.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Nobody has won yet on the displayed board.
    ///
    /// Also used for a full board with no winner.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the step currently displayed.
    current: bool,
}

impl MoveEntry {
    /// Action fired when this entry is activated.
    pub fn action(&self) -> Action {
        Action::JumpTo(self.step)
    }
}

/// Label for the move list entry at `step`.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Complete, immutable game state.
///
/// Every accepted action produces a fresh `GameState`; the old one is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    step: usize,
}

impl GameState {
    /// State at game start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// All snapshots, including any redo branch beyond `step`.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Winner on the displayed board.
    pub fn winner(&self) -> Option<Player> {
        rules::evaluate(self.current_board())
    }

    /// Phase of the displayed board.
    pub fn phase(&self) -> Phase {
        rules::phase(self.current_board())
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// One entry per snapshot, oldest first.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry::new(step, move_label(step), step == self.step))
            .collect()
    }

    /// Applies an action, reporting why it was refused.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn try_apply(&self, action: Action) -> Result<Self, Rejection> {
        match action {
            Action::ActivateCell(index) => self.try_place(index),
            Action::JumpTo(step) => self.try_jump(step),
        }
    }

    /// Applies an action; refused actions return an identical state.
    pub fn apply(&self, action: Action) -> Self {
        match self.try_apply(action) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%action, %rejection, "Action absorbed");
                self.clone()
            }
        }
    }

    fn try_place(&self, index: usize) -> Result<Self, Rejection> {
        let pos = Position::from_index(index).ok_or(Rejection::CellOutOfRange(index))?;

        let phase = self.phase();
        if phase.is_finished() {
            return Err(Rejection::GameFinished(phase));
        }
        if !self.current_board().is_empty(pos) {
            return Err(Rejection::CellOccupied(pos));
        }

        let player = self.next_player();
        let history = self.history.branch(self.step, pos, player);
        let step = history.last_step();
        debug!(%pos, %player, step, "Move accepted");
        Ok(Self { history, step })
    }

    fn try_jump(&self, step: usize) -> Result<Self, Rejection> {
        if step >= self.history.len() {
            return Err(Rejection::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
