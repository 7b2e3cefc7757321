//! Game controller: owns the state and drives the animation capability.

use super::action::Action;
use super::animation::{Animator, NoopAnimator};
use super::state::{GameState, MoveEntry, Status};
use tracing::{debug, info, instrument};

/// Holds the authoritative [`GameState`] and reacts to user actions.
///
/// Each accepted action replaces the state wholesale. Rejected actions
/// leave it untouched and trigger no animation.
#[derive(Debug)]
pub struct GameController<A = NoopAnimator> {
    state: GameState,
    animator: A,
}

impl GameController<NoopAnimator> {
    /// Controller without visual effects.
    pub fn headless() -> Self {
        Self::new(NoopAnimator)
    }
}

impl<A: Animator> GameController<A> {
    /// Starts a new game using `animator` for effects.
    #[instrument(skip(animator))]
    pub fn new(animator: A) -> Self {
        Self {
            state: GameState::new(),
            animator,
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The injected animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Mutable access to the injected animator, for advancing its clock.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Move list for the current history.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.state.moves()
    }

    /// Handles one user action.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn dispatch(&mut self, action: Action) {
        let next = match self.state.try_apply(action) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%rejection, "Action absorbed");
                return;
            }
        };

        let had_winner = self.state.winner().is_some();
        self.state = next;

        if let Action::ActivateCell(position) = action {
            self.animator.animate_move(position);
        }

        if let Some(winner) = self.state.winner()
            && !had_winner
        {
            info!(%winner, step = self.state.step(), "Winner detected");
            self.animator.animate_win();
        }
    }

    /// Places the next player's mark on square `index`, if legal.
    pub fn activate_cell(&mut self, index: usize) {
        self.dispatch(Action::ActivateCell(index));
    }

    /// Displays the board after `step` moves, if such a step exists.
    pub fn jump_to(&mut self, step: usize) {
        self.dispatch(Action::JumpTo(step));
    }
}

impl Default for GameController<NoopAnimator> {
    fn default() -> Self {
        Self::headless()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        moves: Vec<usize>,
        wins: usize,
    }

    impl Animator for Recorder {
        fn animate_move(&mut self, position: usize) {
            self.moves.push(position);
        }

        fn animate_win(&mut self) {
            self.wins += 1;
        }
    }

    #[test]
    fn test_accepted_move_animates_cell() {
        let mut controller = GameController::new(Recorder::default());
        controller.activate_cell(4);
        assert_eq!(controller.animator().moves, vec![4]);
        assert_eq!(controller.animator().wins, 0);
    }

    #[test]
    fn test_rejected_move_does_not_animate() {
        let mut controller = GameController::new(Recorder::default());
        controller.activate_cell(4);
        controller.activate_cell(4);
        controller.activate_cell(42);
        assert_eq!(controller.animator().moves, vec![4]);
    }

    #[test]
    fn test_win_celebrated_once() {
        let mut controller = GameController::new(Recorder::default());
        for i in [0, 3, 1, 4, 2] {
            controller.activate_cell(i);
        }
        assert_eq!(controller.animator().wins, 1);

        // Further clicks and re-selecting the same step change nothing.
        controller.activate_cell(8);
        controller.jump_to(5);
        assert_eq!(controller.animator().wins, 1);
        assert_eq!(controller.animator().moves, vec![0, 3, 1, 4, 2]);
    }

    #[test]
    fn test_jumping_back_to_win_celebrates_again() {
        let mut controller = GameController::new(Recorder::default());
        for i in [0, 3, 1, 4, 2] {
            controller.activate_cell(i);
        }
        controller.jump_to(2);
        assert_eq!(controller.animator().wins, 1);
        controller.jump_to(5);
        assert_eq!(controller.animator().wins, 2);
    }
}
