//! Decorative animation capability.
//!
//! The controller announces moves and wins through [`Animator`]; what an
//! implementation draws, and for how long, is its own business. Game state
//! never depends on it.

use tracing::trace;

/// Fire-and-forget visual effects.
pub trait Animator {
    /// A mark was just placed on square `position` (0-8).
    fn animate_move(&mut self, position: usize);

    /// The displayed board just gained a winner.
    fn animate_win(&mut self);
}

/// Animator that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopAnimator;

impl Animator for NoopAnimator {
    fn animate_move(&mut self, position: usize) {
        trace!(position, "Move animation skipped");
    }

    fn animate_win(&mut self) {
        trace!("Win animation skipped");
    }
}
