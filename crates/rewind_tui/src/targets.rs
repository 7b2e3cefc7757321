//! Click targets registered while drawing.
//!
//! Every clickable widget records its screen area together with what a
//! click on it means. Mouse events are resolved against the targets from
//! the most recent frame.

use ratatui::layout::Rect;
use rewind_tictactoe::Action;

/// What a click lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Board square 0-8.
    Cell(usize),
    /// Move list entry for a history step.
    Step(usize),
}

impl Target {
    /// Action dispatched when this target is clicked.
    pub fn action(self) -> Action {
        match self {
            Target::Cell(index) => Action::ActivateCell(index),
            Target::Step(step) => Action::JumpTo(step),
        }
    }
}

/// Click targets of one frame, in drawing order.
#[derive(Debug, Clone, Default)]
pub struct Targets {
    regions: Vec<(Rect, Target)>,
}

impl Targets {
    /// Records `area` as clickable. Empty areas are skipped.
    pub fn register(&mut self, area: Rect, target: Target) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Target under the terminal cell at (`column`, `row`).
    ///
    /// Later registrations win where areas overlap.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| contains(*area, column, row))
            .map(|(_, target)| *target)
    }

    /// Area registered for `target`, if it was drawn.
    pub fn area_of(&self, target: Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if nothing is clickable.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
