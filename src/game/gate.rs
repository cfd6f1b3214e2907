use tracing::trace;

use crate::model::Direction;

/// Holds the pending direction between ticks.
///
/// Proposals are checked against the direction the engine last moved in, not
/// against earlier proposals, so any number of key presses between two ticks
/// can never add up to a reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionGate {
    pending: Direction,
}

impl DirectionGate {
    pub fn new(initial: Direction) -> Self {
        Self { pending: initial }
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn reset(&mut self, dir: Direction) {
        self.pending = dir;
    }

    /// Accepts `requested` unless it reverses `last_applied`.
    pub fn propose(&mut self, requested: Direction, last_applied: Direction) -> Option<Direction> {
        if requested == last_applied.opposite() {
            trace!(?requested, ?last_applied, "reversal dropped");
            return None;
        }
        self.pending = requested;
        Some(requested)
    }
}
