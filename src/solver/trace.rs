//! The assignment audit trail.
//!
//! Instead of a process-wide log, the engine takes a sink by reference at the
//! search root and every board snapshot flows through it. Callers that want a
//! trace pass an [`AssignmentTrace`]; everyone else gets
//! [`DiscardAssignments`] for free. A sink failure cannot invalidate a
//! computed solution: recording is infallible and happens off the result
//! path.

use crate::solver::board::Board;

/// Receives a board snapshot each time a cell settles on a single value it
/// did not already hold.
pub trait AssignmentSink {
    fn record(&mut self, snapshot: &Board);
}

/// Ignores every assignment. Used by [`Solver::solve`].
///
/// [`Solver::solve`]: crate::solver::search::Solver::solve
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardAssignments;

impl AssignmentSink for DiscardAssignments {
    fn record(&mut self, _snapshot: &Board) {}
}

/// Accumulates the ordered sequence of single-value assignment snapshots,
/// suitable for stepping through a solve in an external visualizer.
#[derive(Debug, Default, Clone)]
pub struct AssignmentTrace {
    snapshots: Vec<Board>,
}

impl AssignmentTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl AssignmentSink for AssignmentTrace {
    fn record(&mut self, snapshot: &Board) {
        self.snapshots.push(snapshot.clone());
    }
}
