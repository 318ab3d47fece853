//! The board state threaded through propagation and search.
//!
//! A `Board` maps every one of the 81 cells to its candidate set. It is
//! backed by a persistent map, so cloning at a search branch is cheap and a
//! write produces a new board instead of mutating the one a sibling branch
//! still holds.

use im::HashMap;

use crate::solver::{
    candidates::{Candidates, Digit},
    topology::Cell,
    trace::AssignmentSink,
};

/// A complete assignment of candidate sets to cells. Always 81 entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: HashMap<Cell, Candidates>,
}

impl Board {
    /// A board where every cell still admits all nine digits.
    pub fn blank() -> Self {
        Self {
            cells: Cell::all().map(|cell| (cell, Candidates::ALL)).collect(),
        }
    }

    pub fn candidates(&self, cell: Cell) -> Candidates {
        self.cells[&cell]
    }

    /// The solved digit of `cell`, if its candidate set is a singleton.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.candidates(cell).singleton()
    }

    /// A new board with `cell` set to `candidates`, bypassing the sink.
    #[must_use]
    pub fn set(&self, cell: Cell, candidates: Candidates) -> Self {
        Self {
            cells: self.cells.update(cell, candidates),
        }
    }

    /// The single write path used by the solving rules.
    ///
    /// Returns a new board with the cell updated, recording a snapshot in
    /// `sink` exactly when the write leaves the cell on a single value it
    /// did not hold before. Writing the value a cell already holds returns
    /// the board unchanged and records nothing.
    #[must_use]
    pub fn assign(
        &self,
        cell: Cell,
        candidates: Candidates,
        sink: &mut dyn AssignmentSink,
    ) -> Self {
        if self.candidates(cell) == candidates {
            return self.clone();
        }
        let next = self.set(cell, candidates);
        if candidates.is_singleton() {
            sink.record(&next);
        }
        next
    }

    pub fn solved_count(&self) -> usize {
        self.cells
            .values()
            .filter(|candidates| candidates.is_singleton())
            .count()
    }

    /// True when every cell's candidate set is a singleton.
    pub fn is_complete(&self) -> bool {
        self.cells.values().all(|candidates| candidates.is_singleton())
    }

    /// True when any cell's candidate set has emptied.
    pub fn has_contradiction(&self) -> bool {
        self.cells.values().any(|candidates| candidates.is_empty())
    }

    /// Selects the undetermined cell with the fewest remaining candidates.
    ///
    /// Ties are broken by row-major cell order (`A1` before `A2` before
    /// `B1`), scanning cells in enumeration order rather than map order so
    /// the choice is deterministic. Returns `None` when no cell has two or
    /// more candidates left.
    pub fn select_branch_cell(&self) -> Option<Cell> {
        Cell::all()
            .filter(|&cell| self.candidates(cell).len() > 1)
            .min_by_key(|&cell| self.candidates(cell).len())
    }
}
