//! The reduction rules and the fixed-point propagation loop.
//!
//! `eliminate` and `only_choice` run together inside [`reduce`] until the
//! solved-cell count stops rising. `naked_twins` lives here too but is
//! applied by the search engine to each freshly branched board rather than
//! inside the fixed point; see the search module for the interleaving.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::solver::{
    board::Board,
    candidates::{Candidates, Digit},
    search::SolveStats,
    topology::{Cell, Topology},
    trace::AssignmentSink,
};

/// Tags attributing propagation work to a rule in [`SolveStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    Eliminate,
    OnlyChoice,
    NakedTwins,
}

/// Removes each solved cell's digit from all of that cell's peers.
///
/// Only cells already solved when the pass starts are propagated; cells that
/// become singletons during the pass are picked up by the next iteration of
/// [`reduce`]. A peer may shrink to a singleton or, on a contradictory
/// board, to empty — the caller checks for that.
pub fn eliminate(
    topology: &Topology,
    board: Board,
    sink: &mut dyn AssignmentSink,
    stats: &mut SolveStats,
) -> Board {
    let started = Instant::now();
    let mut board = board;
    let mut prunings = 0;

    let solved_at_entry: Vec<Cell> = Cell::all()
        .filter(|&cell| board.candidates(cell).is_singleton())
        .collect();
    for cell in solved_at_entry {
        // Re-read the digit: an earlier removal in this pass may have
        // emptied this cell, in which case there is nothing to propagate.
        let Some(digit) = board.candidates(cell).singleton() else {
            continue;
        };
        for &peer in topology.peers(cell) {
            let candidates = board.candidates(peer);
            if candidates.contains(digit) {
                board = board.assign(peer, candidates.remove(digit), sink);
                prunings += 1;
            }
        }
    }

    stats.record_rule(Rule::Eliminate, prunings, started.elapsed());
    board
}

/// Fixes any cell that is the only place in one of its units a digit can go.
pub fn only_choice(
    topology: &Topology,
    board: Board,
    sink: &mut dyn AssignmentSink,
    stats: &mut SolveStats,
) -> Board {
    let started = Instant::now();
    let mut board = board;
    let mut prunings = 0;

    for unit in topology.units() {
        for digit in Digit::all() {
            let places: Vec<Cell> = unit
                .iter()
                .copied()
                .filter(|&cell| board.candidates(cell).contains(digit))
                .collect();
            if let [cell] = places[..] {
                if !board.candidates(cell).is_singleton() {
                    prunings += 1;
                }
                board = board.assign(cell, Candidates::only(digit), sink);
            }
        }
    }

    stats.record_rule(Rule::OnlyChoice, prunings, started.elapsed());
    board
}

/// Runs `eliminate` and `only_choice` to a fixed point.
///
/// The loop repeats until a full application of both rules fails to
/// increase the number of solved cells. After each application, an emptied
/// candidate set anywhere on the board terminates the loop with `None`, the
/// contradiction signal the search engine backtracks on. Rules are always
/// applied in full; the loop never exits partway through one.
pub fn reduce(
    topology: &Topology,
    board: Board,
    sink: &mut dyn AssignmentSink,
    stats: &mut SolveStats,
) -> Option<Board> {
    let mut board = board;
    let mut stalled = false;
    while !stalled {
        let solved_before = board.solved_count();
        board = eliminate(topology, board, sink, stats);
        board = only_choice(topology, board, sink, stats);
        stalled = board.solved_count() == solved_before;
        if board.has_contradiction() {
            debug!("candidate set emptied, reporting contradiction");
            return None;
        }
    }
    debug!(solved = board.solved_count(), "propagation reached a fixed point");
    Some(board)
}

/// Applies the naked-twins pruning rule once across every unit.
///
/// When exactly two cells in a unit hold the identical two-candidate set,
/// those two digits are stripped from every other cell in the unit. A cell
/// whose own set is not that exact pair loses the digits even if it was
/// already solved to one of them; the resulting empty set surfaces as a
/// contradiction in the next reduce.
pub fn naked_twins(
    topology: &Topology,
    board: Board,
    sink: &mut dyn AssignmentSink,
    stats: &mut SolveStats,
) -> Board {
    let started = Instant::now();
    let mut board = board;
    let mut prunings = 0;

    for unit in topology.units() {
        // Pair counts in first-seen order, so processing is deterministic.
        let mut pairs: Vec<(Candidates, u8)> = Vec::new();
        for &cell in unit {
            let candidates = board.candidates(cell);
            if candidates.len() == 2 {
                match pairs.iter_mut().find(|(pair, _)| *pair == candidates) {
                    Some((_, count)) => *count += 1,
                    None => pairs.push((candidates, 1)),
                }
            }
        }
        for (pair, count) in pairs {
            if count != 2 {
                continue;
            }
            for &cell in unit {
                let candidates = board.candidates(cell);
                if candidates == pair {
                    continue;
                }
                let mut reduced = candidates;
                for digit in pair.iter() {
                    reduced = reduced.remove(digit);
                }
                if reduced != candidates {
                    board = board.assign(cell, reduced, sink);
                    prunings += 1;
                }
            }
        }
    }

    stats.record_rule(Rule::NakedTwins, prunings, started.elapsed());
    board
}
