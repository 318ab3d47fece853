//! Depth-first backtracking search over candidate assignments.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::{
    error::Result,
    solver::{
        board::Board,
        candidates::Candidates,
        parse,
        propagate::{self, Rule},
        topology::{Topology, Variant},
        trace::{AssignmentSink, DiscardAssignments},
    },
};

/// Work attributed to a single reduction rule.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PerRuleStats {
    /// Full passes of the rule over the board.
    pub applications: u64,
    /// Cells whose candidate set the rule shrank.
    pub prunings: u64,
    pub time_spent_micros: u64,
}

/// Counters describing one solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolveStats {
    /// Search nodes entered, including the root.
    pub nodes_visited: u64,
    /// Candidate branches abandoned after a contradiction below them.
    pub backtracks: u64,
    pub rule_stats: HashMap<Rule, PerRuleStats>,
}

impl SolveStats {
    pub(crate) fn record_rule(&mut self, rule: Rule, prunings: u64, elapsed: Duration) {
        let entry = self.rule_stats.entry(rule).or_default();
        entry.applications += 1;
        entry.prunings += prunings;
        entry.time_spent_micros += elapsed.as_micros() as u64;
    }
}

/// The solving engine for one puzzle variant.
///
/// A `Solver` owns the unit/peer topology and runs the interleaved
/// propagate-and-branch procedure: reduce the board to a fixed point, and if
/// that neither solves it nor contradicts it, branch on the cell with the
/// fewest remaining candidates and recurse on an owned clone per candidate
/// digit. The first branch that reaches a fully assigned board wins;
/// siblings of a successful branch are never explored.
pub struct Solver {
    topology: Topology,
}

impl Solver {
    pub fn new(variant: Variant) -> Self {
        Self {
            topology: Topology::new(variant),
        }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves a board, discarding the assignment trail.
    ///
    /// Returns the solved board, or `None` once every branch of the search
    /// space has ended in contradiction — the explicit "unsolvable" value,
    /// never conflated with a partially reduced board.
    pub fn solve(&self, board: Board) -> (Option<Board>, SolveStats) {
        self.solve_with_sink(board, &mut DiscardAssignments)
    }

    /// Solves a board, recording every single-value assignment in `sink`.
    pub fn solve_with_sink(
        &self,
        board: Board,
        sink: &mut dyn AssignmentSink,
    ) -> (Option<Board>, SolveStats) {
        let mut stats = SolveStats::default();
        let solution = self.search(board, sink, &mut stats);
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "search finished"
        );
        (solution, stats)
    }

    /// Parses a grid string and solves it.
    pub fn solve_grid(&self, grid: &str) -> Result<(Option<Board>, SolveStats)> {
        let board = parse::grid_values(grid)?;
        Ok(self.solve(board))
    }

    fn search(
        &self,
        board: Board,
        sink: &mut dyn AssignmentSink,
        stats: &mut SolveStats,
    ) -> Option<Board> {
        stats.nodes_visited += 1;

        let board = propagate::reduce(&self.topology, board, sink, stats)?;
        if board.is_complete() {
            return Some(board);
        }

        let Some(cell) = board.select_branch_cell() else {
            // Unreachable when the board is incomplete, but harmless.
            return Some(board);
        };

        for digit in board.candidates(cell).iter() {
            let guess = board.assign(cell, Candidates::only(digit), sink);
            let pruned = propagate::naked_twins(&self.topology, guess, sink, stats);
            if let Some(found) = self.search(pruned, sink, stats) {
                return Some(found);
            }
            stats.backtracks += 1;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::{
        candidates::Digit,
        parse::{grid_values, to_line},
        topology::Cell,
        trace::AssignmentTrace,
    };

    const EASY: &str =
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const CLASSIC_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    const HARD: &str =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
    const DIAGONAL: &str =
        "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";

    /// Checks that every unit of `topology` covers the digits 1–9 exactly
    /// once and that the solution keeps every given of `puzzle`.
    pub(super) fn is_valid_solution(topology: &Topology, puzzle: &str, solution: &Board) -> bool {
        for unit in topology.units() {
            let mut seen = [false; 9];
            for &cell in unit {
                let Some(digit) = solution.digit(cell) else {
                    return false;
                };
                let slot = &mut seen[digit.get() as usize - 1];
                if *slot {
                    return false;
                }
                *slot = true;
            }
        }
        let givens = grid_values(puzzle).unwrap();
        Cell::all().all(|cell| match givens.digit(cell) {
            Some(digit) => solution.digit(cell) == Some(digit),
            None => true,
        })
    }

    #[test]
    fn solves_the_classic_puzzle_to_its_known_solution() {
        let _ = tracing_subscriber::fmt::try_init();

        let solver = Solver::new(Variant::Classic);
        let (solution, _stats) = solver.solve_grid(CLASSIC).unwrap();
        let solution = solution.unwrap();

        assert!(solution.is_complete());
        assert_eq!(to_line(&solution), CLASSIC_SOLUTION);
    }

    #[test]
    fn hard_puzzle_requires_branching_and_still_solves() {
        let _ = tracing_subscriber::fmt::try_init();

        let solver = Solver::new(Variant::Classic);
        let (solution, stats) = solver.solve_grid(HARD).unwrap();
        let solution = solution.unwrap();

        assert!(solution.is_complete());
        assert!(is_valid_solution(solver.topology(), HARD, &solution));
        assert!(stats.nodes_visited > 1, "expected search beyond the root");
    }

    #[test]
    fn duplicate_givens_in_a_row_are_unsolvable() {
        let _ = tracing_subscriber::fmt::try_init();

        // The classic puzzle with a second 5 dropped into row A.
        let conflicted = format!("53..7...5{}", &CLASSIC[9..]);
        let solver = Solver::new(Variant::Classic);
        let (solution, _stats) = solver.solve_grid(&conflicted).unwrap();
        assert!(solution.is_none());
    }

    #[test]
    fn diagonal_variant_solves_the_sparse_diagonal_puzzle() {
        let _ = tracing_subscriber::fmt::try_init();

        let solver = Solver::new(Variant::Diagonal);
        let (solution, _stats) = solver.solve_grid(DIAGONAL).unwrap();
        let solution = solution.unwrap();

        assert!(solution.is_complete());
        assert!(is_valid_solution(solver.topology(), DIAGONAL, &solution));
    }

    #[test]
    fn trace_collects_monotone_snapshots_on_a_propagation_only_solve() {
        let solver = Solver::new(Variant::Classic);
        let board = grid_values(EASY).unwrap();

        let mut trace = AssignmentTrace::new();
        let (solution, _stats) = solver.solve_with_sink(board, &mut trace);
        assert!(solution.is_some());

        assert!(!trace.is_empty());
        let counts: Vec<usize> = trace
            .snapshots()
            .iter()
            .map(Board::solved_count)
            .collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(trace.snapshots().last().unwrap().is_complete());
    }

    #[test]
    fn stats_attribute_work_to_rules() {
        let solver = Solver::new(Variant::Classic);
        let (_solution, stats) = solver.solve_grid(HARD).unwrap();

        let eliminate = stats.rule_stats[&Rule::Eliminate];
        assert!(eliminate.applications > 0);
        assert!(eliminate.prunings > 0);
        // Naked twins run once per branched state, so a search-heavy solve
        // records applications for it too.
        assert!(stats.rule_stats[&Rule::NakedTwins].applications > 0);
    }
}
