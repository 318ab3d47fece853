//! Nonet is a Sudoku solving engine built on constraint propagation and
//! depth-first backtracking search.
//!
//! The engine models the classic 9×9 puzzle, plus an optional variant that
//! adds the two main diagonals as constraint units. Solving interleaves two
//! layers: a propagation loop that repeatedly applies reduction rules
//! (elimination and only-choice) until the board stops improving, and a
//! backtracking search that branches on the most constrained cell whenever
//! propagation stalls, pruning each fresh branch with the naked-twins rule.
//!
//! # Core Concepts
//!
//! - **[`Topology`]**: the static structure of the puzzle — cells, the
//!   groups of nine cells that must each contain every digit ("units"), and
//!   each cell's peers. Built once per variant and read-only afterwards.
//! - **[`Board`]**: the single mutable value threaded through solving — a
//!   persistent map from every cell to its remaining candidate digits.
//!   Branches clone it cheaply; sibling branches never share state.
//! - **[`Solver`]**: the engine. Feed it a parsed board and it returns
//!   either a fully assigned board or `None` when the search space is
//!   exhausted, together with statistics about the run.
//!
//! # Example
//!
//! ```
//! use nonet::solver::{parse::to_line, search::Solver, topology::Variant};
//!
//! let puzzle = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//! let solver = Solver::new(Variant::Classic);
//! let (solution, _stats) = solver.solve_grid(puzzle).unwrap();
//!
//! let solution = solution.expect("puzzle has a solution");
//! assert!(solution.is_complete());
//! assert_eq!(to_line(&solution).len(), 81);
//! ```
//!
//! [`Topology`]: solver::topology::Topology
//! [`Board`]: solver::board::Board
//! [`Solver`]: solver::search::Solver
pub mod error;
pub mod solver;
