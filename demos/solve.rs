use std::collections::BTreeMap;
use std::process::ExitCode;

use clap::Parser;
use nonet::solver::{
    display::render,
    parse::{grid_values, to_line},
    search::Solver,
    stats::render_stats_table,
    topology::{Cell, Variant},
    trace::AssignmentTrace,
};

/// The diagonal-variant puzzle solved when no grid is given.
const DEFAULT_PUZZLE: &str =
    "....2.7........5..14..........6.7...8.......4...1.8..........52..8........3.7....";

#[derive(Parser, Debug)]
#[command(
    name = "solve",
    about = "Solve a Sudoku grid with constraint propagation and backtracking search"
)]
struct Args {
    /// 81-cell grid: digits 1-9 for givens, '.' for blanks; other
    /// characters are skipped. Defaults to a diagonal-variant example.
    grid: Option<String>,

    /// Add the two main diagonals to the constraint units.
    #[arg(long)]
    diagonal: bool,

    /// Print per-rule statistics after solving.
    #[arg(long)]
    stats: bool,

    /// Print the line form of every intermediate single-value assignment.
    #[arg(long)]
    trace: bool,

    /// Emit the result as JSON instead of a rendered grid.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    // The built-in example only has a unique solution under diagonal rules.
    let diagonal = args.diagonal || args.grid.is_none();
    let grid = args.grid.as_deref().unwrap_or(DEFAULT_PUZZLE);
    let variant = if diagonal {
        Variant::Diagonal
    } else {
        Variant::Classic
    };

    let board = match grid_values(grid) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let solver = Solver::new(variant);
    let mut trace = AssignmentTrace::new();
    let (solution, stats) = solver.solve_with_sink(board, &mut trace);

    if args.trace {
        for (step, snapshot) in trace.snapshots().iter().enumerate() {
            println!("step {step:>3}: {}", to_line(snapshot));
        }
    }

    let Some(solution) = solution else {
        println!("No solution found.");
        return ExitCode::FAILURE;
    };

    if args.json {
        let cells: BTreeMap<String, u8> = Cell::all()
            .map(|cell| {
                let digit = solution.digit(cell).map(|d| d.get()).unwrap_or(0);
                (cell.to_string(), digit)
            })
            .collect();
        let payload = serde_json::json!({
            "solution": cells,
            "stats": &stats,
        });
        println!("{}", serde_json::to_string_pretty(&payload).expect("stats serialize"));
    } else {
        println!("{}", render(&solution));
    }

    if args.stats {
        println!(
            "Nodes visited: {}, backtracks: {}",
            stats.nodes_visited, stats.backtracks
        );
        println!("{}", render_stats_table(&stats));
    }

    ExitCode::SUCCESS
}
