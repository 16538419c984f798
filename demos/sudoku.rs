//! Solves a Sudoku puzzle with the forward-checking solver.
//!
//! Pass a puzzle file as the first argument (81 cells in row-major order,
//! digits for clues and `.` or `0` for blanks), or run without arguments
//! to solve a built-in puzzle.

use std::{env, fs, process::ExitCode};

use vincula::{
    models::sudoku,
    solver::{
        stats::render_stats_table,
        strategy::{ForwardCheckingSearch, SearchStrategy},
    },
};

const DEFAULT_PUZZLE: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79
";

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let input = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("cannot read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_PUZZLE.to_string(),
    };

    let grid = match sudoku::parse_grid(&input) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            return ExitCode::FAILURE;
        }
    };

    let problem = sudoku::build_problem();
    let strategy = ForwardCheckingSearch::default();
    let mut assignment = vec![0usize; sudoku::CELLS];
    let (solved, stats) = strategy.solve(&problem, &mut assignment, &grid);

    if solved {
        println!("{}", sudoku::format_solution(&assignment));
        println!("{}", render_stats_table(&stats));
        ExitCode::SUCCESS
    } else {
        eprintln!("no solution found");
        ExitCode::FAILURE
    }
}
