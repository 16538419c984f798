//! Places n queens with both strategies and reports their statistics.
//!
//! The board size comes from the first argument, defaulting to 8.

use std::{env, process::ExitCode, time::Instant};

use vincula::{
    models::queens,
    solver::{
        stats::render_stats_table,
        strategy::{BacktrackingSearch, ForwardCheckingSearch, SearchStrategy},
    },
};

fn print_board(assignment: &[usize]) {
    let n = assignment.len();
    for &col in assignment {
        let mut row = vec!['.'; n];
        row[col] = 'Q';
        println!("{}", row.iter().collect::<String>());
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let n = match env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("board size must be a positive integer, got {arg:?}");
                return ExitCode::FAILURE;
            }
        },
        None => 8,
    };

    let problem = queens::build_problem(n);
    println!("Solving N-Queens for N={n}");

    let mut assignment = vec![0usize; n];
    let start = Instant::now();
    let (solved, stats) = ForwardCheckingSearch::default().solve(&problem, &mut assignment, &());
    println!(
        "\nForward checking: {} in {:.2?}",
        if solved { "solved" } else { "no solution" },
        start.elapsed()
    );
    println!("{}", render_stats_table(&stats));

    let start = Instant::now();
    let (solved, stats) = BacktrackingSearch.solve(&problem, &mut assignment, &());
    println!(
        "Backtracking: {} in {:.2?}",
        if solved { "solved" } else { "no solution" },
        start.elapsed()
    );
    println!("{}", render_stats_table(&stats));

    if solved {
        print_board(&assignment);
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
