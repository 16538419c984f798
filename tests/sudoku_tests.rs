//! Integration tests for the Sudoku model on the forward-checking solver.

use vincula::{
    models::sudoku,
    solver::{
        cancel::CancelToken,
        strategy::{ForwardCheckingSearch, SearchStrategy},
    },
};

const CLASSIC_PUZZLE: &str = "\
    53..7....\n\
    6..195...\n\
    .98....6.\n\
    8...6...3\n\
    4..8.3..1\n\
    7...2...6\n\
    .6....28.\n\
    ...419..5\n\
    ....8..79\n";

fn assert_grid_is_valid(assignment: &[usize]) {
    for row in 0..sudoku::SIZE {
        for col1 in 0..sudoku::SIZE {
            for col2 in col1 + 1..sudoku::SIZE {
                assert_ne!(
                    assignment[row * sudoku::SIZE + col1],
                    assignment[row * sudoku::SIZE + col2],
                    "duplicate in row {row}"
                );
                assert_ne!(
                    assignment[col1 * sudoku::SIZE + row],
                    assignment[col2 * sudoku::SIZE + row],
                    "duplicate in column {row}"
                );
            }
        }
    }
    for block in 0..sudoku::SIZE {
        let base = (block / 3) * 27 + (block % 3) * 3;
        for i in 0..sudoku::SIZE {
            for j in i + 1..sudoku::SIZE {
                let cell_i = base + (i / 3) * sudoku::SIZE + i % 3;
                let cell_j = base + (j / 3) * sudoku::SIZE + j % 3;
                assert_ne!(
                    assignment[cell_i], assignment[cell_j],
                    "duplicate in block {block}"
                );
            }
        }
    }
}

#[test]
fn solves_the_classic_puzzle_and_preserves_its_clues() {
    let _ = tracing_subscriber::fmt::try_init();

    let grid = sudoku::parse_grid(CLASSIC_PUZZLE).unwrap();
    let problem = sudoku::build_problem();
    let mut assignment = vec![0usize; sudoku::CELLS];

    let strategy = ForwardCheckingSearch::default();
    let (solved, stats) = strategy.solve(&problem, &mut assignment, &grid);
    assert!(solved);
    assert_grid_is_valid(&assignment);

    for (cell, &digit) in grid.iter().enumerate() {
        if digit != 0 {
            assert_eq!(assignment[cell], (digit - 1) as usize, "clue at cell {cell}");
        }
    }

    assert!(stats.nodes_visited >= 51, "one frame per blank cell at least");
}

#[test]
fn a_contradictory_puzzle_is_unsatisfiable() {
    // Two 5s in the first row.
    let bad = CLASSIC_PUZZLE.replacen("53..7....", "53..7...5", 1);
    let grid = sudoku::parse_grid(&bad).unwrap();
    let problem = sudoku::build_problem();
    let mut assignment = vec![0usize; sudoku::CELLS];

    assert!(!problem.solve_forward_checking(&mut assignment, &grid));
}

#[test]
fn a_cancelled_solve_reports_failure_with_the_flag_observable() {
    let grid = sudoku::parse_grid(CLASSIC_PUZZLE).unwrap();
    let problem = sudoku::build_problem();
    let mut assignment = vec![0usize; sudoku::CELLS];

    let token = CancelToken::new();
    token.cancel();
    let strategy = ForwardCheckingSearch::default().with_cancel_token(token.clone());
    let (solved, _) = strategy.solve(&problem, &mut assignment, &grid);
    assert!(!solved);
    assert!(token.is_cancelled());
}

#[test]
fn the_solved_grid_renders_with_the_original_clues_in_place() {
    let grid = sudoku::parse_grid(CLASSIC_PUZZLE).unwrap();
    let problem = sudoku::build_problem();
    let mut assignment = vec![0usize; sudoku::CELLS];
    assert!(problem.solve_forward_checking(&mut assignment, &grid));

    let rendered = sudoku::format_solution(&assignment);
    let first_row: String = rendered.lines().nth(1).unwrap().to_string();
    assert!(first_row.starts_with("| 5 3 "));
}
