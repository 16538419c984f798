//! N-queens as a CSP: one variable per row holding the queen's column.

use crate::solver::{constraint::Constraint, problem::Problem};

fn compatible(constraint: &Constraint<()>, assignment: &[usize], _data: &()) -> bool {
    let row0 = constraint.variable(0);
    let row1 = constraint.variable(1);
    let col0 = assignment[row0];
    let col1 = assignment[row1];
    // Distinct columns and distinct diagonals.
    col0 != col1 && row0 + col1 != row1 + col0 && row0 + col0 != row1 + col1
}

/// Builds the n-queens problem: `n` variables with domain `n` and one
/// binary compatibility constraint per pair of rows.
pub fn build_problem(n: usize) -> Problem<()> {
    let mut problem = Problem::new(n, n * (n - 1) / 2);
    for row in 0..n {
        problem.set_domain(row, n);
    }

    let mut slot = 0;
    for row0 in 0..n {
        for row1 in row0 + 1..n {
            let mut constraint = Constraint::new(2, compatible);
            constraint.set_variable(0, row0);
            constraint.set_variable(1, row1);
            problem.set_constraint(slot, constraint);
            slot += 1;
        }
    }
    problem
}

/// True iff `assignment` places `n` mutually non-attacking queens.
pub fn is_valid_placement(assignment: &[usize]) -> bool {
    let n = assignment.len();
    for row0 in 0..n {
        for row1 in row0 + 1..n {
            let col0 = assignment[row0];
            let col1 = assignment[row1];
            if col0 == col1 || row1 - row0 == col0.abs_diff(col1) {
                return false;
            }
        }
    }
    true
}
