//! Vincula is a general-purpose solver for finite-domain constraint
//! satisfaction problems (CSPs).
//!
//! A problem is a set of variables, each with a finite integer domain
//! `0..d`, and a set of constraints. Every constraint ranges over a fixed
//! tuple of variables and is characterised by a caller-supplied predicate
//! over the current assignment. A solution assigns one domain value to
//! every variable such that every predicate holds.
//!
//! # Core Concepts
//!
//! - **[`Problem`]**: the immutable-after-build description of variables,
//!   domain sizes and constraints.
//! - **[`Constraint`]** and **[`Predicate`]**: a constraint is a scope plus
//!   a predicate; any `Fn(&Constraint<D>, &[usize], &D) -> bool` is a
//!   predicate, so plain functions and closures both work.
//! - **[`SearchStrategy`]**: the algorithm that explores the search space.
//!   [`BacktrackingSearch`] is plain chronological backtracking;
//!   [`ForwardCheckingSearch`] prunes neighbour domains after every
//!   assignment and orders its choices with the MRV and LCV heuristics.
//!
//! [`Problem`]: solver::problem::Problem
//! [`Constraint`]: solver::constraint::Constraint
//! [`Predicate`]: solver::constraint::Predicate
//! [`SearchStrategy`]: solver::strategy::SearchStrategy
//! [`BacktrackingSearch`]: solver::strategy::BacktrackingSearch
//! [`ForwardCheckingSearch`]: solver::strategy::ForwardCheckingSearch
//!
//! # Example: two variables that must differ
//!
//! ```
//! use vincula::solver::constraint::Constraint;
//! use vincula::solver::problem::Problem;
//!
//! fn differ(constraint: &Constraint<()>, assignment: &[usize], _data: &()) -> bool {
//!     assignment[constraint.variable(0)] != assignment[constraint.variable(1)]
//! }
//!
//! let mut problem = Problem::new(2, 1);
//! problem.set_domain(0, 2);
//! problem.set_domain(1, 2);
//!
//! let mut constraint = Constraint::new(2, differ);
//! constraint.set_variable(0, 0);
//! constraint.set_variable(1, 1);
//! problem.set_constraint(0, constraint);
//!
//! let mut assignment = [0usize; 2];
//! assert!(problem.solve_forward_checking(&mut assignment, &()));
//! assert_ne!(assignment[0], assignment[1]);
//! ```
//!
//! Ready-made problem builders for Sudoku and n-queens live in
//! [`models`], and [`solver::predicates`] offers common constraint
//! constructors such as `not_equal`.

pub mod error;
pub mod models;
pub mod solver;
