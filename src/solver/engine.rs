use crate::solver::{problem::Problem, strategy::SearchStrategy};

/// Holds statistics for the entire search process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    /// The total number of nodes (states) visited in the search tree.
    pub nodes_visited: u64,
    /// The total number of times the search backtracked.
    pub backtracks: u64,
    /// The total number of values removed from live domains by forward
    /// checking. Always zero for plain backtracking.
    pub values_pruned: u64,
}

/// The main engine for solving constraint satisfaction problems.
///
/// The `Solver` is a thin facade over a configurable
/// [`SearchStrategy`]: it takes a fully built problem plus a
/// caller-owned assignment buffer and delegates the entire solving
/// process to the strategy it was created with.
pub struct Solver<D: ?Sized> {
    strategy: Box<dyn SearchStrategy<D>>,
}

impl<D: ?Sized> Solver<D> {
    /// Creates a new `Solver` with the specified search strategy.
    pub fn new(strategy: Box<dyn SearchStrategy<D>>) -> Self {
        Self { strategy }
    }

    /// Attempts to solve the given problem.
    ///
    /// # Arguments
    ///
    /// * `problem`: the problem to solve; must be fully built.
    /// * `assignment`: a buffer with capacity for every variable. On
    ///   success it holds the solution; otherwise its contents are
    ///   unspecified.
    /// * `data`: caller data passed through to every predicate.
    ///
    /// # Returns
    ///
    /// `(true, stats)` if a solution was found, `(false, stats)` if the
    /// problem is unsatisfiable or the strategy was cancelled.
    pub fn solve(
        &self,
        problem: &Problem<D>,
        assignment: &mut [usize],
        data: &D,
    ) -> (bool, SearchStats) {
        self.strategy.solve(problem, assignment, data)
    }
}
