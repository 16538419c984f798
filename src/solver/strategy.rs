use tracing::debug;

use crate::solver::{
    cancel::CancelToken,
    context::{ForwardCheckContext, PruneLog},
    engine::SearchStats,
    heuristics::{
        value::{LeastConstrainingValue, ValueOrderingHeuristic},
        variable::{MinRemainingValues, VariableSelectionHeuristic},
    },
    problem::Problem,
};

/// A search algorithm over a fully built [`Problem`].
///
/// On success the solution is left in `assignment` and the Boolean is
/// `true`; on failure (unsatisfiable, or cancelled for strategies that
/// support it) the Boolean is `false` and `assignment` is unspecified.
pub trait SearchStrategy<D: ?Sized> {
    fn solve(&self, problem: &Problem<D>, assignment: &mut [usize], data: &D)
        -> (bool, SearchStats);
}

/// Plain chronological backtracking: variables in natural order, values
/// ascending, no pruning.
///
/// After each tentative assignment the partial solution is checked
/// against every constraint whose scope is fully assigned; inconsistent
/// branches are abandoned immediately. This strategy does not poll a
/// cancellation token.
pub struct BacktrackingSearch;

impl BacktrackingSearch {
    fn backtrack<D: ?Sized>(
        &self,
        problem: &Problem<D>,
        assignment: &mut [usize],
        data: &D,
        index: usize,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;
        if index == problem.num_variables() {
            return true;
        }

        for value in 0..problem.domain(index) {
            assignment[index] = value;
            if problem.is_consistent(assignment, data, index + 1)
                && self.backtrack(problem, assignment, data, index + 1, stats)
            {
                return true;
            }
            stats.backtracks += 1;
        }

        false
    }
}

impl<D: ?Sized> SearchStrategy<D> for BacktrackingSearch {
    fn solve(
        &self,
        problem: &Problem<D>,
        assignment: &mut [usize],
        data: &D,
    ) -> (bool, SearchStats) {
        assert!(
            assignment.len() >= problem.num_variables(),
            "assignment slice shorter than the variable count"
        );
        let mut stats = SearchStats::default();
        let solved = self.backtrack(problem, assignment, data, 0, &mut stats);
        debug!(solved, nodes = stats.nodes_visited, "backtracking search finished");
        (solved, stats)
    }
}

enum Outcome {
    Solved,
    Exhausted,
    Cancelled,
}

/// Forward-checking search.
///
/// After every assignment the domains of unassigned neighbours are pruned
/// of values that can no longer take part in a solution, so dead branches
/// fail close to the root. Variables are picked by a
/// [`VariableSelectionHeuristic`] (MRV by default) and values ordered by
/// a [`ValueOrderingHeuristic`] (LCV by default).
///
/// A [`CancelToken`] attached with
/// [`with_cancel_token`](ForwardCheckingSearch::with_cancel_token) is
/// polled at the top of every recursion frame; a cancelled search unwinds
/// cleanly and reports `false`.
pub struct ForwardCheckingSearch<D: ?Sized> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<D>>,
    cancel: CancelToken,
}

impl<D: ?Sized> ForwardCheckingSearch<D> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<D>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            cancel: CancelToken::new(),
        }
    }

    /// Attaches a shared cancellation token.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Consistency check keyed on the context's assigned flags.
    ///
    /// Unlike the frontier-based oracle used by plain backtracking, a
    /// constraint participates here iff every variable in its scope
    /// carries the assigned flag: the variable heuristic hands out
    /// variables in arbitrary order, so a frontier index says nothing
    /// about which positions hold meaningful values.
    fn consistent_with_assigned(
        problem: &Problem<D>,
        assignment: &[usize],
        data: &D,
        ctx: &ForwardCheckContext,
    ) -> bool {
        for constraint in problem.constraints() {
            if constraint
                .scope()
                .iter()
                .all(|&variable| ctx.is_assigned(variable))
                && !constraint.check(assignment, data)
            {
                return false;
            }
        }
        true
    }

    fn search(
        &self,
        problem: &Problem<D>,
        assignment: &mut [usize],
        data: &D,
        ctx: &mut ForwardCheckContext,
        log: &mut PruneLog,
        stats: &mut SearchStats,
    ) -> Outcome {
        if self.cancel.is_cancelled() {
            return Outcome::Cancelled;
        }
        if ctx.all_assigned() {
            return Outcome::Solved;
        }
        stats.nodes_visited += 1;

        let Some(variable) = self.variable_heuristic.select_variable(ctx) else {
            return Outcome::Solved;
        };
        let order = self
            .value_heuristic
            .order_values(problem, ctx, assignment, data, variable);

        for value in order {
            assignment[variable] = value;
            ctx.set_assigned(variable, true);

            if !Self::consistent_with_assigned(problem, assignment, data, ctx) {
                ctx.set_assigned(variable, false);
                stats.backtracks += 1;
                continue;
            }

            let mark = log.mark();
            ctx.prune_neighbors(problem, assignment, data, variable, log);
            stats.values_pruned += (log.len() - mark) as u64;

            match self.search(problem, assignment, data, ctx, log, stats) {
                Outcome::Solved => return Outcome::Solved,
                Outcome::Cancelled => {
                    ctx.restore_to(log, mark);
                    ctx.set_assigned(variable, false);
                    return Outcome::Cancelled;
                }
                Outcome::Exhausted => {
                    ctx.restore_to(log, mark);
                    ctx.set_assigned(variable, false);
                    stats.backtracks += 1;
                }
            }
        }

        Outcome::Exhausted
    }
}

impl<D: ?Sized> Default for ForwardCheckingSearch<D> {
    fn default() -> Self {
        Self::new(Box::new(MinRemainingValues), Box::new(LeastConstrainingValue))
    }
}

impl<D: ?Sized> SearchStrategy<D> for ForwardCheckingSearch<D> {
    fn solve(
        &self,
        problem: &Problem<D>,
        assignment: &mut [usize],
        data: &D,
    ) -> (bool, SearchStats) {
        assert!(
            assignment.len() >= problem.num_variables(),
            "assignment slice shorter than the variable count"
        );

        let mut ctx = ForwardCheckContext::new(problem, data);
        // Unary constraints may have collapsed variables to a single
        // candidate; those values must be visible in the assignment
        // before the first consistency check.
        for variable in 0..problem.num_variables() {
            if ctx.is_assigned(variable) {
                if let Some(value) = ctx.single_live_value(variable) {
                    assignment[variable] = value;
                }
            }
        }

        let mut log = PruneLog::new();
        let mut stats = SearchStats::default();
        let outcome = self.search(problem, assignment, data, &mut ctx, &mut log, &mut stats);
        let solved = matches!(outcome, Outcome::Solved);
        debug!(
            solved,
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            pruned = stats.values_pruned,
            "forward-checking search finished"
        );
        (solved, stats)
    }
}
