use crate::solver::{context::ForwardCheckContext, problem::VariableId};

/// A trait for strategies that select the next variable to branch on
/// during search.
pub trait VariableSelectionHeuristic {
    /// Selects an unassigned variable from the context.
    ///
    /// # Returns
    ///
    /// * `Some(VariableId)` of an unassigned variable, if any exist.
    /// * `None` if every variable is already assigned.
    fn select_variable(&self, ctx: &ForwardCheckContext) -> Option<VariableId>;
}

/// A simple heuristic that selects the first unassigned variable it finds.
pub struct SelectFirstUnassigned;

impl VariableSelectionHeuristic for SelectFirstUnassigned {
    fn select_variable(&self, ctx: &ForwardCheckContext) -> Option<VariableId> {
        (0..ctx.num_variables()).find(|&variable| !ctx.is_assigned(variable))
    }
}

/// Minimum Remaining Values: selects the unassigned variable with the
/// fewest live candidates.
///
/// This is a "fail-first" strategy, aiming to tackle the most constrained
/// parts of the problem early. Ties break to the lowest identifier, which
/// keeps the search deterministic.
pub struct MinRemainingValues;

impl VariableSelectionHeuristic for MinRemainingValues {
    fn select_variable(&self, ctx: &ForwardCheckContext) -> Option<VariableId> {
        let mut best: Option<(VariableId, usize)> = None;
        for variable in 0..ctx.num_variables() {
            if ctx.is_assigned(variable) {
                continue;
            }
            let count = ctx.live_count(variable);
            match best {
                Some((_, best_count)) if best_count <= count => {}
                _ => best = Some((variable, count)),
            }
        }
        best.map(|(variable, _)| variable)
    }
}
