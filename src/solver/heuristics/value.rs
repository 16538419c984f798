use crate::solver::{
    context::ForwardCheckContext,
    problem::{Problem, VariableId},
};

/// A trait for strategies that determine the order in which a variable's
/// live values are tried.
///
/// The orderer may scribble on `assignment` at positions inside the
/// scopes it inspects (the driver overwrites the branched variable's slot
/// immediately afterwards anyway), but it must leave the context's masks
/// and flags untouched.
pub trait ValueOrderingHeuristic<D: ?Sized> {
    /// Returns the live values of `variable` in the order they should be
    /// tried.
    fn order_values(
        &self,
        problem: &Problem<D>,
        ctx: &ForwardCheckContext,
        assignment: &mut [usize],
        data: &D,
        variable: VariableId,
    ) -> Vec<usize>;
}

/// A baseline heuristic that returns the live values in ascending order.
pub struct AscendingValues;

impl<D: ?Sized> ValueOrderingHeuristic<D> for AscendingValues {
    fn order_values(
        &self,
        _problem: &Problem<D>,
        ctx: &ForwardCheckContext,
        _assignment: &mut [usize],
        _data: &D,
        variable: VariableId,
    ) -> Vec<usize> {
        ctx.live_values(variable).collect()
    }
}

/// Least Constraining Value: orders values by how many candidates they
/// rule out in unassigned neighbours, fewest first.
///
/// The conflict score of a candidate value is the number of live values
/// of neighbouring variables (those sharing a binary constraint with the
/// branched variable) that would violate such a constraint under the
/// candidate. Trying low-conflict values first leaves the most room for
/// future assignments. Only arity-2 constraints contribute to the score.
///
/// The sort is stable and candidates are scored in ascending order, so
/// equal scores keep ascending value order.
pub struct LeastConstrainingValue;

impl<D: ?Sized> ValueOrderingHeuristic<D> for LeastConstrainingValue {
    fn order_values(
        &self,
        problem: &Problem<D>,
        ctx: &ForwardCheckContext,
        assignment: &mut [usize],
        data: &D,
        variable: VariableId,
    ) -> Vec<usize> {
        let mut scored: Vec<(usize, usize)> = Vec::with_capacity(ctx.domain_size(variable));

        for value in 0..ctx.domain_size(variable) {
            if !ctx.is_live(variable, value) {
                continue;
            }
            assignment[variable] = value;

            let mut conflicts = 0;
            for constraint in problem.constraints() {
                if constraint.arity() != 2 {
                    continue;
                }
                let first = constraint.variable(0);
                let second = constraint.variable(1);
                let neighbor = if first == variable {
                    second
                } else if second == variable {
                    first
                } else {
                    continue;
                };
                if ctx.is_assigned(neighbor) {
                    continue;
                }

                for candidate in 0..ctx.domain_size(neighbor) {
                    if !ctx.is_live(neighbor, candidate) {
                        continue;
                    }
                    assignment[neighbor] = candidate;
                    if !constraint.check(assignment, data) {
                        conflicts += 1;
                    }
                }
            }
            scored.push((value, conflicts));
        }

        scored.sort_by_key(|&(_, conflicts)| conflicts);
        scored.into_iter().map(|(value, _)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::constraint::Constraint;

    fn sum_leq(constraint: &Constraint<usize>, assignment: &[usize], max: &usize) -> bool {
        assignment[constraint.variable(0)] + assignment[constraint.variable(1)] <= *max
    }

    fn sum_problem() -> Problem<usize> {
        let mut problem = Problem::new(2, 1);
        problem.set_domain(0, 3);
        problem.set_domain(1, 3);
        let mut constraint = Constraint::new(2, sum_leq);
        constraint.set_variable(0, 0);
        constraint.set_variable(1, 1);
        problem.set_constraint(0, constraint);
        problem
    }

    #[test]
    fn lcv_orders_by_conflict_count() {
        let problem = sum_problem();
        let ctx = ForwardCheckContext::new(&problem, &2);
        let mut assignment = [0usize; 2];

        // Against `a + b <= 2`: value 0 rules out nothing, value 1 rules
        // out {2}, value 2 rules out {1, 2}.
        let order =
            LeastConstrainingValue.order_values(&problem, &ctx, &mut assignment, &2, 0);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn lcv_sees_the_constraint_from_either_side() {
        let problem = sum_problem();
        let ctx = ForwardCheckContext::new(&problem, &2);
        let mut assignment = [0usize; 2];

        let order =
            LeastConstrainingValue.order_values(&problem, &ctx, &mut assignment, &2, 1);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn lcv_without_binary_constraints_keeps_ascending_order() {
        let mut problem: Problem<()> = Problem::new(1, 0);
        problem.set_domain(0, 4);
        let ctx = ForwardCheckContext::new(&problem, &());
        let mut assignment = [0usize; 1];

        let order = LeastConstrainingValue.order_values(&problem, &ctx, &mut assignment, &(), 0);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn lcv_ignores_assigned_neighbors() {
        let problem = sum_problem();
        let mut ctx = ForwardCheckContext::new(&problem, &2);
        ctx.set_assigned(1, true);
        let mut assignment = [0usize; 2];

        // With the only neighbour assigned, no constraint contributes and
        // the live values come back in ascending order.
        let order =
            LeastConstrainingValue.order_values(&problem, &ctx, &mut assignment, &2, 0);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn ascending_values_reports_live_values_only() {
        let problem = sum_problem();
        let ctx = ForwardCheckContext::new(&problem, &2);
        let mut assignment = [0usize; 2];
        let order = AscendingValues.order_values(&problem, &ctx, &mut assignment, &2, 0);
        assert_eq!(order, vec![0, 1, 2]);
    }
}
