use std::fmt;

use crate::solver::{
    constraint::Constraint,
    strategy::{BacktrackingSearch, ForwardCheckingSearch, SearchStrategy},
};

/// A numeric identifier for a single variable in the constraint problem.
pub type VariableId = usize;
/// A numeric identifier for a constraint slot in the constraint problem.
pub type ConstraintId = usize;

/// A complete CSP instance: variables with their domain sizes, and a
/// fixed number of constraint slots filled once by the builder.
///
/// Variable `i` ranges over the integer domain `0..domain(i)`. Slots are
/// installed with [`Problem::set_constraint`] and never replaced; once
/// every slot is filled the problem is logically immutable and search
/// takes it by shared reference.
///
/// The type parameter `D` is the caller data handed to every predicate.
pub struct Problem<D: ?Sized> {
    domains: Vec<usize>,
    constraints: Vec<Option<Constraint<D>>>,
}

impl<D: ?Sized> Problem<D> {
    /// Creates a problem with `num_variables` variables (all domains
    /// empty until [`set_domain`](Problem::set_domain) is called) and
    /// `num_constraints` empty constraint slots.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` is zero.
    pub fn new(num_variables: usize, num_constraints: usize) -> Self {
        assert!(num_variables > 0, "a problem needs at least one variable");
        Self {
            domains: vec![0; num_variables],
            constraints: (0..num_constraints).map(|_| None).collect(),
        }
    }

    /// The number of variables.
    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// The number of constraint slots.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Sets the domain size of `variable`: its legal values become
    /// `0..size`.
    pub fn set_domain(&mut self, variable: VariableId, size: usize) {
        self.domains[variable] = size;
    }

    /// The domain size of `variable`.
    pub fn domain(&self, variable: VariableId) -> usize {
        self.domains[variable]
    }

    /// Installs `constraint` into `slot`, taking ownership of it.
    ///
    /// Every variable in the constraint's scope must exist in this
    /// problem; this is validated in debug builds.
    pub fn set_constraint(&mut self, slot: ConstraintId, constraint: Constraint<D>) {
        debug_assert!(
            constraint
                .scope()
                .iter()
                .all(|&variable| variable < self.num_variables()),
            "constraint scope references a variable outside the problem"
        );
        self.constraints[slot] = Some(constraint);
    }

    /// The constraint installed in `slot`, if any.
    pub fn constraint(&self, slot: ConstraintId) -> Option<&Constraint<D>> {
        self.constraints[slot].as_ref()
    }

    /// The installed constraints, in slot order.
    pub fn constraints(&self) -> impl Iterator<Item = &Constraint<D>> {
        self.constraints.iter().filter_map(Option::as_ref)
    }

    /// True iff every installed constraint whose scope lies entirely
    /// below `frontier` is satisfied by `assignment`.
    ///
    /// Constraints are evaluated in slot order and the first failure
    /// wins. Constraints mentioning any variable at or above the
    /// frontier are skipped, not treated as failing; this makes the
    /// check cheap to run incrementally after each assignment when
    /// variables are assigned in natural order.
    pub fn is_consistent(&self, assignment: &[usize], data: &D, frontier: usize) -> bool {
        for constraint in self.constraints() {
            if constraint.applies_below(frontier) && !constraint.check(assignment, data) {
                return false;
            }
        }
        true
    }

    /// Solves with plain chronological backtracking.
    ///
    /// On success returns `true` and leaves the solution in `assignment`;
    /// on failure returns `false` and leaves `assignment` unspecified.
    pub fn solve_backtracking(&self, assignment: &mut [usize], data: &D) -> bool {
        BacktrackingSearch.solve(self, assignment, data).0
    }

    /// Solves with forward checking under the MRV and LCV heuristics.
    ///
    /// Equivalent to running a default [`ForwardCheckingSearch`]; build
    /// one explicitly to swap heuristics or attach a cancellation token.
    pub fn solve_forward_checking(&self, assignment: &mut [usize], data: &D) -> bool {
        ForwardCheckingSearch::default().solve(self, assignment, data).0
    }
}

impl<D: ?Sized> fmt::Debug for Problem<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("domains", &self.domains)
            .field("constraints", &self.constraints)
            .finish()
    }
}
