//! Reversible domain state for the forward-checking solver.
//!
//! The context tracks, for every variable, which domain values are still
//! live and whether the variable is currently assigned. Pruning records
//! every cleared bit in a [`PruneLog`]; rewinding the log to a frame's
//! watermark restores the masks bit for bit, which is what makes the
//! recursive search's backtracking correct.

use crate::solver::problem::{Problem, VariableId};

/// A trail of pruned `(variable, value)` pairs.
///
/// One log serves an entire search: each recursion frame takes a
/// watermark with [`PruneLog::mark`] before pruning and later rewinds to
/// it with [`ForwardCheckContext::restore_to`]. This replaces a
/// per-frame set of pruned-value lists with a single growable stack.
#[derive(Debug, Default)]
pub struct PruneLog {
    records: Vec<(VariableId, usize)>,
}

impl PruneLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watermark for the current frame; pass it back to
    /// [`ForwardCheckContext::restore_to`] when the frame unwinds.
    pub fn mark(&self) -> usize {
        self.records.len()
    }

    /// Total number of prune records on the trail.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record(&mut self, variable: VariableId, value: usize) {
        self.records.push((variable, value));
    }
}

/// Live-value masks and assigned flags for one forward-checking search.
///
/// The masks live in a single flat buffer indexed through a per-variable
/// offset table. A context belongs to exactly one search; it is created
/// when the search starts and dropped when it ends.
#[derive(Debug)]
pub struct ForwardCheckContext {
    domain_sizes: Vec<usize>,
    offsets: Vec<usize>,
    live: Vec<bool>,
    assigned: Vec<bool>,
}

impl ForwardCheckContext {
    /// Builds a context for `problem` with every value live and every
    /// variable unassigned, then applies the problem's unary constraints:
    /// values they reject are pruned up front, and a variable they pin
    /// down to a single candidate starts the search already assigned.
    ///
    /// Unary pruning evaluates predicates with the same `data` the search
    /// itself will use.
    pub fn new<D: ?Sized>(problem: &Problem<D>, data: &D) -> Self {
        let num_variables = problem.num_variables();
        let mut domain_sizes = Vec::with_capacity(num_variables);
        let mut offsets = Vec::with_capacity(num_variables);
        let mut total = 0;
        for variable in 0..num_variables {
            let size = problem.domain(variable);
            domain_sizes.push(size);
            offsets.push(total);
            total += size;
        }

        let mut ctx = Self {
            domain_sizes,
            offsets,
            live: vec![true; total],
            assigned: vec![false; num_variables],
        };
        ctx.apply_unary_constraints(problem, data);
        ctx
    }

    fn apply_unary_constraints<D: ?Sized>(&mut self, problem: &Problem<D>, data: &D) {
        let mut touched = vec![false; self.num_variables()];
        let mut scratch = vec![0usize; self.num_variables()];

        for constraint in problem.constraints() {
            if constraint.arity() != 1 {
                continue;
            }
            let variable = constraint.variable(0);
            touched[variable] = true;
            for value in 0..self.domain_sizes[variable] {
                if !self.is_live(variable, value) {
                    continue;
                }
                scratch[variable] = value;
                if !constraint.check(&scratch, data) {
                    self.set_live(variable, value, false);
                }
            }
        }

        for variable in 0..self.num_variables() {
            if touched[variable] && self.live_count(variable) == 1 {
                self.assigned[variable] = true;
            }
        }
    }

    pub fn num_variables(&self) -> usize {
        self.domain_sizes.len()
    }

    /// The original domain size of `variable`, independent of pruning.
    pub fn domain_size(&self, variable: VariableId) -> usize {
        self.domain_sizes[variable]
    }

    pub fn is_live(&self, variable: VariableId, value: usize) -> bool {
        self.live[self.offsets[variable] + value]
    }

    fn set_live(&mut self, variable: VariableId, value: usize, live: bool) {
        let index = self.offsets[variable] + value;
        self.live[index] = live;
    }

    /// The number of values still live for `variable`.
    pub fn live_count(&self, variable: VariableId) -> usize {
        let start = self.offsets[variable];
        self.live[start..start + self.domain_sizes[variable]]
            .iter()
            .filter(|&&live| live)
            .count()
    }

    /// The live values of `variable` in ascending order.
    pub fn live_values(&self, variable: VariableId) -> impl Iterator<Item = usize> + '_ {
        (0..self.domain_sizes[variable]).filter(move |&value| self.is_live(variable, value))
    }

    /// The sole live value of `variable`, or `None` if zero or several
    /// values remain.
    pub fn single_live_value(&self, variable: VariableId) -> Option<usize> {
        let mut found = None;
        for value in self.live_values(variable) {
            if found.is_some() {
                return None;
            }
            found = Some(value);
        }
        found
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.assigned[variable]
    }

    pub fn set_assigned(&mut self, variable: VariableId, assigned: bool) {
        self.assigned[variable] = assigned;
    }

    pub fn all_assigned(&self) -> bool {
        self.assigned.iter().all(|&assigned| assigned)
    }

    /// Forward checking after `variable` was assigned: for every binary
    /// constraint linking it to an unassigned neighbour, test each of the
    /// neighbour's live values against the current assignment, clearing
    /// the failing ones and recording each on the log.
    ///
    /// Only arity-2 constraints take part; wider constraints are caught
    /// by the consistency check once their whole scope is assigned. The
    /// neighbour's assignment slot is used as scratch space.
    pub fn prune_neighbors<D: ?Sized>(
        &mut self,
        problem: &Problem<D>,
        assignment: &mut [usize],
        data: &D,
        variable: VariableId,
        log: &mut PruneLog,
    ) {
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
            if self.is_assigned(neighbor) {
                continue;
            }

            for candidate in 0..self.domain_sizes[neighbor] {
                if !self.is_live(neighbor, candidate) {
                    continue;
                }
                assignment[neighbor] = candidate;
                if !constraint.check(assignment, data) {
                    self.set_live(neighbor, candidate, false);
                    log.record(neighbor, candidate);
                }
            }
        }
    }

    /// Rewinds `log` to `mark`, restoring every value pruned since that
    /// watermark. Afterwards the live masks are bit-for-bit identical to
    /// their state when the watermark was taken.
    pub fn restore_to(&mut self, log: &mut PruneLog, mark: usize) {
        for (variable, value) in log.records.drain(mark..).rev() {
            self.set_live(variable, value, true);
        }
    }
}
