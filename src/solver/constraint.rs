use std::fmt;

use crate::solver::problem::VariableId;

/// The verdict-producing half of a constraint.
///
/// A predicate receives the constraint it belongs to (so it can look up
/// the scope), the current assignment snapshot, and the caller data `D`
/// threaded through the solve call. It must answer purely from the
/// positions inside the constraint's scope: the solver calls it with
/// arbitrary scratch values at every other position.
///
/// Predicates cannot report errors; a predicate that must reject
/// pathologically invalid input should return `false`.
///
/// Any matching `Fn` implements this trait, so plain functions and
/// closures can be installed directly.
pub trait Predicate<D: ?Sized> {
    fn check(&self, constraint: &Constraint<D>, assignment: &[usize], data: &D) -> bool;
}

impl<D: ?Sized, F> Predicate<D> for F
where
    F: Fn(&Constraint<D>, &[usize], &D) -> bool,
{
    fn check(&self, constraint: &Constraint<D>, assignment: &[usize], data: &D) -> bool {
        self(constraint, assignment, data)
    }
}

/// A single constraint: an ordered scope of variables plus the predicate
/// that judges assignments to them.
///
/// The scope starts zero-initialised; callers fill it in position by
/// position with [`Constraint::set_variable`] before installing the
/// constraint into a [`Problem`](crate::solver::problem::Problem). Once
/// installed a constraint is never mutated again.
pub struct Constraint<D: ?Sized> {
    scope: Vec<VariableId>,
    predicate: Box<dyn Predicate<D>>,
}

impl<D: ?Sized> Constraint<D> {
    /// Creates a constraint over `arity` variables.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is zero: a constraint must range over at least
    /// one variable.
    pub fn new(arity: usize, predicate: impl Predicate<D> + 'static) -> Self {
        assert!(arity > 0, "a constraint must range over at least one variable");
        Self {
            scope: vec![0; arity],
            predicate: Box::new(predicate),
        }
    }

    /// The number of variables in the scope.
    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// The scope as an ordered slice of variable identifiers.
    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    /// Places `variable` at `position` in the scope.
    pub fn set_variable(&mut self, position: usize, variable: VariableId) {
        self.scope[position] = variable;
    }

    /// The variable at `position` in the scope.
    pub fn variable(&self, position: usize) -> VariableId {
        self.scope[position]
    }

    /// The predicate judging this constraint.
    pub fn predicate(&self) -> &dyn Predicate<D> {
        self.predicate.as_ref()
    }

    /// Runs the predicate against `assignment`.
    pub fn check(&self, assignment: &[usize], data: &D) -> bool {
        self.predicate.check(self, assignment, data)
    }

    /// True iff every variable in the scope lies below `frontier`.
    ///
    /// When variables are assigned in natural order, this is exactly the
    /// condition under which the constraint ranges only over variables
    /// that already carry meaningful values.
    pub fn applies_below(&self, frontier: usize) -> bool {
        self.scope.iter().all(|&variable| variable < frontier)
    }
}

impl<D: ?Sized> fmt::Debug for Constraint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
