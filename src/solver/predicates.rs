//! Ready-made constraint constructors for the most common relations.

use crate::solver::{
    constraint::Constraint,
    problem::VariableId,
};

/// Builds the binary constraint `a != b`.
pub fn not_equal<D: ?Sized + 'static>(a: VariableId, b: VariableId) -> Constraint<D> {
    fn check<D: ?Sized>(constraint: &Constraint<D>, assignment: &[usize], _data: &D) -> bool {
        assignment[constraint.variable(0)] != assignment[constraint.variable(1)]
    }

    let mut constraint = Constraint::new(2, check::<D>);
    constraint.set_variable(0, a);
    constraint.set_variable(1, b);
    constraint
}

/// Builds the unary constraint pinning `variable` to `value`.
pub fn fixed_value<D: ?Sized + 'static>(variable: VariableId, value: usize) -> Constraint<D> {
    let mut constraint = Constraint::new(
        1,
        move |c: &Constraint<D>, assignment: &[usize], _data: &D| {
            assignment[c.variable(0)] == value
        },
    );
    constraint.set_variable(0, variable);
    constraint
}
