use thiserror::Error;

#[cfg(doc)]
use crate::Csp;

/// Errors related to adding constraints to a [`Csp`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// The scope of the constraint is empty.
    #[error("Constraint '{constraint}' has an empty scope")]
    EmptyScope { constraint: String },
    /// The scope of the constraint mentions a variable which was not created by the [`Csp`].
    #[error("Constraint '{constraint}' refers to a variable which is not part of the CSP")]
    UnknownVariable { constraint: String },
    /// The same variable occurs more than once in the scope of the constraint.
    #[error("Constraint '{constraint}' contains variable '{variable}' more than once")]
    DuplicateVariable {
        constraint: String,
        variable: String,
    },
    /// A satisfying tuple does not have one value for every variable in the scope.
    #[error("Constraint '{constraint}' has a tuple of length {actual}, expected {expected}")]
    TupleArity {
        constraint: String,
        expected: usize,
        actual: usize,
    },
}
