mod constraint_operation_error;
mod solution;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub use solution::Solution;
pub(crate) use trail::Trail;
