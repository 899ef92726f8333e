mod constraint;
mod csp;
mod domain_store;

pub use constraint::Constraint;
pub use constraint::ConstraintId;
pub use csp::Csp;
pub use domain_store::DomainStore;
pub use domain_store::VariableId;
