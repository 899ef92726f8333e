//! The depth-first search which drives a [`Propagator`](crate::propagation::Propagator).
//!
//! The search resets the CSP, propagates once without a trigger variable and then recursively
//! assigns variables, calling the propagator after every assignment. The prunings reported by
//! the propagator are recorded per decision level and restored when the level is undone.
mod backtracking_search;
mod outputs;
mod search_statistics;
pub mod termination;

pub use backtracking_search::BacktrackingSearch;
pub use backtracking_search::SearchOptions;
pub use outputs::EnumerationStatus;
pub use outputs::SatisfactionResult;
pub use search_statistics::SearchStatistics;
