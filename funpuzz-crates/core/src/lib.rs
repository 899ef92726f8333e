//! # FunPuzz core
//! A small constraint-propagation engine for finite-domain constraint satisfaction problems whose
//! constraints are given extensionally, i.e. as tables of satisfying tuples.
//!
//! A [`Csp`] holds the variables (with their full and current domains) and the constraints,
//! indexed by the variables in their scope. Three interchangeable [`propagation::Propagator`]s
//! decide which values can be removed without losing a solution:
//! - [`propagation::Backtracking`] only checks constraints that became fully assigned;
//! - [`propagation::ForwardChecking`] prunes the last unassigned variable of a constraint;
//! - [`propagation::GeneralisedArcConsistency`] prunes every value without a supporting tuple,
//!   until a fixed point is reached.
//!
//! The [`search::BacktrackingSearch`] drives a depth-first search which calls the propagator after
//! every assignment and undoes the reported prunings on backtrack.
//!
//! # Example
//! ```rust
//! # use funpuzz_core::Constraint;
//! # use funpuzz_core::Csp;
//! # use funpuzz_core::propagation::PropagatorKind;
//! # use funpuzz_core::search::BacktrackingSearch;
//! # use funpuzz_core::search::SatisfactionResult;
//! # use funpuzz_core::search::SearchOptions;
//! # use funpuzz_core::search::termination::Indefinite;
//! let mut csp = Csp::new("example");
//! let x = csp.new_variable("x", 1..=3);
//! let y = csp.new_variable("y", 1..=3);
//!
//! // x < y, given as a table
//! let less_than = Constraint::new("x<y", [x, y], [[1, 2], [1, 3], [2, 3]]);
//! let _ = csp.add_constraint(less_than).expect("well-formed constraint");
//!
//! let options = SearchOptions {
//!     propagator: PropagatorKind::ForwardChecking,
//!     ..Default::default()
//! };
//! let mut search = BacktrackingSearch::new(&csp, options);
//!
//! match search.satisfy(&mut csp, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         assert!(solution.value(x) < solution.value(y));
//!     }
//!     _ => panic!("the problem has a solution"),
//! }
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub(crate) mod engine;
pub mod propagation;
pub mod search;
pub mod statistics;

pub use convert_case;
pub use rand;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Solution;
pub use crate::engine::Constraint;
pub use crate::engine::ConstraintId;
pub use crate::engine::Csp;
pub use crate::engine::DomainStore;
pub use crate::engine::VariableId;
