//! Contains the [`Propagator`] trait and the three propagation strategies.
//!
//! A propagator is called by the search once before any assignment is made and once after every
//! new assignment. It may only remove values from the current domains of unassigned variables,
//! never assign or restore; every value it removes is reported back through the
//! [`PropagationOutcome`] so the search can restore it on backtrack.
mod backtracking;
mod constraint_queue;
mod context;
mod forward_checking;
mod generalised_arc_consistency;

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

pub use backtracking::Backtracking;
pub(crate) use constraint_queue::ConstraintQueue;
pub use context::PropagationContext;
pub use forward_checking::ForwardChecking;
pub use generalised_arc_consistency::GeneralisedArcConsistency;

use crate::engine::VariableId;

/// The result of invoking a propagator: either the CSP may still have a solution, or a
/// [`DeadEnd`] was detected.
pub type PropagationStatus = Result<(), DeadEnd>;

/// Indicates that the current assignment cannot be extended to a solution; either a fully
/// assigned constraint is violated or a current domain became empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeadEnd;

/// The removal of `value` from the current domain of `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pruning {
    pub variable: VariableId,
    pub value: i32,
}

impl Display for Pruning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} != {}]", self.variable, self.value)
    }
}

/// What a call to [`Csp::propagate`](crate::Csp::propagate) reports back to the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropagationOutcome {
    pub status: PropagationStatus,
    /// Every value which was pruned during the call, in the order in which it was pruned. This is
    /// also filled when a dead end was detected.
    pub pruned: Vec<Pruning>,
}

impl PropagationOutcome {
    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }
}

/// A propagation strategy.
///
/// The three implementations in this module are interchangeable; the search selects one for the
/// whole run (see [`PropagatorKind`]).
pub trait Propagator: Debug {
    /// A short name, used for logging.
    fn name(&self) -> &str;

    /// Remove values which cannot be part of a solution.
    ///
    /// `trigger` is the variable which was assigned most recently; it is [`None`] when the
    /// propagator is invoked before the first assignment.
    ///
    /// Values have to be pruned through [`PropagationContext::prune`], which records them. A
    /// value may only be pruned if it is in the current domain.
    fn propagate(
        &mut self,
        context: &mut PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus;
}

impl<P: Propagator + ?Sized> Propagator for Box<P> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn propagate(
        &mut self,
        context: &mut PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        self.as_mut().propagate(context, trigger)
    }
}

/// The available propagation strategies, ordered by strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagatorKind {
    /// Only check constraints which became fully assigned.
    Backtracking,
    /// Prune the last unassigned variable of every constraint.
    ForwardChecking,
    /// Enforce generalised arc consistency.
    #[default]
    Gac,
}

impl PropagatorKind {
    pub fn create(self) -> Box<dyn Propagator> {
        match self {
            PropagatorKind::Backtracking => Box::new(Backtracking),
            PropagatorKind::ForwardChecking => Box::new(ForwardChecking),
            PropagatorKind::Gac => Box::new(GeneralisedArcConsistency::default()),
        }
    }
}

impl Display for PropagatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagatorKind::Backtracking => write!(f, "backtracking"),
            PropagatorKind::ForwardChecking => write!(f, "forward-checking"),
            PropagatorKind::Gac => write!(f, "gac"),
        }
    }
}
