use crate::basic_types::Solution;
#[cfg(doc)]
use crate::search::termination::TerminationCondition;

/// The result of a call to [`BacktrackingSearch::satisfy`](super::BacktrackingSearch::satisfy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Indicates that a solution was found.
    Satisfiable(Solution),
    /// Indicates that there is no solution to the satisfaction problem.
    Unsatisfiable,
    /// Indicates that it is not known whether a solution exists, because a
    /// [`TerminationCondition`] triggered.
    Unknown,
}

/// How a call to
/// [`BacktrackingSearch::enumerate_solutions`](super::BacktrackingSearch::enumerate_solutions)
/// ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerationStatus {
    /// The whole search space was explored; every solution has been reported.
    Exhausted,
    /// The solution callback asked the search to stop.
    StoppedByCallback,
    /// A [`TerminationCondition`] triggered before the search space was exhausted.
    Terminated,
}
