use std::time::Duration;

use crate::statistics::StatisticBlock;

/// Statistics of a single run of the [`BacktrackingSearch`](super::BacktrackingSearch).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of assignments made by the search
    pub num_decisions: u64,
    /// The number of propagator calls which detected a dead end
    pub num_dead_ends: u64,
    /// The number of times the propagator was called, including the initial call
    pub num_propagator_calls: u64,
    /// The total number of values which were pruned by the propagator
    pub num_pruned_values: u64,
    /// The peak depth of the search tree
    pub peak_depth: u64,
    pub num_solutions: u64,
    /// The wall-clock time spent in the search.
    pub time_spent_in_search: Duration,
}

impl SearchStatistics {
    /// Add the statistics to `block`, which the caller may extend before logging it.
    pub fn add_to(&self, block: &mut StatisticBlock) {
        let _ = block
            .add("nodes", self.num_decisions)
            .add("failures", self.num_dead_ends)
            .add("propagations", self.num_propagator_calls)
            .add("pruned_values", self.num_pruned_values)
            .add("peak_depth", self.peak_depth)
            .add("solutions", self.num_solutions)
            .add("solve_time", self.time_spent_in_search.as_secs_f64());
    }
}
