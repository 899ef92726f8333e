use std::ops::ControlFlow;
use std::time::Instant;

use log::debug;
use log::info;

use super::termination::TerminationCondition;
use super::EnumerationStatus;
use super::SatisfactionResult;
use super::SearchStatistics;
use crate::basic_types::Solution;
use crate::basic_types::Trail;
use crate::branching::value_selection::ValueSelection;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::VariableSelection;
use crate::branching::variable_selection::VariableSelector;
use crate::engine::Csp;
use crate::engine::VariableId;
use crate::funpuzz_assert_eq_simple;
use crate::propagation::PropagationOutcome;
use crate::propagation::Propagator;
use crate::propagation::PropagatorKind;
use crate::propagation::Pruning;

/// The options of a [`BacktrackingSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// The propagator which is called after every assignment.
    pub propagator: PropagatorKind,
    pub variable_selection: VariableSelection,
    pub value_selection: ValueSelection,
    /// The seed of the random value selection.
    pub random_seed: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            propagator: PropagatorKind::default(),
            variable_selection: VariableSelection::default(),
            value_selection: ValueSelection::default(),
            random_seed: 42,
        }
    }
}

/// A depth-first search over the assignments of a [`Csp`].
///
/// Every call to [`BacktrackingSearch::satisfy`] or [`BacktrackingSearch::enumerate_solutions`]
/// starts from a reset CSP and leaves the CSP reset on return: no variable is assigned and every
/// current domain equals its full domain.
#[derive(Debug)]
pub struct BacktrackingSearch {
    propagator: Box<dyn Propagator>,
    variable_selector: Box<dyn VariableSelector>,
    value_selector: Box<dyn ValueSelector>,
    /// The prunings reported by the propagator, with one checkpoint per assignment.
    trail: Trail<Pruning>,
    statistics: SearchStatistics,
}

impl BacktrackingSearch {
    /// Create the search for `csp` with the components described by `options`.
    pub fn new(csp: &Csp, options: SearchOptions) -> BacktrackingSearch {
        let variables = csp.variables().collect::<Vec<_>>();

        BacktrackingSearch::with_components(
            options.propagator.create(),
            options.variable_selection.create(&variables),
            options.value_selection.create(options.random_seed),
        )
    }

    /// Create the search from explicitly constructed components.
    pub fn with_components(
        propagator: Box<dyn Propagator>,
        variable_selector: Box<dyn VariableSelector>,
        value_selector: Box<dyn ValueSelector>,
    ) -> BacktrackingSearch {
        BacktrackingSearch {
            propagator,
            variable_selector,
            value_selector,
            trail: Trail::default(),
            statistics: SearchStatistics::default(),
        }
    }

    /// The statistics of the most recent run.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Find a single solution of `csp`.
    pub fn satisfy(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        let mut first_solution = None;

        let status = self.enumerate_solutions(csp, termination, |solution| {
            first_solution = Some(solution.clone());
            ControlFlow::Break(())
        });

        match (first_solution, status) {
            (Some(solution), _) => SatisfactionResult::Satisfiable(solution),
            (None, EnumerationStatus::Terminated) => SatisfactionResult::Unknown,
            (None, _) => SatisfactionResult::Unsatisfiable,
        }
    }

    /// Report every solution of `csp` to `on_solution`, until the callback breaks, the
    /// termination condition triggers or the search space is exhausted.
    pub fn enumerate_solutions(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
        mut on_solution: impl FnMut(&Solution) -> ControlFlow<()>,
    ) -> EnumerationStatus {
        let started_at = Instant::now();

        csp.reset();
        self.trail.clear();
        self.statistics = SearchStatistics::default();

        info!(
            "Searching {} ({} variables, {} constraints) with {}",
            csp.name(),
            csp.num_variables(),
            csp.num_constraints(),
            self.propagator.name()
        );

        let outcome = csp.propagate(&mut self.propagator, None);
        let status = if self.record_propagation(outcome) {
            self.explore(csp, termination, &mut on_solution, 0)
        } else {
            debug!("Initial propagation detected a dead end");
            EnumerationStatus::Exhausted
        };

        csp.reset();
        self.trail.clear();
        self.statistics.time_spent_in_search = started_at.elapsed();

        info!(
            "Search finished ({status:?}) after {} decisions with {} solutions",
            self.statistics.num_decisions, self.statistics.num_solutions
        );
        status
    }

    /// Explore the subtree below the current assignment; `depth` is the number of assigned
    /// variables.
    fn explore(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
        on_solution: &mut impl FnMut(&Solution) -> ControlFlow<()>,
        depth: u64,
    ) -> EnumerationStatus {
        let Some(variable) = self.variable_selector.select_variable(csp) else {
            let solution = Solution::from_assigned(csp);
            self.statistics.num_solutions += 1;
            debug!("Found solution {solution}");

            return match on_solution(&solution) {
                ControlFlow::Continue(()) => EnumerationStatus::Exhausted,
                ControlFlow::Break(()) => EnumerationStatus::StoppedByCallback,
            };
        };

        for value in self.value_selector.order_values(csp, variable) {
            if termination.should_stop() {
                return EnumerationStatus::Terminated;
            }

            let status = self.decide(csp, termination, on_solution, depth, variable, value);
            if status != EnumerationStatus::Exhausted {
                return status;
            }
        }

        EnumerationStatus::Exhausted
    }

    /// Assign `value` to `variable`, propagate and explore the resulting subtree; the assignment
    /// and every pruning it caused are undone before returning.
    fn decide(
        &mut self,
        csp: &mut Csp,
        termination: &mut impl TerminationCondition,
        on_solution: &mut impl FnMut(&Solution) -> ControlFlow<()>,
        depth: u64,
        variable: VariableId,
        value: i32,
    ) -> EnumerationStatus {
        termination.decision_has_been_made();
        self.statistics.num_decisions += 1;
        self.statistics.peak_depth = self.statistics.peak_depth.max(depth + 1);
        debug!(
            "Decision at depth {}: {} = {value}",
            depth + 1,
            csp.variable_name(variable)
        );

        csp.assign(variable, value);
        self.trail.new_checkpoint();
        funpuzz_assert_eq_simple!(self.trail.get_checkpoint() as u64, depth + 1);

        let outcome = csp.propagate(&mut self.propagator, Some(variable));
        let status = if self.record_propagation(outcome) {
            self.explore(csp, termination, on_solution, depth + 1)
        } else {
            EnumerationStatus::Exhausted
        };

        for pruning in self.trail.synchronise(depth as usize) {
            csp.restore(pruning.variable, pruning.value);
        }
        csp.unassign(variable);

        status
    }

    /// Push the prunings of `outcome` on the trail; returns whether the CSP is still consistent.
    fn record_propagation(&mut self, outcome: PropagationOutcome) -> bool {
        self.statistics.num_propagator_calls += 1;
        self.statistics.num_pruned_values += outcome.pruned.len() as u64;

        for pruning in outcome.pruned {
            self.trail.push(pruning);
        }

        if outcome.status.is_err() {
            self.statistics.num_dead_ends += 1;
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::propagation::test_helpers::grid_2x2;
    use crate::propagation::test_helpers::not_equals;
    use crate::propagation::GeneralisedArcConsistency;
    use crate::search::termination::DecisionBudget;
    use crate::search::termination::Indefinite;

    const ALL_PROPAGATORS: [PropagatorKind; 3] = [
        PropagatorKind::Backtracking,
        PropagatorKind::ForwardChecking,
        PropagatorKind::Gac,
    ];

    fn options(propagator: PropagatorKind) -> SearchOptions {
        SearchOptions {
            propagator,
            variable_selection: VariableSelection::InputOrder,
            ..Default::default()
        }
    }

    fn assert_pristine(csp: &Csp) {
        for variable in csp.variables() {
            assert!(!csp.domains().is_assigned(variable));
            assert_eq!(
                csp.domains().current_domain_size(variable),
                csp.domains().full_domain(variable).len()
            );
        }
    }

    #[test]
    fn grid_is_solved_by_every_propagator() {
        for propagator in ALL_PROPAGATORS {
            let (mut csp, cells) = grid_2x2();
            let mut search = BacktrackingSearch::new(&csp, options(propagator));

            let result = search.satisfy(&mut csp, &mut Indefinite);

            let SatisfactionResult::Satisfiable(solution) = result else {
                panic!("expected a solution with {propagator}, got {result:?}");
            };
            let values = cells.map(|cell| solution.value(cell));
            assert_eq!(values, [1, 2, 2, 1], "propagator {propagator}");
            assert_pristine(&csp);
        }
    }

    #[test]
    fn pigeonhole_is_unsatisfiable() {
        for propagator in ALL_PROPAGATORS {
            let mut csp = Csp::new("pigeonhole");
            let x = csp.new_variable("x", 1..=2);
            let y = csp.new_variable("y", 1..=2);
            let z = csp.new_variable("z", 1..=2);
            for (a, b) in [(x, y), (x, z), (y, z)] {
                let _ = csp
                    .add_constraint(not_equals(a, b, 1..=2))
                    .expect("valid constraint");
            }

            let mut search = BacktrackingSearch::new(&csp, options(propagator));
            let result = search.satisfy(&mut csp, &mut Indefinite);

            assert_eq!(result, SatisfactionResult::Unsatisfiable, "{propagator}");
            assert_pristine(&csp);
        }
    }

    #[test]
    fn every_solution_is_enumerated() {
        for propagator in ALL_PROPAGATORS {
            let (mut csp, cells) = grid_2x2();
            let mut search = BacktrackingSearch::new(&csp, options(propagator));

            let mut solutions = Vec::new();
            let status = search.enumerate_solutions(&mut csp, &mut Indefinite, |solution| {
                solutions.push(cells.map(|cell| solution.value(cell)));
                ControlFlow::Continue(())
            });

            assert_eq!(status, EnumerationStatus::Exhausted);
            assert_eq!(solutions, vec![[1, 2, 2, 1], [2, 1, 1, 2]], "{propagator}");
            assert_eq!(search.statistics().num_solutions, 2);
            assert_pristine(&csp);
        }
    }

    #[test]
    fn callback_can_stop_the_enumeration() {
        let (mut csp, _) = grid_2x2();
        let mut search = BacktrackingSearch::new(&csp, SearchOptions::default());

        let status =
            search.enumerate_solutions(&mut csp, &mut Indefinite, |_| ControlFlow::Break(()));

        assert_eq!(status, EnumerationStatus::StoppedByCallback);
        assert_eq!(search.statistics().num_solutions, 1);
        assert_pristine(&csp);
    }

    #[test]
    fn exhausted_decision_budget_gives_unknown() {
        let (mut csp, _) = grid_2x2();
        let mut search = BacktrackingSearch::new(&csp, SearchOptions::default());

        let result = search.satisfy(&mut csp, &mut DecisionBudget::new(0));

        assert_eq!(result, SatisfactionResult::Unknown);
        assert_eq!(search.statistics().num_decisions, 0);
        assert_pristine(&csp);
    }

    #[test]
    fn initial_propagation_prunes_unary_constraints() {
        let mut csp = Csp::new("unary");
        let x = csp.new_variable("x", 1..=3);
        let _ = csp
            .add_constraint(crate::Constraint::unary("x=2", x, [2]))
            .expect("valid constraint");

        let mut search = BacktrackingSearch::with_components(
            Box::new(GeneralisedArcConsistency::with_deduplication()),
            Box::new(InputOrder::new(&[x])),
            Box::new(InDomainMin),
        );
        let result = search.satisfy(&mut csp, &mut Indefinite);

        let SatisfactionResult::Satisfiable(solution) = result else {
            panic!("expected a solution, got {result:?}");
        };
        assert_eq!(solution.value(x), 2);
        assert_eq!(search.statistics().num_pruned_values, 2);
        assert_eq!(search.statistics().num_decisions, 1);
        assert_eq!(search.statistics().peak_depth, 1);
    }

    #[test]
    fn backtracking_needs_more_decisions_than_gac() {
        let decisions = |propagator| {
            let mut csp = Csp::new("chain");
            let x = csp.new_variable("x", 1..=3);
            let y = csp.new_variable("y", 1..=3);
            let z = csp.new_variable("z", 1..=3);
            for (a, b) in [(x, y), (y, z)] {
                let _ = csp
                    .add_constraint(crate::Constraint::new(
                        "less-than",
                        [a, b],
                        [[1, 2], [1, 3], [2, 3]],
                    ))
                    .expect("valid constraint");
            }

            let mut search = BacktrackingSearch::new(&csp, options(propagator));
            let _ = search.satisfy(&mut csp, &mut Indefinite);
            search.statistics().num_decisions
        };

        assert_eq!(decisions(PropagatorKind::Gac), 3);
        assert!(decisions(PropagatorKind::Backtracking) > 3);
    }
}
