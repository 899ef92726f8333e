use log::trace;

use super::DeadEnd;
use super::PropagationContext;
use super::PropagationStatus;
use super::Propagator;
use crate::engine::VariableId;

/// Plain backtracking: no values are pruned, only the constraints which became fully assigned by
/// the most recent assignment are checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct Backtracking;

impl Propagator for Backtracking {
    fn name(&self) -> &str {
        "Backtracking"
    }

    fn propagate(
        &mut self,
        context: &mut PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        // Before the first assignment no constraint can be fully assigned.
        let Some(variable) = trigger else {
            return Ok(());
        };

        for &constraint_id in context.constraints_with(variable) {
            let constraint = context.constraint(constraint_id);

            let Some(values) = constraint.assigned_values(context.domains()) else {
                continue;
            };

            if !constraint.check(&values) {
                trace!("{constraint} is violated by {values:?}");
                return Err(DeadEnd);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagation::test_helpers::grid_2x2;

    #[test]
    fn seeding_does_nothing() {
        let (mut csp, _) = grid_2x2();

        let outcome = csp.propagate(&mut Backtracking, None);

        assert!(outcome.is_consistent());
        assert!(outcome.pruned.is_empty());
    }

    #[test]
    fn violated_row_is_a_dead_end() {
        let (mut csp, [cell00, cell01, _, _]) = grid_2x2();

        csp.assign(cell00, 1);
        let first = csp.propagate(&mut Backtracking, Some(cell00));
        assert!(first.is_consistent());

        csp.assign(cell01, 1);
        let second = csp.propagate(&mut Backtracking, Some(cell01));

        assert_eq!(second.status, Err(DeadEnd));
        assert!(second.pruned.is_empty());
    }

    #[test]
    fn partially_assigned_constraints_are_not_checked() {
        let (mut csp, [cell00, _, cell10, _]) = grid_2x2();

        csp.assign(cell00, 2);
        let outcome = csp.propagate(&mut Backtracking, Some(cell00));

        assert!(outcome.is_consistent());
        assert!(outcome.pruned.is_empty());
        assert_eq!(csp.domains().current_domain_size(cell10), 2);
    }

    #[test]
    fn satisfied_constraints_pass() {
        let (mut csp, [cell00, cell01, _, _]) = grid_2x2();

        csp.assign(cell00, 1);
        csp.assign(cell01, 2);
        let outcome = csp.propagate(&mut Backtracking, Some(cell01));

        assert!(outcome.is_consistent());
    }
}
