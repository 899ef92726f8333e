use log::trace;

use super::DeadEnd;
use super::PropagationContext;
use super::PropagationStatus;
use super::Propagator;
use crate::engine::ConstraintId;
use crate::engine::VariableId;

/// Forward checking: for every constraint with exactly one unassigned variable, remove the values
/// of that variable which, together with the assigned values of the other variables, do not form
/// a satisfying tuple.
///
/// Before the first assignment every constraint with one unassigned variable is checked, which
/// includes all unary constraints. After an assignment only the constraints containing the
/// assigned variable are checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardChecking;

impl ForwardChecking {
    fn forward_check(
        context: &mut PropagationContext<'_>,
        constraint_id: ConstraintId,
    ) -> PropagationStatus {
        let constraint = context.constraint(constraint_id);

        let mut unassigned_positions = constraint
            .scope()
            .iter()
            .enumerate()
            .filter(|&(_, &variable)| !context.domains().is_assigned(variable))
            .map(|(position, _)| position);

        let Some(position) = unassigned_positions.next() else {
            return Ok(());
        };
        if unassigned_positions.next().is_some() {
            return Ok(());
        }

        let variable = constraint.scope()[position];
        let mut tuple = constraint
            .scope()
            .iter()
            .map(|&other| context.domains().assigned_value(other).unwrap_or_default())
            .collect::<Vec<_>>();
        let values = context.domains().current_domain(variable).collect::<Vec<_>>();

        for value in values {
            tuple[position] = value;
            if !constraint.check(&tuple) {
                trace!("{constraint} forward checks {variable} != {value}");
                context.prune(variable, value)?;
            }
        }

        if context.domains().current_domain_size(variable) == 0 {
            return Err(DeadEnd);
        }

        Ok(())
    }
}

impl Propagator for ForwardChecking {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(
        &mut self,
        context: &mut PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        let candidates = match trigger {
            Some(variable) => context.constraints_with(variable).to_vec(),
            None => context.all_constraints().collect(),
        };

        for constraint_id in candidates {
            ForwardChecking::forward_check(context, constraint_id)?;
        }

        Ok(())
    }
}
