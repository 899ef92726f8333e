use log::trace;

use super::ConstraintQueue;
use super::PropagationContext;
use super::PropagationStatus;
use super::Propagator;
use crate::engine::VariableId;

/// Enforces generalised arc consistency (GAC).
///
/// A worklist of constraints is processed in FIFO order. For the constraint at the front, every
/// value of every unassigned scope variable is checked for support (see
/// [`Constraint::has_support`](crate::Constraint::has_support)); unsupported values are pruned,
/// after which every other constraint on the pruned variable is appended to the worklist, since
/// it may have lost the support of some of its values. The propagator stops at a fixed point or
/// as soon as a domain becomes empty.
///
/// Before the first assignment the worklist starts with every constraint of the CSP; after an
/// assignment it starts with the constraints containing the assigned variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneralisedArcConsistency {
    deduplicate: bool,
}

impl GeneralisedArcConsistency {
    /// A variant which does not enqueue a constraint that is already waiting in the worklist.
    ///
    /// This reaches the same fixed point, but values may be pruned in a different order.
    pub fn with_deduplication() -> Self {
        GeneralisedArcConsistency { deduplicate: true }
    }
}

impl Propagator for GeneralisedArcConsistency {
    fn name(&self) -> &str {
        "GeneralisedArcConsistency"
    }

    fn propagate(
        &mut self,
        context: &mut PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        let mut queue = ConstraintQueue::new(self.deduplicate);
        match trigger {
            Some(variable) => context
                .constraints_with(variable)
                .iter()
                .for_each(|&constraint_id| queue.enqueue(constraint_id)),
            None => context
                .all_constraints()
                .for_each(|constraint_id| queue.enqueue(constraint_id)),
        }

        while let Some(constraint_id) = queue.pop() {
            let constraint = context.constraint(constraint_id);
            let variables = constraint
                .unassigned_scope_variables(context.domains())
                .collect::<Vec<_>>();

            for variable in variables {
                let values = context.domains().current_domain(variable).collect::<Vec<_>>();

                for value in values {
                    if context.has_support(constraint_id, variable, value) {
                        continue;
                    }

                    trace!("{constraint} has no support for {variable} = {value}");
                    context.prune(variable, value)?;

                    context
                        .constraints_with(variable)
                        .iter()
                        .filter(|&&other| other != constraint_id)
                        .for_each(|&other| queue.enqueue(other));
                }
            }

            trace!("{} constraints left to revise", queue.len());
        }

        Ok(())
    }
}
