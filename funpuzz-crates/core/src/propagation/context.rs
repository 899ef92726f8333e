use super::DeadEnd;
use super::Pruning;
use crate::containers::KeyedVec;
use crate::engine::Constraint;
use crate::engine::ConstraintId;
use crate::engine::DomainStore;
use crate::engine::VariableId;

/// The view of a [`Csp`](crate::Csp) which is handed to a
/// [`Propagator`](super::Propagator).
///
/// It gives read access to the constraints and domains, and allows pruning values; every pruned
/// value is recorded.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    constraints: &'a KeyedVec<ConstraintId, Constraint>,
    constraints_by_variable: &'a KeyedVec<VariableId, Vec<ConstraintId>>,
    domains: &'a mut DomainStore,
    pruned: Vec<Pruning>,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(
        constraints: &'a KeyedVec<ConstraintId, Constraint>,
        constraints_by_variable: &'a KeyedVec<VariableId, Vec<ConstraintId>>,
        domains: &'a mut DomainStore,
    ) -> PropagationContext<'a> {
        PropagationContext {
            constraints,
            constraints_by_variable,
            domains,
            pruned: Vec::new(),
        }
    }

    /// All constraints of the CSP, in the order they were added.
    pub fn all_constraints(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    /// The constraints whose scope contains `variable`.
    pub fn constraints_with(&self, variable: VariableId) -> &'a [ConstraintId] {
        let constraints_by_variable = self.constraints_by_variable;
        &constraints_by_variable[variable]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &'a Constraint {
        let constraints = self.constraints;
        &constraints[constraint]
    }

    pub fn domains(&self) -> &DomainStore {
        &*self.domains
    }

    /// See [`Constraint::has_support`].
    pub fn has_support(&self, constraint: ConstraintId, variable: VariableId, value: i32) -> bool {
        self.constraint(constraint)
            .has_support(self.domains(), variable, value)
    }

    /// Remove `value` from the current domain of `variable` and record the removal.
    ///
    /// Returns [`DeadEnd`] if the current domain is empty afterwards; the removal is recorded
    /// either way.
    pub fn prune(&mut self, variable: VariableId, value: i32) -> Result<(), DeadEnd> {
        self.domains.prune(variable, value);
        self.pruned.push(Pruning { variable, value });

        if self.domains.current_domain_size(variable) == 0 {
            Err(DeadEnd)
        } else {
            Ok(())
        }
    }

    pub(crate) fn into_pruned(self) -> Vec<Pruning> {
        self.pruned
    }
}
