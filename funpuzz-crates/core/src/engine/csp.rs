use log::debug;

use super::Constraint;
use super::ConstraintId;
use super::DomainStore;
use super::VariableId;
use crate::basic_types::ConstraintOperationError;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationOutcome;
use crate::propagation::Propagator;

/// A finite-domain constraint satisfaction problem.
///
/// The structure (variables and constraints) is fixed once the model has been built; afterwards
/// only the current domains and the assignments change. The CSP keeps, for every variable, the
/// constraints whose scope contains it.
#[derive(Clone, Debug)]
pub struct Csp {
    name: String,
    domains: DomainStore,
    constraints: KeyedVec<ConstraintId, Constraint>,
    constraints_by_variable: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl Csp {
    pub fn new(name: impl Into<String>) -> Csp {
        Csp {
            name: name.into(),
            domains: DomainStore::default(),
            constraints: KeyedVec::default(),
            constraints_by_variable: KeyedVec::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a new variable with the given full domain.
    pub fn new_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = i32>,
    ) -> VariableId {
        let variable = self.domains.grow(name, domain);
        let _ = self.constraints_by_variable.push(Vec::new());
        variable
    }

    /// Add a constraint to the CSP.
    ///
    /// The scope has to be non-empty and consist of distinct variables of this CSP, and every
    /// satisfying tuple has to provide exactly one value per scope variable.
    pub fn add_constraint(
        &mut self,
        constraint: Constraint,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        if constraint.scope().is_empty() {
            return Err(ConstraintOperationError::EmptyScope {
                constraint: constraint.name().to_owned(),
            });
        }

        let mut seen: HashSet<VariableId> = HashSet::default();
        for &variable in constraint.scope() {
            if self.constraints_by_variable.get(variable).is_none() {
                return Err(ConstraintOperationError::UnknownVariable {
                    constraint: constraint.name().to_owned(),
                });
            }

            if !seen.insert(variable) {
                return Err(ConstraintOperationError::DuplicateVariable {
                    constraint: constraint.name().to_owned(),
                    variable: self.domains.name(variable).to_owned(),
                });
            }
        }

        if let Some(tuple) = constraint
            .tuples()
            .find(|tuple| tuple.len() != constraint.arity())
        {
            return Err(ConstraintOperationError::TupleArity {
                constraint: constraint.name().to_owned(),
                expected: constraint.arity(),
                actual: tuple.len(),
            });
        }

        debug!(
            "Adding constraint {constraint} with {} satisfying tuples",
            constraint.num_tuples()
        );

        let scope = constraint.scope().to_vec();
        let constraint_id = self.constraints.push(constraint);
        for variable in scope {
            self.constraints_by_variable[variable].push(constraint_id);
        }

        Ok(constraint_id)
    }

    /// The variables in creation order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.domains.variables()
    }

    pub fn num_variables(&self) -> usize {
        self.domains.num_variables()
    }

    pub fn variable_name(&self, variable: VariableId) -> &str {
        self.domains.name(variable)
    }

    /// The current domains and assignments of all variables.
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// All constraints in the order they were added.
    pub fn all_constraints(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// The constraints whose scope contains `variable`, in the order they were added.
    pub fn constraints_with(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable]
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint]
    }

    /// The number of unassigned variables in the scope of `constraint`.
    pub fn num_unassigned_in(&self, constraint: ConstraintId) -> usize {
        self.constraints[constraint].num_unassigned(&self.domains)
    }

    /// Assign `value` to `variable`; the value has to be in its current domain.
    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.domains.assign(variable, value)
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.domains.unassign(variable)
    }

    /// Put a value which was reported as pruned by a propagator back in the current domain.
    pub fn restore(&mut self, variable: VariableId, value: i32) {
        self.domains.restore(variable, value)
    }

    /// Unassign every variable and restore every current domain to the full domain.
    pub fn reset(&mut self) {
        self.domains.reset()
    }

    /// Run `propagator` on this CSP; `trigger` is the most recently assigned variable, or [`None`]
    /// before any assignment has been made.
    ///
    /// The outcome lists every value that was pruned, also when a dead end was detected.
    pub fn propagate<P: Propagator + ?Sized>(
        &mut self,
        propagator: &mut P,
        trigger: Option<VariableId>,
    ) -> PropagationOutcome {
        let mut context = PropagationContext::new(
            &self.constraints,
            &self.constraints_by_variable,
            &mut self.domains,
        );

        let status = propagator.propagate(&mut context, trigger);

        PropagationOutcome {
            status,
            pruned: context.into_pruned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_are_indexed_by_variable() {
        let mut csp = Csp::new("index");
        let x = csp.new_variable("x", 1..=2);
        let y = csp.new_variable("y", 1..=2);
        let z = csp.new_variable("z", 1..=2);

        let xy = csp
            .add_constraint(Constraint::new("xy", [x, y], [[1, 2], [2, 1]]))
            .expect("valid constraint");
        let yz = csp
            .add_constraint(Constraint::new("yz", [y, z], [[1, 2], [2, 1]]))
            .expect("valid constraint");

        assert_eq!(csp.constraints_with(x), &[xy]);
        assert_eq!(csp.constraints_with(y), &[xy, yz]);
        assert_eq!(csp.constraints_with(z), &[yz]);
        assert_eq!(csp.all_constraints().collect::<Vec<_>>(), vec![xy, yz]);
    }

    #[test]
    fn malformed_constraints_are_rejected() {
        let mut csp = Csp::new("malformed");
        let x = csp.new_variable("x", 1..=2);
        let unknown = VariableId::new(5);

        assert!(matches!(
            csp.add_constraint(Constraint::new("empty", [], [[0i32; 0]])),
            Err(ConstraintOperationError::EmptyScope { .. })
        ));
        assert!(matches!(
            csp.add_constraint(Constraint::new("unknown", [x, unknown], [[1, 1]])),
            Err(ConstraintOperationError::UnknownVariable { .. })
        ));
        assert!(matches!(
            csp.add_constraint(Constraint::new("duplicate", [x, x], [[1, 1]])),
            Err(ConstraintOperationError::DuplicateVariable { .. })
        ));
        assert!(matches!(
            csp.add_constraint(Constraint::new("arity", [x], [vec![1, 2]])),
            Err(ConstraintOperationError::TupleArity {
                expected: 1,
                actual: 2,
                ..
            })
        ));
        assert_eq!(csp.num_constraints(), 0);
    }

    #[test]
    fn scope_variables_only_have_to_differ_within_a_constraint() {
        let mut csp = Csp::new("shared");
        let x = csp.new_variable("x", 1..=2);
        let y = csp.new_variable("y", 1..=2);

        let first = csp
            .add_constraint(Constraint::new("x-y", [x, y], [[1, 2], [2, 1]]))
            .expect("distinct scope");
        let second = csp
            .add_constraint(Constraint::new("y-x", [y, x], [[1, 2]]))
            .expect("distinct scope");

        assert_eq!(csp.constraints_with(x), &[first, second]);
        assert!(matches!(
            csp.add_constraint(Constraint::new("y-y", [y, x, y], [[1, 2, 1]])),
            Err(ConstraintOperationError::DuplicateVariable { variable, .. }) if variable == "y"
        ));
    }

    #[test]
    fn unassigned_count_follows_assignments() {
        let mut csp = Csp::new("count");
        let x = csp.new_variable("x", 1..=2);
        let y = csp.new_variable("y", 1..=2);
        let c = csp
            .add_constraint(Constraint::new("xy", [x, y], [[1, 2], [2, 1]]))
            .expect("valid constraint");

        assert_eq!(csp.num_unassigned_in(c), 2);
        csp.assign(x, 1);
        assert_eq!(csp.num_unassigned_in(c), 1);
        csp.reset();
        assert_eq!(csp.num_unassigned_in(c), 2);
    }
}
