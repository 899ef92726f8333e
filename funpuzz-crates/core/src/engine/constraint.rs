use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

use super::DomainStore;
use super::VariableId;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::containers::StorageKey;

/// The identifier of a [`Constraint`] which has been added to a [`Csp`](crate::Csp).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(u32);

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId(index as u32)
    }
}

/// An extensional constraint: an ordered scope of variables together with the set of tuples which
/// satisfy it.
///
/// The `i`-th value of a tuple belongs to the `i`-th variable of the scope. For example, the
/// constraint `x != y` over the domain `{1, 2}` has scope `[x, y]` and satisfying tuples
/// `{(1, 2), (2, 1)}`.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Box<[VariableId]>,
    /// The satisfying tuples without duplicates, in the order they were first given.
    tuples: Vec<Box<[i32]>>,
    satisfying: HashSet<Box<[i32]>>,
    /// For every position in the scope, a map from a value to the indices (into `tuples`) of the
    /// tuples with that value at that position.
    supports: Vec<HashMap<i32, Vec<usize>>>,
}

impl Constraint {
    /// Create a constraint over `scope` which accepts exactly the given tuples.
    ///
    /// The scope and the tuples are checked when the constraint is added to a
    /// [`Csp`](crate::Csp).
    pub fn new<Tuple: AsRef<[i32]>>(
        name: impl Into<String>,
        scope: impl IntoIterator<Item = VariableId>,
        tuples: impl IntoIterator<Item = Tuple>,
    ) -> Constraint {
        let scope: Box<[VariableId]> = scope.into_iter().collect();

        let mut satisfying: HashSet<Box<[i32]>> = HashSet::default();
        let mut ordered_tuples = Vec::new();
        let mut supports = vec![HashMap::<i32, Vec<usize>>::default(); scope.len()];

        for tuple in tuples {
            let tuple: Box<[i32]> = tuple.as_ref().into();
            if satisfying.contains(&tuple) {
                continue;
            }

            let index = ordered_tuples.len();
            for (position, &value) in tuple.iter().enumerate().take(scope.len()) {
                supports[position].entry(value).or_default().push(index);
            }

            let _ = satisfying.insert(tuple.clone());
            ordered_tuples.push(tuple);
        }

        Constraint {
            name: name.into(),
            scope,
            tuples: ordered_tuples,
            satisfying,
            supports,
        }
    }

    /// Create a constraint over the single variable `variable` which only allows the given values.
    ///
    /// Every value becomes a tuple of length one.
    pub fn unary(
        name: impl Into<String>,
        variable: VariableId,
        values: impl IntoIterator<Item = i32>,
    ) -> Constraint {
        Constraint::new(name, [variable], values.into_iter().map(|value| [value]))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered scope of the constraint.
    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    /// The satisfying tuples, without duplicates.
    pub fn tuples(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.tuples.iter().map(|tuple| &tuple[..])
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    /// Whether the given values, in scope order, form a satisfying tuple.
    pub fn check(&self, values: &[i32]) -> bool {
        self.satisfying.contains(values)
    }

    /// The variables of the scope which are not assigned, in scope order.
    pub fn unassigned_scope_variables<'a>(
        &'a self,
        domains: &'a DomainStore,
    ) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(|&variable| !domains.is_assigned(variable))
    }

    pub fn num_unassigned(&self, domains: &DomainStore) -> usize {
        self.unassigned_scope_variables(domains).count()
    }

    /// The assigned values of the scope in scope order, or [`None`] if some variable of the scope
    /// is not assigned.
    pub fn assigned_values(&self, domains: &DomainStore) -> Option<Vec<i32>> {
        self.scope
            .iter()
            .map(|&variable| domains.assigned_value(variable))
            .collect()
    }

    /// Whether there is a satisfying tuple with `value` for `variable` in which every other
    /// variable of the scope takes its assigned value, or, if it is unassigned, a value from its
    /// current domain.
    ///
    /// `variable` has to be part of the scope.
    pub fn has_support(&self, domains: &DomainStore, variable: VariableId, value: i32) -> bool {
        let position = self
            .scope
            .iter()
            .position(|&other| other == variable)
            .expect("support is only defined for variables in the scope");

        let Some(candidates) = self.supports[position].get(&value) else {
            return false;
        };

        candidates.iter().any(|&index| {
            self.tuples[index]
                .iter()
                .zip(self.scope.iter())
                .enumerate()
                .all(|(other_position, (&other_value, &other))| {
                    other_position == position
                        || match domains.assigned_value(other) {
                            Some(assigned) => assigned == other_value,
                            None => domains.contains(other, other_value),
                        }
                })
        })
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.scope.iter().join(", "))
    }
}
