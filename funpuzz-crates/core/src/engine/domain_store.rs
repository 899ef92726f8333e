use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::funpuzz_assert_moderate;
use crate::funpuzz_assert_simple;

/// The identifier of a variable of a [`Csp`](crate::Csp); it links to a domain in the
/// [`DomainStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariableId {
    id: u32,
}

impl VariableId {
    pub fn new(id: u32) -> Self {
        VariableId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId::new(index as u32)
    }
}

/// Stores, for every variable, its full domain, its current domain and its assignment.
///
/// The full domain is fixed when the variable is created. The current domain only shrinks
/// through pruning and grows back through restoring; the assigned value is set and cleared by
/// the search. An assigned value is authoritative for the variable, regardless of the contents of
/// its current domain.
#[derive(Clone, Debug, Default)]
pub struct DomainStore {
    domains: KeyedVec<VariableId, Domain>,
}

#[derive(Clone, Debug)]
struct Domain {
    name: String,
    /// The full domain, in the order in which the values were given.
    values: Box<[i32]>,
    /// The index of every value in `values`.
    positions: HashMap<i32, usize>,
    /// Whether the value at the same index in `values` is in the current domain.
    present: Vec<bool>,
    size: usize,
    assigned: Option<i32>,
}

impl Domain {
    fn new(name: String, domain: impl IntoIterator<Item = i32>) -> Domain {
        let mut values = Vec::new();
        let mut positions: HashMap<i32, usize> = HashMap::default();

        for value in domain {
            if !positions.contains_key(&value) {
                let _ = positions.insert(value, values.len());
                values.push(value);
            }
        }

        Domain {
            name,
            present: vec![true; values.len()],
            size: values.len(),
            values: values.into_boxed_slice(),
            positions,
            assigned: None,
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.positions
            .get(&value)
            .is_some_and(|&position| self.present[position])
    }

    fn set_presence(&mut self, value: i32, is_present: bool) {
        let position = self.positions[&value];
        funpuzz_assert_simple!(
            self.present[position] != is_present,
            "value {value} of '{}' is already {}",
            self.name,
            if is_present { "present" } else { "pruned" }
        );

        self.present[position] = is_present;
        if is_present {
            self.size += 1;
        } else {
            self.size -= 1;
        }
    }
}

impl DomainStore {
    /// Creates a new variable with the given full domain; duplicate values are ignored.
    pub(crate) fn grow(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = i32>,
    ) -> VariableId {
        self.domains.push(Domain::new(name.into(), domain))
    }

    pub fn num_variables(&self) -> usize {
        self.domains.len()
    }

    /// Iterate over all variables in creation order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        self.domains.keys()
    }

    pub fn name(&self, variable: VariableId) -> &str {
        &self.domains[variable].name
    }

    /// The domain of the variable as it was at creation.
    pub fn full_domain(&self, variable: VariableId) -> &[i32] {
        &self.domains[variable].values
    }

    /// The values of the current domain, in full domain order.
    pub fn current_domain(&self, variable: VariableId) -> impl Iterator<Item = i32> + '_ {
        let domain = &self.domains[variable];
        domain
            .values
            .iter()
            .zip(domain.present.iter())
            .filter_map(|(&value, &is_present)| is_present.then_some(value))
    }

    pub fn current_domain_size(&self, variable: VariableId) -> usize {
        self.domains[variable].size
    }

    /// Whether `value` is still in the current domain of `variable`.
    pub fn contains(&self, variable: VariableId, value: i32) -> bool {
        self.domains[variable].contains(value)
    }

    pub fn assigned_value(&self, variable: VariableId) -> Option<i32> {
        self.domains[variable].assigned
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.domains[variable].assigned.is_some()
    }

    /// Removes `value` from the current domain of `variable`.
    ///
    /// The value has to be in the current domain; pruning a value twice without restoring it in
    /// between is a bug in the caller.
    pub(crate) fn prune(&mut self, variable: VariableId, value: i32) {
        funpuzz_assert_simple!(
            self.contains(variable, value),
            "attempt to prune {value} which is not in the current domain of '{}'",
            self.name(variable)
        );

        self.domains[variable].set_presence(value, false);
    }

    /// Puts a previously pruned `value` back into the current domain of `variable`.
    pub(crate) fn restore(&mut self, variable: VariableId, value: i32) {
        funpuzz_assert_simple!(
            self.domains[variable].positions.contains_key(&value),
            "attempt to restore {value} which is not in the full domain of '{}'",
            self.name(variable)
        );

        self.domains[variable].set_presence(value, true);
    }

    pub(crate) fn assign(&mut self, variable: VariableId, value: i32) {
        funpuzz_assert_simple!(
            !self.is_assigned(variable),
            "'{}' is already assigned",
            self.name(variable)
        );
        funpuzz_assert_moderate!(self.contains(variable, value));

        self.domains[variable].assigned = Some(value);
    }

    pub(crate) fn unassign(&mut self, variable: VariableId) {
        self.domains[variable].assigned = None;
    }

    /// Unassigns every variable and makes every current domain equal to its full domain again.
    pub(crate) fn reset(&mut self) {
        for domain in self.domains.iter_mut() {
            domain.present.iter_mut().for_each(|is_present| *is_present = true);
            domain.size = domain.values.len();
            domain.assigned = None;
        }
    }
}
