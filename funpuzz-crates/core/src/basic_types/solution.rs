use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

use crate::containers::KeyedVec;
use crate::engine::Csp;
use crate::engine::VariableId;
use crate::funpuzz_assert_simple;

/// A snapshot of a complete assignment of a [`Csp`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<VariableId, i32>,
}

impl Solution {
    /// Take the snapshot of a [`Csp`] in which every variable is assigned.
    pub(crate) fn from_assigned(csp: &Csp) -> Solution {
        let mut values = KeyedVec::default();

        for variable in csp.variables() {
            let value = csp
                .domains()
                .assigned_value(variable)
                .expect("a solution requires every variable to be assigned");
            let key = values.push(value);
            funpuzz_assert_simple!(key == variable);
        }

        Solution { values }
    }

    /// The value the solution gives to `variable`.
    pub fn value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all `(variable, value)` pairs in variable creation order.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i32)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(variable, value)| format!("{variable}={value}"))
                .join(", ")
        )
    }
}
