//! A [`VariableSelector`] picks the next variable the search assigns.
mod first_fail;
mod input_order;

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

pub use first_fail::FirstFail;
pub use input_order::InputOrder;

use crate::engine::Csp;
use crate::engine::VariableId;

pub trait VariableSelector: Debug {
    /// Select an unassigned variable, or [`None`] if every variable is assigned.
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId>;
}

/// The available [`VariableSelector`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// Select the first unassigned variable in creation order.
    InputOrder,
    /// Select the unassigned variable with the smallest current domain.
    #[default]
    FirstFail,
}

impl VariableSelection {
    pub fn create(self, variables: &[VariableId]) -> Box<dyn VariableSelector> {
        match self {
            VariableSelection::InputOrder => Box::new(InputOrder::new(variables)),
            VariableSelection::FirstFail => Box::new(FirstFail::new(variables)),
        }
    }
}

impl Display for VariableSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableSelection::InputOrder => write!(f, "input-order"),
            VariableSelection::FirstFail => write!(f, "first-fail"),
        }
    }
}
