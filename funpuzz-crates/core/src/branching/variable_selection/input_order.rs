use log::warn;

use super::VariableSelector;
use crate::engine::Csp;
use crate::engine::VariableId;

/// A [`VariableSelector`] which selects the first variable which is not assigned given the order
/// in the provided list.
#[derive(Debug)]
pub struct InputOrder {
    variables: Vec<VariableId>,
}

impl InputOrder {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        self.variables
            .iter()
            .find(|&&variable| !csp.domains().is_assigned(variable))
            .copied()
    }
}
