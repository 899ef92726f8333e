use log::warn;

use super::VariableSelector;
use crate::engine::Csp;
use crate::engine::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable with the smallest current domain
/// (the "minimum remaining values" heuristic).
///
/// Ties are broken by the order of the provided list.
#[derive(Debug)]
pub struct FirstFail {
    variables: Vec<VariableId>,
}

impl FirstFail {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for FirstFail {
    fn select_variable(&mut self, csp: &Csp) -> Option<VariableId> {
        // `min_by_key` returns the first of several minimal elements.
        self.variables
            .iter()
            .filter(|&&variable| !csp.domains().is_assigned(variable))
            .min_by_key(|&&variable| csp.domains().current_domain_size(variable))
            .copied()
    }
}
