use super::ValueSelector;
use crate::engine::Csp;
use crate::engine::VariableId;

/// Tries the values of the current domain in increasing order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainMin;

impl ValueSelector for InDomainMin {
    fn order_values(&mut self, csp: &Csp, variable: VariableId) -> Vec<i32> {
        let mut values = csp.domains().current_domain(variable).collect::<Vec<_>>();
        values.sort_unstable();
        values
    }
}
