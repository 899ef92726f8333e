use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ValueSelector;
use crate::engine::Csp;
use crate::engine::VariableId;

/// Tries the values of the current domain in a random order.
#[derive(Debug, Clone)]
pub struct InDomainRandom {
    rng: SmallRng,
}

impl InDomainRandom {
    pub fn with_seed(seed: u64) -> Self {
        InDomainRandom {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ValueSelector for InDomainRandom {
    fn order_values(&mut self, csp: &Csp, variable: VariableId) -> Vec<i32> {
        let mut values = csp.domains().current_domain(variable).collect::<Vec<_>>();
        values.shuffle(&mut self.rng);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_is_tried_once() {
        let mut csp = Csp::new("random");
        let x = csp.new_variable("x", 1..=6);
        let mut selector = InDomainRandom::with_seed(42);

        let mut values = selector.order_values(&csp, x);
        values.sort_unstable();

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn equal_seeds_give_equal_orders() {
        let mut csp = Csp::new("random");
        let x = csp.new_variable("x", 1..=6);

        let first = InDomainRandom::with_seed(7).order_values(&csp, x);
        let second = InDomainRandom::with_seed(7).order_values(&csp, x);

        assert_eq!(first, second);
    }
}
