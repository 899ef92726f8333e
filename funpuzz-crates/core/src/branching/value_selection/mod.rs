//! A [`ValueSelector`] decides in which order the values of the selected variable are tried.
mod in_domain_min;
mod in_domain_random;

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

pub use in_domain_min::InDomainMin;
pub use in_domain_random::InDomainRandom;

use crate::engine::Csp;
use crate::engine::VariableId;

pub trait ValueSelector: Debug {
    /// The values of the current domain of `variable`, in the order they should be tried.
    fn order_values(&mut self, csp: &Csp, variable: VariableId) -> Vec<i32>;
}

/// The available [`ValueSelector`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// Try the values from small to large.
    #[default]
    InDomainMin,
    /// Try the values in a random order.
    InDomainRandom,
}

impl ValueSelection {
    /// Create the selector; `seed` is only used by the random selector.
    pub fn create(self, seed: u64) -> Box<dyn ValueSelector> {
        match self {
            ValueSelection::InDomainMin => Box::new(InDomainMin),
            ValueSelection::InDomainRandom => Box::new(InDomainRandom::with_seed(seed)),
        }
    }
}

impl Display for ValueSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSelection::InDomainMin => write!(f, "in-domain-min"),
            ValueSelection::InDomainRandom => write!(f, "in-domain-random"),
        }
    }
}
