use std::fmt::Display;

use convert_case::Case;
use convert_case::Casing;

/// How a single statistic is rendered, and how a block of statistics is closed.
///
/// A statistic is written as `{prefix} {name}={value}`, with the name converted to `casing` when
/// one is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatisticFormat {
    prefix: &'static str,
    block_end: Option<&'static str>,
    casing: Option<Case>,
}

impl StatisticFormat {
    pub fn new(prefix: &'static str) -> StatisticFormat {
        StatisticFormat {
            prefix,
            block_end: None,
            casing: None,
        }
    }

    /// The format used by MiniZinc: `%%%mzn-stat: peakDepth=3`, closed by `%%%mzn-stat-end`.
    pub fn minizinc() -> StatisticFormat {
        StatisticFormat::new("%%%mzn-stat:")
            .with_block_end("%%%mzn-stat-end")
            .with_casing(Case::Camel)
    }

    /// Write `block_end` on its own line after every block.
    pub fn with_block_end(self, block_end: &'static str) -> StatisticFormat {
        StatisticFormat {
            block_end: Some(block_end),
            ..self
        }
    }

    pub fn with_casing(self, casing: Case) -> StatisticFormat {
        StatisticFormat {
            casing: Some(casing),
            ..self
        }
    }

    pub fn block_end(&self) -> Option<&'static str> {
        self.block_end
    }

    pub fn entry(&self, name: &str, value: impl Display) -> String {
        let name = match self.casing {
            Some(casing) => name.to_case(casing),
            None => name.to_owned(),
        };

        format!("{} {name}={value}", self.prefix)
    }
}
