//! Writing statistics of a run as a block of `name=value` lines.
//!
//! Statistics are only written once [`enable_statistics`] has been called; before that,
//! [`StatisticBlock::log`] does nothing.
mod statistic_block;
mod statistic_format;
mod statistic_sink;

pub use statistic_block::StatisticBlock;
pub use statistic_format::StatisticFormat;
pub use statistic_sink::enable_statistics;
pub use statistic_sink::statistics_enabled;
