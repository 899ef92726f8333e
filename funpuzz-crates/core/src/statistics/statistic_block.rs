use std::fmt::Display;
use std::io::Write;

use super::statistic_sink::with_sink;
use super::StatisticFormat;

/// A group of statistics which is written at once, followed by the end marker of the
/// [`StatisticFormat`].
///
/// Names are given in snake case; the format decides how they are printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatisticBlock {
    entries: Vec<(String, String)>,
}

impl StatisticBlock {
    pub fn add(&mut self, name: &str, value: impl Display) -> &mut StatisticBlock {
        self.entries.push((name.to_owned(), value.to_string()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the block to the sink configured with
    /// [`enable_statistics`](super::enable_statistics); does nothing otherwise.
    pub fn log(&self) {
        with_sink(|sink| {
            let _ = self.write_to(&sink.format, &mut sink.writer);
        });
    }

    pub fn write_to(
        &self,
        format: &StatisticFormat,
        writer: &mut impl Write,
    ) -> std::io::Result<()> {
        for (name, value) in &self.entries {
            writeln!(writer, "{}", format.entry(name, value))?;
        }

        if let Some(block_end) = format.block_end() {
            writeln!(writer, "{block_end}")?;
        }

        writer.flush()
    }
}
