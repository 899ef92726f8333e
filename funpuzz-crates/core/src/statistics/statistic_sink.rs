use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use super::StatisticFormat;

/// The destination of every [`StatisticBlock`](super::StatisticBlock) logged in this process.
pub(super) struct StatisticSink {
    pub(super) format: StatisticFormat,
    pub(super) writer: Box<dyn Write + Send>,
}

static STATISTIC_SINK: OnceLock<Mutex<StatisticSink>> = OnceLock::new();

/// Start writing statistics in `format`, to `writer` or to stdout when no writer is given.
///
/// Only the first call has an effect.
pub fn enable_statistics(format: StatisticFormat, writer: Option<Box<dyn Write + Send>>) {
    let _ = STATISTIC_SINK.get_or_init(|| {
        Mutex::new(StatisticSink {
            format,
            writer: writer.unwrap_or(Box::new(std::io::stdout())),
        })
    });
}

pub fn statistics_enabled() -> bool {
    STATISTIC_SINK.get().is_some()
}

/// Run `write` on the sink, if statistics are enabled.
pub(super) fn with_sink(write: impl FnOnce(&mut StatisticSink)) {
    if let Some(sink) = STATISTIC_SINK.get() {
        if let Ok(mut sink) = sink.lock() {
            write(&mut *sink);
        }
    }
}
