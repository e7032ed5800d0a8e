use log::{Level, log_enabled};
use std::time::Instant;
use tracing_subscriber::filter::LevelFilter;

/// Installs a stdout `tracing` subscriber capped at `level`.
///
/// Records emitted through the `log` facade are bridged into the same
/// subscriber. Fails if a global subscriber or logger is already set.
pub fn init(level: LevelFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stdout)
        .try_init()
}

/// Simple scoped timer for profiling a sweep.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}
