//! One pipeline, many destinations — console plus file plus test capture —
//! without teaching the dispatch core about more than one reporter.

use super::Report;
use crate::entry::Entry;

/// Holds its sub-reporters in the order they were given and invokes them in
/// exactly that order, synchronously, on the dispatch thread. No parallel
/// fan-out: deterministic side-effect ordering across sinks matters more than
/// throughput here, and it keeps "one in-flight entry at a time" true for
/// every sink.
pub struct FanOut {
    sinks: Vec<Box<dyn Report>>,
}

impl FanOut {
    /// Order is significant — a sink that terminates the process on error-level
    /// entries should come last.
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn Report>>) -> Self {
        Self { sinks }
    }

    /// Tests verify the expected number of sinks got wired up.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Report for FanOut {
    fn report(&self, entry: &Entry) {
        for sink in &self.sinks {
            sink.report(entry);
        }
    }
}
