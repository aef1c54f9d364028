//! A text stream is the most common destination — users expect immediate
//! line-per-entry output on stderr without configuring anything else.

use std::io::{self, Write};
use std::sync::Mutex;

use super::Report;
use crate::entry::Entry;

/// Wraps any writable stream as a reporter, one rendered line per entry.
///
/// The stream sits behind a `Mutex` because `report` takes `&self`; in
/// practice only the dispatch thread ever writes, so the lock is uncontended.
pub struct StreamReporter<W: Write + Send> {
    stream: Mutex<W>,
    /// Log scrapers and humans disagree on time formats — overridable per sink.
    timestamp_format: String,
}

impl<W: Write + Send> StreamReporter<W> {
    /// Defaults to a second-resolution local timestamp; override with
    /// [`timestamp_format`](Self::timestamp_format).
    pub fn new(stream: W) -> Self {
        Self {
            stream: Mutex::new(stream),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }

    /// A `chrono` strftime string, e.g. `"%H:%M:%S%.3f"` for millisecond logs.
    #[must_use]
    pub fn timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }
}

impl StreamReporter<io::Stderr> {
    /// Diagnostics belong on stderr so they interleave with panics and don't
    /// pollute piped stdout.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl StreamReporter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Report for StreamReporter<W> {
    fn report(&self, entry: &Entry) {
        let when = entry.when.format(&self.timestamp_format);
        let data = entry
            .data
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let mut stream = self
            .stream
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        // The reporter contract has no error channel; a dead stream drops lines.
        let _ = writeln!(stream, "{when} {}: {data}", entry.source_path());
    }
}
