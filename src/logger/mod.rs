//! Parent/child logger handles over one shared dispatch pipeline.
//!
//! Every hierarchy has exactly one [`RootLogger`], which owns the threshold,
//! the reporter, and the consumer thread. [`Logger`] handles created from it
//! carry their own source path but delegate every gate check and every
//! delivery back to the root, so the whole tree filters and serializes as one.

mod pipeline;

pub use pipeline::DoneSignal;

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use crate::entry::{Entry, Value};
use crate::level::Level;
use crate::report::Report;
use pipeline::RootState;

/// The gate-and-emit contract shared by every handle, including [`NullLogger`].
///
/// Each method is both a question and an action: with an empty slice it only
/// answers whether the level currently passes (no entry, no blocking); with
/// arguments it builds an entry and blocks on the hand-off to the dispatch
/// thread. The returned bool is the gate result — `false` means nothing was
/// logged.
pub trait Log {
    /// Logs at [`Level::Info`], or just reports the gate when `data` is empty.
    fn info(&self, data: &[Value]) -> bool;
    /// Logs at [`Level::Warn`], or just reports the gate when `data` is empty.
    fn warn(&self, data: &[Value]) -> bool;
    /// Logs at [`Level::Err`], or just reports the gate when `data` is empty.
    fn err(&self, data: &[Value]) -> bool;
}

/// A node in the hierarchy: its own source path plus a back-reference to the
/// root's shared state.
///
/// Cheap to clone and to hand across threads; all clones and children keep the
/// root's pipeline alive until the last handle is dropped.
#[derive(Clone)]
pub struct Logger {
    root: Arc<RootState>,
    source: Vec<String>,
}

impl Logger {
    /// Snapshots this handle's current path and appends `segment` — renaming
    /// an ancestor later does not reach into already-created children.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut source = self.source.clone();
        source.push(segment.into());
        Self {
            root: Arc::clone(&self.root),
            source,
        }
    }

    /// Replaces this handle's own last path segment. Ancestors, siblings, and
    /// children created before the rename keep the paths they snapshotted.
    pub fn set_source(&mut self, segment: impl Into<String>) {
        if let Some(last) = self.source.last_mut() {
            *last = segment.into();
        }
    }

    /// Path segments from the root outward.
    #[must_use]
    pub fn source(&self) -> &[String] {
        &self.source
    }

    fn emit(&self, level: Level, data: &[Value]) -> bool {
        // Gate under the root lock, then release before anything that blocks.
        let Some(sender) = self.root.gate(level) else {
            return false;
        };
        if data.is_empty() {
            return true;
        }
        let entry = Entry {
            level,
            when: Local::now(),
            source: self.source.clone(),
            data: data.to_vec(),
        };
        // A stop racing this send disconnects the channel; the failed send
        // becomes a false return rather than a panic or a silent success.
        sender.send(entry).is_ok()
    }
}

impl Log for Logger {
    fn info(&self, data: &[Value]) -> bool {
        self.emit(Level::Info, data)
    }

    fn warn(&self, data: &[Value]) -> bool {
        self.emit(Level::Warn, data)
    }

    fn err(&self, data: &[Value]) -> bool {
        self.emit(Level::Err, data)
    }
}

/// The one handle per hierarchy that owns the dispatch pipeline.
///
/// Threshold changes, reporter swaps, and stop are root-only capabilities;
/// everything a plain [`Logger`] can do, the root can do too.
pub struct RootLogger {
    handle: Logger,
}

impl RootLogger {
    /// Creates a hierarchy root and starts its pipeline before returning, with
    /// a [`NullReporter`](crate::report::NullReporter) pre-installed — the
    /// root is usable immediately, it just discards entries until a real
    /// reporter is set.
    #[must_use]
    pub fn new(source: impl Into<String>, level: Level) -> Self {
        Self {
            handle: Logger {
                root: RootState::new(level),
                source: vec![source.into()],
            },
        }
    }

    /// See [`Logger::child`].
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Logger {
        self.handle.child(segment)
    }

    /// See [`Logger::set_source`].
    pub fn set_source(&mut self, segment: impl Into<String>) {
        self.handle.set_source(segment);
    }

    /// See [`Logger::source`].
    #[must_use]
    pub fn source(&self) -> &[String] {
        self.handle.source()
    }

    /// Sets the shared threshold for every handle in this hierarchy, effective
    /// for the next gate check on any of them.
    pub fn set_level(&self, level: Level) {
        self.handle.root.set_level(level);
    }

    /// The threshold currently applied by gate checks.
    #[must_use]
    pub fn level(&self) -> Level {
        self.handle.root.level()
    }

    /// Swaps the active reporter: drains the running pipeline into the old
    /// reporter, installs the new one, and restarts. Entries emitted before
    /// this call go to the old reporter, entries emitted after it returns go
    /// to the new one — never the other way around. Closures work directly:
    /// any `Fn(&Entry) + Send + Sync` is a reporter.
    pub fn set_reporter(&self, reporter: impl Report + 'static) {
        self.handle.root.set_reporter(Arc::new(reporter));
    }

    /// Stops the pipeline and waits up to `wait` for the drain to finish.
    /// `Duration::ZERO` returns immediately; pair it with [`done`](Self::done)
    /// to wait elsewhere. After a stop, every emit on every handle of this
    /// hierarchy returns `false` until a `set_reporter` restarts it.
    pub fn stop(&self, wait: Duration) {
        self.handle.root.stop(wait);
    }

    /// A waitable signal for the current pipeline's shutdown.
    #[must_use]
    pub fn done(&self) -> DoneSignal {
        self.handle.root.done()
    }
}

impl Log for RootLogger {
    fn info(&self, data: &[Value]) -> bool {
        self.handle.info(data)
    }

    fn warn(&self, data: &[Value]) -> bool {
        self.handle.warn(data)
    }

    fn err(&self, data: &[Value]) -> bool {
        self.handle.err(data)
    }
}

/// A stand-in for code paths that require a logger but should log nothing:
/// every gate reports "not logging" and no entry is ever allocated or sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Log for NullLogger {
    fn info(&self, _data: &[Value]) -> bool {
        false
    }

    fn warn(&self, _data: &[Value]) -> bool {
        false
    }

    fn err(&self, _data: &[Value]) -> bool {
        false
    }
}
