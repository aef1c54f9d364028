//! The built-in sinks can't cover every destination — the `Report` trait lets
//! users point the dispatch pipeline anywhere without modifying treelog itself.

mod fanout;
mod stream;

pub use fanout::FanOut;
pub use stream::StreamReporter;

use crate::entry::Entry;

/// One entry in, side effects out — the entire boundary between the dispatch
/// core and the rendering layer.
///
/// `Send + Sync` bounds let the dispatch thread hold the reporter while root
/// handles on other threads keep a handle to it for the next restart. The
/// pipeline invokes `report` exactly once per accepted entry, always from the
/// single consumer thread, so implementations never see two entries at once.
pub trait Report: Send + Sync {
    /// Consumes one finished entry. There is no error channel back into the
    /// core: a sink that fails has only its own sink-specific recourse.
    fn report(&self, entry: &Entry);
}

/// Plain functions and closures are the lightest-weight reporters — tests and
/// small adapters shouldn't need a named struct.
impl<F> Report for F
where
    F: Fn(&Entry) + Send + Sync,
{
    fn report(&self, entry: &Entry) {
        self(entry);
    }
}

/// Accepts and discards — the pre-installed default, so a freshly created root
/// never dispatches into a missing reporter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Report for NullReporter {
    fn report(&self, _entry: &Entry) {}
}
