//! The single-consumer dispatch pipeline every root logger owns.
//!
//! All mutable state shared across a hierarchy lives here: the threshold, the
//! active reporter, the hand-off channel, and the done signal. One mutex
//! guards it, held only for the instant of a read or write — never across a
//! channel operation or a reporter invocation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};

use crate::entry::Entry;
use crate::level::Level;
use crate::report::{NullReporter, Report};

/// Shared root state, referenced by every handle in one hierarchy.
pub(super) struct RootState {
    shared: Mutex<Shared>,
    /// Serializes stop/start sequences: at most one "started" transition may
    /// be in flight, and a reporter swap must not interleave with another
    /// swap's drain.
    transition: Mutex<()>,
}

struct Shared {
    level: Level,
    reporter: Arc<dyn Report>,
    /// `Some` while running. Dropping the sender is how the pipeline closes:
    /// the consumer keeps draining until every in-flight clone is gone.
    sender: Option<Sender<Entry>>,
    done: Receiver<()>,
}

impl RootState {
    /// Builds the state and launches the first pipeline, so a fresh root is
    /// already running when its constructor returns. The `NullReporter`
    /// default means dispatch is safe before any `set_reporter` call.
    pub(super) fn new(level: Level) -> Arc<Self> {
        let state = Arc::new(Self {
            shared: Mutex::new(Shared {
                level,
                reporter: Arc::new(NullReporter),
                sender: None,
                done: disconnected(),
            }),
            transition: Mutex::new(()),
        });
        state.launch();
        state
    }

    /// A poisoned lock only means some producer panicked mid-gate; the state
    /// itself is a handful of plain values, so logging keeps working.
    fn lock_shared(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_transition(&self) -> MutexGuard<'_, ()> {
        self.transition
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Gate check and sender snapshot in one critical section: `Some` iff the
    /// pipeline is running and the threshold admits `level`. The returned
    /// clone keeps the channel alive through the caller's blocking send, so a
    /// concurrent stop can never strand the send — it either completes or the
    /// disconnect surfaces as a clean `SendError`.
    pub(super) fn gate(&self, level: Level) -> Option<Sender<Entry>> {
        let shared = self.lock_shared();
        if shared.level < level {
            return None;
        }
        shared.sender.clone()
    }

    pub(super) fn set_level(&self, level: Level) {
        self.lock_shared().level = level;
    }

    pub(super) fn level(&self) -> Level {
        self.lock_shared().level
    }

    /// Two-phase swap: drain the old pipeline to the old reporter, then start
    /// a fresh one with the new reporter. The drain boundary is what makes the
    /// swap atomic — no entry crosses it in either direction.
    pub(super) fn set_reporter(&self, reporter: Arc<dyn Report>) {
        let _transition = self.lock_transition();
        let done = self.halt();
        done.wait();
        self.lock_shared().reporter = reporter;
        self.launch();
    }

    /// Idempotent: stopping a stopped root finds no sender to drop and an
    /// already-disconnected done channel, so the wait returns immediately.
    pub(super) fn stop(&self, wait: Duration) {
        let _transition = self.lock_transition();
        let done = self.halt();
        if !wait.is_zero() {
            let _ = done.wait_timeout(wait);
        }
    }

    pub(super) fn done(&self) -> DoneSignal {
        DoneSignal {
            rx: self.lock_shared().done.clone(),
        }
    }

    /// Closes the hand-off channel by dropping the root's sender. Producers
    /// already past their gate check hold clones, so the consumer drains their
    /// entries before it observes disconnection and exits.
    fn halt(&self) -> DoneSignal {
        let mut shared = self.lock_shared();
        shared.sender.take();
        DoneSignal {
            rx: shared.done.clone(),
        }
    }

    /// Fresh rendezvous channel, fresh done signal, one consumer thread. The
    /// rendezvous capacity is what gives producers back-pressure: a send
    /// completes only when the consumer takes the entry.
    fn launch(&self) {
        let (tx, rx) = bounded::<Entry>(0);
        let (done_tx, done_rx) = bounded::<()>(0);

        // Captured once per pipeline: the reporter can only change across a
        // stop/drain boundary, so this snapshot is "the current reporter" for
        // the consumer's whole lifetime.
        let reporter = {
            let mut shared = self.lock_shared();
            shared.sender = Some(tx);
            shared.done = done_rx;
            Arc::clone(&shared.reporter)
        };

        thread::spawn(move || {
            // Holding done_tx keeps the done channel connected until the
            // drain below finishes; dropping it on exit is the done signal.
            let _done = done_tx;
            for entry in rx {
                reporter.report(&entry);
            }
        });
    }
}

/// Nothing is ever sent on the done channel — disconnection is the signal.
fn disconnected() -> Receiver<()> {
    let (tx, rx) = bounded::<()>(0);
    drop(tx);
    rx
}

/// A waitable handle on pipeline shutdown.
///
/// Cloneable and valid across restarts of the root it came from: each `done()`
/// call snapshots the current pipeline's signal, and a signal stays completed
/// forever once its pipeline has drained.
#[derive(Debug, Clone)]
pub struct DoneSignal {
    rx: Receiver<()>,
}

impl DoneSignal {
    /// Blocks until the pipeline's consumer has drained and exited.
    pub fn wait(&self) {
        // recv returns only on disconnection; no value ever arrives.
        let _ = self.rx.recv();
    }

    /// Bounded wait; `true` means the pipeline finished within `timeout`.
    #[must_use]
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        matches!(
            self.rx.recv_timeout(timeout),
            Err(RecvTimeoutError::Disconnected)
        )
    }
}
