#![forbid(unsafe_code)]

//! `treelog` - Concurrent leveled logging with parent/child loggers.
//!
//! A hierarchy of logger handles shares one threshold, one reporter, and one
//! dispatch pipeline owned by its root:
//! - Level methods are combined gate-and-emit calls — with no arguments they
//!   only answer whether the level currently passes
//! - Child loggers for sub-components, reporting as `parent>child`
//! - Pluggable [`Report`] sinks, composable with [`FanOut`]
//! - [`NullLogger`] to switch logging off without changing calling code
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use treelog::{Level, Log, RootLogger, StreamReporter};
//!
//! let root = RootLogger::new("server", Level::Warn);
//! root.set_reporter(StreamReporter::stderr());
//!
//! let conn = root.child("conn");
//! conn.err(&["handshake failed".into()]);
//!
//! if conn.info(&[]) {
//!     // expensive diagnostics, only assembled when Info passes the gate
//! }
//!
//! root.stop(Duration::from_secs(1));
//! ```

pub mod entry;
pub mod level;
pub mod logger;
pub mod report;

// Re-exports for convenience
pub use entry::{Entry, Value};
pub use level::{Level, ParseLevelError};
pub use logger::{DoneSignal, Log, Logger, NullLogger, RootLogger};
pub use report::{FanOut, NullReporter, Report, StreamReporter};
