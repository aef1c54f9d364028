//! The immutable record handed from a producer to the reporter.

use chrono::{DateTime, Local};
use std::fmt;

use crate::level::Level;

/// Loose arguments would force every reporter to deal with generics — `Value`
/// normalizes the handful of shapes callers actually log into one owned,
/// sendable type that survives the hop across the dispatch channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free-form message text.
    Text(String),
    /// Counters, sizes, ids.
    Int(i64),
    /// Measurements and ratios.
    Float(f64),
    /// Flags and outcomes.
    Bool(bool),
    /// A stringified error — errors rarely implement `Clone`, so the message
    /// is captured at emission time instead of moving the error itself.
    Failure(String),
}

impl Value {
    /// Captures an error's message without taking ownership of the error.
    #[must_use]
    pub fn failure(err: &dyn std::error::Error) -> Self {
        Self::Failure(err.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Failure(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One log event, frozen at emission time.
///
/// Built by the emitting handle, moved into the dispatch channel, and read-only
/// from the reporter's side. `Clone + PartialEq` so test reporters can capture
/// entries and assert on them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Severity the caller requested — always one of `Err`, `Warn`, `Info`.
    pub level: Level,
    /// Captured when the emitting call passed its gate check, not when the
    /// reporter finally sees the entry.
    pub when: DateTime<Local>,
    /// Path segments from the root handle outward.
    pub source: Vec<String>,
    /// The caller's arguments, in call order.
    pub data: Vec<Value>,
}

impl Entry {
    /// Reporters render the hierarchy as `parent>child>grandchild`.
    #[must_use]
    pub fn source_path(&self) -> String {
        self.source.join(">")
    }
}
