//! Severity levels that gate which entries reach the reporter.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so a handle can compare a request's level against the root's threshold.
///
/// The set is fixed and closed: callers compare and store levels but never
/// construct new ones. `Nothing` suppresses everything, `Everything` admits
/// everything, and the three named levels sit between them in severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Threshold-only value — no entry carries it; setting it silences the logger.
    Nothing = 0,
    /// Failures that prevented an operation from completing.
    Err = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Threshold-only value — admits every level.
    Everything = 4,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Err => "err",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Everything => "everything",
        }
    }

    /// Convenience for iteration — used by threshold sweeps in tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Nothing,
            Self::Err,
            Self::Warn,
            Self::Info,
            Self::Everything,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, ParseLevelError> {
        match s.to_lowercase().as_str() {
            "nothing" | "off" => Ok(Self::Nothing),
            "err" | "error" => Ok(Self::Err),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "everything" | "all" => Ok(Self::Everything),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
