//! Severity level resolution
//!
//! Callers hand `log()` a level in whatever shape is convenient: a numeric
//! code, a name like `"INFO"` (case-insensitive, with the proto enum prefix
//! and the `WARNING` alias accepted), or a canonical [`LogLevel`]. Resolution
//! normalizes all of them to the numeric wire code.

use super::error::{ClientError, Result};
use crate::proto::LogLevel;

/// Proto enum name prefix stripped before matching level names
const LEVEL_NAME_PREFIX: &str = "LOG_LEVEL_";

/// A caller-supplied severity level, not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSpec {
    /// Numeric wire code, forwarded as-is with no range validation.
    /// An out-of-range code is the collector's problem, not ours.
    Code(i32),
    /// Level name such as `"INFO"`, `"warn"`, or `"LOG_LEVEL_ERROR"`
    Name(String),
    /// Already-canonical severity
    Level(LogLevel),
}

impl LevelSpec {
    /// Resolve to the canonical numeric severity code.
    ///
    /// Fails with [`ClientError::InvalidLevel`] when a name does not match
    /// any known level after trimming, uppercasing, and prefix stripping.
    pub fn resolve(&self) -> Result<i32> {
        match self {
            LevelSpec::Code(code) => Ok(*code),
            LevelSpec::Level(level) => Ok(*level as i32),
            LevelSpec::Name(raw) => {
                let normalized = raw.trim().to_uppercase();
                let name = normalized
                    .strip_prefix(LEVEL_NAME_PREFIX)
                    .unwrap_or(&normalized);
                name.parse::<LogLevel>()
                    .map(|level| level as i32)
                    .map_err(|_| ClientError::invalid_level(raw.clone()))
            }
        }
    }
}

impl From<i32> for LevelSpec {
    fn from(code: i32) -> Self {
        LevelSpec::Code(code)
    }
}

impl From<LogLevel> for LevelSpec {
    fn from(level: LogLevel) -> Self {
        LevelSpec::Level(level)
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        LevelSpec::Name(name)
    }
}
