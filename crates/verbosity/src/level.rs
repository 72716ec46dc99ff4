//! crates/verbosity/src/level.rs
//! Closed severity level enumeration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log call, from most severe to least.
///
/// The derived ordering follows the declaration: a *smaller* value is *more*
/// severe, so `LogLevel::Emergency < LogLevel::Debug`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// System is unusable.
    Emergency,
    /// Action must be taken immediately.
    Alert,
    /// Critical conditions.
    Critical,
    /// Error conditions.
    Error,
    /// Warning conditions.
    Warning,
    /// Normal but significant events.
    Notice,
    /// Informational messages.
    Info,
    /// Debug-level messages.
    Debug,
}

impl LogLevel {
    /// All levels in severity order, most severe first.
    ///
    /// Callers that need to iterate every level (threshold matrices, help
    /// output) can depend on this constant rather than re-specifying the
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::LogLevel;
    ///
    /// assert_eq!(LogLevel::ALL.len(), 8);
    /// assert_eq!(LogLevel::ALL[0], LogLevel::Emergency);
    /// assert_eq!(LogLevel::ALL[7], LogLevel::Debug);
    /// ```
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the lowercase canonical name of the level.
    ///
    /// The name doubles as the default display tag when no override is
    /// configured in [`LevelTags`](crate::LevelTags).
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::LogLevel;
    ///
    /// assert_eq!(LogLevel::Emergency.as_str(), "emergency");
    /// assert_eq!(LogLevel::Debug.as_str(), "debug");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Reports whether the level is `error` or more severe.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::LogLevel;
    ///
    /// assert!(LogLevel::Emergency.is_error_or_worse());
    /// assert!(LogLevel::Error.is_error_or_worse());
    /// assert!(!LogLevel::Warning.is_error_or_worse());
    /// ```
    #[must_use]
    pub fn is_error_or_worse(self) -> bool {
        self <= Self::Error
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`LogLevel`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("the log level {name:?} does not exist")]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the rejected level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "emergency" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError::new(input)),
        }
    }
}
