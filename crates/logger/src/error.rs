//! crates/logger/src/error.rs
//! Failure modes surfaced by the logging entry points.

use std::io;

use thiserror::Error;
use verbosity::ParseLevelError;

/// Error returned by [`ConsoleLogger::log_named`](crate::ConsoleLogger::log_named).
///
/// An invalid level is rejected before any side effect: the has-errored flag
/// is left untouched and nothing is written. Sink I/O failures pass through
/// unchanged.
#[derive(Debug, Error)]
pub enum LogError {
    /// The level name is not part of the severity enumeration.
    #[error("the log level {name:?} does not exist")]
    InvalidLevel {
        /// The rejected level name.
        name: String,
    },
    /// The sink failed to accept the rendered line.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ParseLevelError> for LogError {
    fn from(error: ParseLevelError) -> Self {
        Self::InvalidLevel {
            name: error.name().to_owned(),
        }
    }
}
