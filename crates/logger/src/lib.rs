#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `console-logger` renders leveled, human-readable log lines for
//! command-line programs. Each call names a severity from the closed
//! [`LogLevel`] enumeration; the logger consults its [`VerbosityPolicy`]
//! against the sink's current [`Verbosity`], and when the level is visible
//! it writes one line of the exact shape
//!
//! ```text
//! [YYYY-MM-DD HH:MM:SS] [<tag>] <message>\n
//! ```
//!
//! Message templates may reference context values as `{key}` placeholders;
//! convertible values are substituted, everything else is left literal. The
//! logger also keeps a sticky has-errored flag so callers can ask "did an
//! error-or-worse event occur" after the fact.
//!
//! # Design
//!
//! The two collaborators are injected rather than owned globally: a
//! [`Sink`] supplies the current verbosity (read fresh on every call) and
//! accepts finished lines, and a [`Clock`] supplies timestamps so tests can
//! substitute [`FixedClock`] without touching any other behavior.
//! [`ConsoleLogger`] owns both by value, in the same spirit as a buffered
//! writer owning its destination.
//!
//! # Invariants
//!
//! - The has-errored flag is monotonic: it latches on the first accepted
//!   error-or-worse call and never resets, whether or not the line was
//!   actually written.
//! - Visibility suppression produces no output and no error.
//! - Interpolation never fails: unconvertible context values and unmatched
//!   placeholders stay literal in the rendered message.
//!
//! # Errors
//!
//! Sink I/O failures surface unchanged as [`std::io::Error`]. The only
//! other failure mode is [`LogError::InvalidLevel`] from
//! [`ConsoleLogger::log_named`], raised before any side effect when the
//! level name is not part of the enumeration.
//!
//! # Examples
//!
//! ```
//! use console_logger::{BufferedSink, ConsoleLogger, LogContext, Verbosity};
//!
//! let sink = BufferedSink::new(Verbosity::Normal);
//! let mut logger = ConsoleLogger::new(sink);
//!
//! let context = LogContext::new().with("disk", "/dev/sda1");
//! logger.warning("volume {disk} is almost full", &context)?;
//! logger.debug("probe finished", &LogContext::new())?;
//!
//! let output = logger.get_ref().contents();
//! assert!(output.contains("[warning] volume /dev/sda1 is almost full"));
//! assert!(!output.contains("probe finished"));
//! assert!(!logger.has_errored());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - [`verbosity`] for the level enumeration and the threshold policy.

mod clock;
mod context;
mod error;
mod interpolate;
mod logger;
mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{ContextValue, LogContext};
pub use error::LogError;
pub use logger::ConsoleLogger;
pub use sink::{BufferedSink, Sink, WriterSink};

pub use verbosity::{
    LevelTags, LevelThresholds, LogLevel, ParseLevelError, Verbosity, VerbosityPolicy,
};
