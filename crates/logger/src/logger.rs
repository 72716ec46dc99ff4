//! crates/logger/src/logger.rs
//! The logger core: level gating, line rendering, and error tracking.

use verbosity::VerbosityPolicy;

use crate::clock::SystemClock;

mod constructors;
mod levels;
mod writing;

/// Leveled console logger writing timestamped lines through a sink.
///
/// The logger owns its [`Sink`](crate::Sink), its [`VerbosityPolicy`], and
/// its [`Clock`](crate::Clock) by value. Every logging call takes
/// `&mut self`, so a single instance has one logical owner; sharing one
/// logger across threads requires external serialization (or a sink and
/// wrapper that provide it), the type introduces no internal locking.
///
/// The has-errored flag latches the first time a call at `error` level or
/// more severe is accepted, whether or not the visibility gate let the line
/// through, and never resets.
///
/// # Examples
///
/// ```
/// use console_logger::{BufferedSink, ConsoleLogger, LogContext, Verbosity};
///
/// let mut logger = ConsoleLogger::new(BufferedSink::new(Verbosity::Quiet));
///
/// // Suppressed by the quiet sink, but still recorded as an error event.
/// logger.critical("meltdown", &LogContext::new())?;
///
/// assert!(logger.has_errored());
/// assert!(logger.get_ref().contents().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleLogger<S, C = SystemClock> {
    sink: S,
    policy: VerbosityPolicy,
    clock: C,
    errored: bool,
}

impl<S, C> ConsoleLogger<S, C> {
    /// Reports whether an error-or-worse level call was ever accepted.
    ///
    /// Reading the flag has no side effects; once true it stays true for
    /// the lifetime of the logger.
    #[must_use]
    pub const fn has_errored(&self) -> bool {
        self.errored
    }

    /// Borrows the policy consulted on every call.
    #[must_use]
    pub const fn policy(&self) -> &VerbosityPolicy {
        &self.policy
    }

    /// Borrows the underlying sink.
    #[must_use]
    pub const fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the underlying sink.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the logger and returns the wrapped sink.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.sink
    }
}
