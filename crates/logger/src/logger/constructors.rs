use verbosity::VerbosityPolicy;

use super::ConsoleLogger;
use crate::clock::SystemClock;

impl<S> ConsoleLogger<S> {
    /// Creates a logger with the default policy and the system clock.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_policy(sink, VerbosityPolicy::new())
    }

    /// Creates a logger with an explicit policy and the system clock.
    #[must_use]
    pub fn with_policy(sink: S, policy: VerbosityPolicy) -> Self {
        Self::with_parts(sink, policy, SystemClock)
    }
}

impl<S, C> ConsoleLogger<S, C> {
    /// Creates a logger with the default policy and an explicit clock.
    ///
    /// Substituting the clock changes nothing but the timestamps, which is
    /// what keeps output assertable in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_logger::{BufferedSink, ConsoleLogger, FixedClock, LogContext, Verbosity};
    /// use time::macros::datetime;
    ///
    /// let clock = FixedClock::new(datetime!(2000-01-01 12:12:12 UTC));
    /// let mut logger = ConsoleLogger::with_clock(BufferedSink::new(Verbosity::Normal), clock);
    ///
    /// logger.error("boom", &LogContext::new())?;
    /// assert_eq!(
    ///     logger.get_ref().contents(),
    ///     "[2000-01-01 12:12:12] [error] boom\n"
    /// );
    /// # Ok::<(), std::io::Error>(())
    /// ```
    #[must_use]
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self::with_parts(sink, VerbosityPolicy::new(), clock)
    }

    /// Creates a logger from explicit parts.
    #[must_use]
    pub fn with_parts(sink: S, policy: VerbosityPolicy, clock: C) -> Self {
        Self {
            sink,
            policy,
            clock,
            errored: false,
        }
    }
}
