use std::fmt;
use std::io;

use verbosity::LogLevel;

use super::ConsoleLogger;
use crate::clock::{Clock, format_timestamp};
use crate::context::LogContext;
use crate::error::LogError;
use crate::interpolate::interpolate;
use crate::sink::Sink;

impl<S, C> ConsoleLogger<S, C>
where
    S: Sink,
    C: Clock,
{
    /// Logs a message at an explicit level.
    ///
    /// The call first latches the has-errored flag when the level is
    /// `error` or more severe, then consults the policy against the sink's
    /// current verbosity. Suppressed calls return `Ok(())` without writing;
    /// visible calls render `[<timestamp>] [<tag>] <message>\n` and hand the
    /// finished line to the sink, whose I/O errors propagate unchanged.
    ///
    /// The message may be any [`fmt::Display`] value; it is stringified
    /// before `{key}` placeholders are substituted from `context`.
    pub fn log(
        &mut self,
        level: LogLevel,
        message: impl fmt::Display,
        context: &LogContext,
    ) -> io::Result<()> {
        if level.is_error_or_worse() {
            self.errored = true;
        }

        // Read fresh on every call; the sink's setting may change between calls.
        if !self.policy.is_visible(level, self.sink.verbosity()) {
            return Ok(());
        }

        let timestamp = format_timestamp(self.clock.now());
        let rendered = interpolate(&message.to_string(), context);
        let tag = self.policy.tag_for(level);
        let line = format!("[{timestamp}] [{tag}] {rendered}\n");
        self.sink.write_line(&line)
    }

    /// Logs a message at a level given by name.
    ///
    /// The name is validated against the severity enumeration before
    /// anything else happens: an unknown name fails with
    /// [`LogError::InvalidLevel`], writing nothing and leaving the
    /// has-errored flag untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_logger::{BufferedSink, ConsoleLogger, LogContext, LogError, Verbosity};
    ///
    /// let mut logger = ConsoleLogger::new(BufferedSink::new(Verbosity::Verbose));
    ///
    /// logger.log_named("warning", "watch out", &LogContext::new())?;
    /// let rejected = logger.log_named("invalid level", "Foo", &LogContext::new());
    /// assert!(matches!(rejected, Err(LogError::InvalidLevel { .. })));
    /// # Ok::<(), console_logger::LogError>(())
    /// ```
    pub fn log_named(
        &mut self,
        level: &str,
        message: impl fmt::Display,
        context: &LogContext,
    ) -> Result<(), LogError> {
        let level: LogLevel = level.parse()?;
        self.log(level, message, context)?;
        Ok(())
    }
}
