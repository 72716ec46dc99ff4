use std::fmt;
use std::io;

use verbosity::LogLevel;

use super::ConsoleLogger;
use crate::clock::Clock;
use crate::context::LogContext;
use crate::sink::Sink;

/// One thin wrapper per severity, each delegating to
/// [`log`](ConsoleLogger::log) with its level constant. The fixed level
/// means none of these can fail level validation; only sink I/O errors
/// surface.
impl<S, C> ConsoleLogger<S, C>
where
    S: Sink,
    C: Clock,
{
    /// Logs at [`LogLevel::Emergency`].
    pub fn emergency(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Emergency, message, context)
    }

    /// Logs at [`LogLevel::Alert`].
    pub fn alert(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Alert, message, context)
    }

    /// Logs at [`LogLevel::Critical`].
    pub fn critical(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Critical, message, context)
    }

    /// Logs at [`LogLevel::Error`].
    pub fn error(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Error, message, context)
    }

    /// Logs at [`LogLevel::Warning`].
    pub fn warning(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Warning, message, context)
    }

    /// Logs at [`LogLevel::Notice`].
    pub fn notice(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Notice, message, context)
    }

    /// Logs at [`LogLevel::Info`].
    pub fn info(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Info, message, context)
    }

    /// Logs at [`LogLevel::Debug`].
    pub fn debug(&mut self, message: impl fmt::Display, context: &LogContext) -> io::Result<()> {
        self.log(LogLevel::Debug, message, context)
    }
}
