//! crates/logger/src/sink.rs
//! Output sink collaborators consumed by the logger.

use std::io::{self, Write};

use verbosity::Verbosity;

/// Destination for rendered log lines.
///
/// The logger reads [`verbosity`](Self::verbosity) fresh on every call and
/// never caches it, so changing the sink's setting between calls takes
/// effect on the very next call. Lines handed to
/// [`write_line`](Self::write_line) already carry their trailing newline;
/// implementations append nothing.
pub trait Sink {
    /// Returns the verbosity the sink currently shows.
    fn verbosity(&self) -> Verbosity;

    /// Writes one already-terminated line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// In-memory sink that collects lines into a string buffer.
///
/// Useful anywhere output needs to be inspected after the fact, most
/// prominently in tests.
///
/// # Examples
///
/// ```
/// use console_logger::{BufferedSink, Sink, Verbosity};
///
/// let mut sink = BufferedSink::new(Verbosity::Verbose);
/// sink.write_line("[2000-01-01 12:12:12] [info] ready\n")?;
///
/// assert_eq!(sink.fetch(), "[2000-01-01 12:12:12] [info] ready\n");
/// assert!(sink.contents().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BufferedSink {
    verbosity: Verbosity,
    buffer: String,
}

impl BufferedSink {
    /// Creates an empty sink at the given verbosity.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            buffer: String::new(),
        }
    }

    /// Changes the verbosity reported to the logger.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Borrows everything written so far.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Drains and returns everything written so far.
    #[must_use]
    pub fn fetch(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

impl Default for BufferedSink {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}

impl Sink for BufferedSink {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buffer.push_str(line);
        Ok(())
    }
}

/// Sink that forwards lines to any [`io::Write`] implementor.
///
/// The writer is owned by value; I/O failures propagate unchanged to the
/// logging call.
///
/// # Examples
///
/// ```
/// use console_logger::{Sink, Verbosity, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new(), Verbosity::Normal);
/// sink.write_line("[2000-01-01 12:12:12] [error] boom\n")?;
///
/// let bytes = sink.into_inner();
/// assert!(bytes.ends_with(b"boom\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct WriterSink<W> {
    writer: W,
    verbosity: Verbosity,
}

impl<W> WriterSink<W> {
    /// Creates a sink around the writer at the given verbosity.
    #[must_use]
    pub const fn new(writer: W, verbosity: Verbosity) -> Self {
        Self { writer, verbosity }
    }

    /// Changes the verbosity reported to the logger.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write,
{
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_sink_accumulates_lines() {
        let mut sink = BufferedSink::new(Verbosity::Normal);
        sink.write_line("one\n").expect("write succeeds");
        sink.write_line("two\n").expect("write succeeds");

        assert_eq!(sink.contents(), "one\ntwo\n");
    }

    #[test]
    fn fetch_drains_the_buffer() {
        let mut sink = BufferedSink::new(Verbosity::Normal);
        sink.write_line("gone\n").expect("write succeeds");

        assert_eq!(sink.fetch(), "gone\n");
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn set_verbosity_changes_the_reported_value() {
        let mut sink = BufferedSink::new(Verbosity::Quiet);
        assert_eq!(sink.verbosity(), Verbosity::Quiet);

        sink.set_verbosity(Verbosity::Debug);
        assert_eq!(sink.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn writer_sink_forwards_bytes() {
        let mut sink = WriterSink::new(Vec::new(), Verbosity::Normal);
        sink.write_line("forwarded\n").expect("write succeeds");

        assert_eq!(sink.into_inner(), b"forwarded\n".to_vec());
    }

    #[test]
    fn writer_sink_propagates_io_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(FailingWriter, Verbosity::Normal);
        let error = sink.write_line("doomed\n").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
