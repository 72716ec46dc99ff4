//! crates/logger/src/clock.rs
//! Time source abstraction and timestamp rendering.

use std::time::SystemTime;

use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Timestamp format rendered at the start of every log line.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Fallback rendered if the timestamp itself fails to format.
const TIMESTAMP_FALLBACK: &str = "1970-01-01 00:00:00";

/// Time source consulted once per visible log call.
///
/// Injecting the clock through the constructor keeps the logger's output
/// deterministic under test: substitute a [`FixedClock`] and nothing else
/// about the call path changes.
pub trait Clock {
    /// Returns the current moment.
    fn now(&self) -> OffsetDateTime;
}

/// Clock backed by [`SystemTime::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::from(SystemTime::now())
    }
}

/// Clock that always reports the same moment.
///
/// # Examples
///
/// ```
/// use console_logger::{Clock, FixedClock};
/// use time::macros::datetime;
///
/// let clock = FixedClock::new(datetime!(2000-01-01 12:12:12 UTC));
/// assert_eq!(clock.now(), datetime!(2000-01-01 12:12:12 UTC));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    moment: OffsetDateTime,
}

impl FixedClock {
    /// Creates a clock pinned to the given moment.
    #[must_use]
    pub const fn new(moment: OffsetDateTime) -> Self {
        Self { moment }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.moment
    }
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub(crate) fn format_timestamp(moment: OffsetDateTime) -> String {
    moment
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| TIMESTAMP_FALLBACK.to_string())
}
