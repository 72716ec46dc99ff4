//! crates/verbosity/src/threshold.rs
//! Ordered visibility threshold owned by the output sink.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How much detail the sink currently shows.
///
/// The derived ordering is total: [`Verbosity::Quiet`] shows the least,
/// [`Verbosity::Debug`] shows everything. A level is visible when the sink's
/// current verbosity is at or above the level's configured threshold.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Suppress everything below an explicit quiet-level threshold.
    Quiet,
    /// Default amount of output.
    Normal,
    /// Additional detail (one `-v`).
    Verbose,
    /// Even more detail (`-vv`).
    VeryVerbose,
    /// Full diagnostic output (`-vvv` and beyond).
    Debug,
}

impl Verbosity {
    /// All thresholds in ascending order of detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::Verbosity;
    ///
    /// assert_eq!(Verbosity::ALL[0], Verbosity::Quiet);
    /// assert_eq!(Verbosity::ALL[4], Verbosity::Debug);
    /// ```
    pub const ALL: [Self; 5] = [
        Self::Quiet,
        Self::Normal,
        Self::Verbose,
        Self::VeryVerbose,
        Self::Debug,
    ];

    /// Returns the lowercase identifier for the threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::Verbosity;
    ///
    /// assert_eq!(Verbosity::VeryVerbose.as_str(), "very-verbose");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
            Self::VeryVerbose => "very-verbose",
            Self::Debug => "debug",
        }
    }

    /// Maps a repeated verbose-flag count to a threshold.
    ///
    /// Zero means the default amount of output; each additional count raises
    /// the threshold one step, saturating at [`Verbosity::Debug`]. The
    /// mapping is configuration only; parsing command lines is up to the
    /// caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::Verbosity;
    ///
    /// assert_eq!(Verbosity::from_verbose_count(0), Verbosity::Normal);
    /// assert_eq!(Verbosity::from_verbose_count(1), Verbosity::Verbose);
    /// assert_eq!(Verbosity::from_verbose_count(2), Verbosity::VeryVerbose);
    /// assert_eq!(Verbosity::from_verbose_count(9), Verbosity::Debug);
    /// ```
    #[must_use]
    pub const fn from_verbose_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Debug,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Verbosity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised verbosity threshold")]
pub struct ParseVerbosityError {
    _private: (),
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "very-verbose" => Ok(Self::VeryVerbose),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseVerbosityError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_quiet_to_debug() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::VeryVerbose);
        assert!(Verbosity::VeryVerbose < Verbosity::Debug);
    }

    #[test]
    fn all_is_sorted_ascending() {
        let mut sorted = Verbosity::ALL;
        sorted.sort();
        assert_eq!(sorted, Verbosity::ALL);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for verbosity in Verbosity::ALL {
            assert_eq!(verbosity.as_str().parse::<Verbosity>(), Ok(verbosity));
        }
    }

    #[test]
    fn parse_rejects_unknown_identifiers() {
        assert!("loud".parse::<Verbosity>().is_err());
        assert!("very verbose".parse::<Verbosity>().is_err());
    }

    #[test]
    fn verbose_count_saturates_at_debug() {
        assert_eq!(Verbosity::from_verbose_count(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_verbose_count(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_verbose_count(2), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::from_verbose_count(3), Verbosity::Debug);
        assert_eq!(Verbosity::from_verbose_count(u8::MAX), Verbosity::Debug);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Verbosity::VeryVerbose).unwrap();
        let decoded: Verbosity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Verbosity::VeryVerbose);
    }
}
