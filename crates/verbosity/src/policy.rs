//! crates/verbosity/src/policy.rs
//! Level-to-threshold and level-to-tag tables with override support.

use super::level::LogLevel;
use super::threshold::Verbosity;

/// Minimum sink verbosity required for each level to be shown.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelThresholds {
    /// Threshold for emergency messages.
    pub emergency: Verbosity,
    /// Threshold for alert messages.
    pub alert: Verbosity,
    /// Threshold for critical messages.
    pub critical: Verbosity,
    /// Threshold for error messages.
    pub error: Verbosity,
    /// Threshold for warning messages.
    pub warning: Verbosity,
    /// Threshold for notice messages.
    pub notice: Verbosity,
    /// Threshold for info messages.
    pub info: Verbosity,
    /// Threshold for debug messages.
    pub debug: Verbosity,
}

impl LevelThresholds {
    /// Get the threshold for a specific level.
    #[must_use]
    pub const fn get(&self, level: LogLevel) -> Verbosity {
        match level {
            LogLevel::Emergency => self.emergency,
            LogLevel::Alert => self.alert,
            LogLevel::Critical => self.critical,
            LogLevel::Error => self.error,
            LogLevel::Warning => self.warning,
            LogLevel::Notice => self.notice,
            LogLevel::Info => self.info,
            LogLevel::Debug => self.debug,
        }
    }

    /// Set the threshold for a specific level.
    pub fn set(&mut self, level: LogLevel, verbosity: Verbosity) {
        match level {
            LogLevel::Emergency => self.emergency = verbosity,
            LogLevel::Alert => self.alert = verbosity,
            LogLevel::Critical => self.critical = verbosity,
            LogLevel::Error => self.error = verbosity,
            LogLevel::Warning => self.warning = verbosity,
            LogLevel::Notice => self.notice = verbosity,
            LogLevel::Info => self.info = verbosity,
            LogLevel::Debug => self.debug = verbosity,
        }
    }

    /// Creates a table mapping every level to the same threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbosity::{LevelThresholds, LogLevel, Verbosity};
    ///
    /// let table = LevelThresholds::uniform(Verbosity::Normal);
    /// assert_eq!(table.get(LogLevel::Debug), Verbosity::Normal);
    /// ```
    #[must_use]
    pub const fn uniform(verbosity: Verbosity) -> Self {
        Self {
            emergency: verbosity,
            alert: verbosity,
            critical: verbosity,
            error: verbosity,
            warning: verbosity,
            notice: verbosity,
            info: verbosity,
            debug: verbosity,
        }
    }
}

impl Default for LevelThresholds {
    /// The default table: warnings and worse at normal output, notice and
    /// info behind one verbose step, debug behind two. Debug-level sinks
    /// show everything by the threshold ordering.
    fn default() -> Self {
        Self {
            emergency: Verbosity::Normal,
            alert: Verbosity::Normal,
            critical: Verbosity::Normal,
            error: Verbosity::Normal,
            warning: Verbosity::Normal,
            notice: Verbosity::Verbose,
            info: Verbosity::Verbose,
            debug: Verbosity::VeryVerbose,
        }
    }
}

/// Optional display-tag override for each level.
///
/// A `None` entry falls back to the level's canonical lowercase name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelTags {
    /// Tag override for emergency messages.
    pub emergency: Option<String>,
    /// Tag override for alert messages.
    pub alert: Option<String>,
    /// Tag override for critical messages.
    pub critical: Option<String>,
    /// Tag override for error messages.
    pub error: Option<String>,
    /// Tag override for warning messages.
    pub warning: Option<String>,
    /// Tag override for notice messages.
    pub notice: Option<String>,
    /// Tag override for info messages.
    pub info: Option<String>,
    /// Tag override for debug messages.
    pub debug: Option<String>,
}

impl LevelTags {
    /// Get the tag override for a specific level, if any.
    #[must_use]
    pub fn get(&self, level: LogLevel) -> Option<&str> {
        match level {
            LogLevel::Emergency => self.emergency.as_deref(),
            LogLevel::Alert => self.alert.as_deref(),
            LogLevel::Critical => self.critical.as_deref(),
            LogLevel::Error => self.error.as_deref(),
            LogLevel::Warning => self.warning.as_deref(),
            LogLevel::Notice => self.notice.as_deref(),
            LogLevel::Info => self.info.as_deref(),
            LogLevel::Debug => self.debug.as_deref(),
        }
    }

    /// Set the tag override for a specific level.
    pub fn set(&mut self, level: LogLevel, tag: impl Into<String>) {
        let tag = Some(tag.into());
        match level {
            LogLevel::Emergency => self.emergency = tag,
            LogLevel::Alert => self.alert = tag,
            LogLevel::Critical => self.critical = tag,
            LogLevel::Error => self.error = tag,
            LogLevel::Warning => self.warning = tag,
            LogLevel::Notice => self.notice = tag,
            LogLevel::Info => self.info = tag,
            LogLevel::Debug => self.debug = tag,
        }
    }
}

/// Immutable visibility and tagging policy consulted on every log call.
///
/// Construction starts from the documented defaults and applies per-level
/// overrides through [`with_threshold`](Self::with_threshold) and
/// [`with_tag`](Self::with_tag); once built, the policy only answers
/// queries. Thread safety follows from immutability.
///
/// # Examples
///
/// ```
/// use verbosity::{LogLevel, Verbosity, VerbosityPolicy};
///
/// let policy = VerbosityPolicy::new()
///     .with_threshold(LogLevel::Emergency, Verbosity::Quiet);
///
/// // Only the overridden level's threshold changes.
/// assert!(policy.is_visible(LogLevel::Emergency, Verbosity::Quiet));
/// assert!(!policy.is_visible(LogLevel::Alert, Verbosity::Quiet));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityPolicy {
    thresholds: LevelThresholds,
    tags: LevelTags,
}

impl VerbosityPolicy {
    /// Creates a policy with the default threshold table and no tag
    /// overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy from explicit tables.
    #[must_use]
    pub const fn from_parts(thresholds: LevelThresholds, tags: LevelTags) -> Self {
        Self { thresholds, tags }
    }

    /// Overrides the minimum verbosity for one level.
    #[must_use]
    pub fn with_threshold(mut self, level: LogLevel, verbosity: Verbosity) -> Self {
        self.thresholds.set(level, verbosity);
        self
    }

    /// Overrides the display tag for one level.
    #[must_use]
    pub fn with_tag(mut self, level: LogLevel, tag: impl Into<String>) -> Self {
        self.tags.set(level, tag);
        self
    }

    /// Reports whether a level is visible at the sink's current verbosity.
    ///
    /// True iff `current >= thresholds[level]` under the [`Verbosity`]
    /// ordering. No side effects.
    #[must_use]
    pub fn is_visible(&self, level: LogLevel, current: Verbosity) -> bool {
        current >= self.thresholds.get(level)
    }

    /// Returns the display tag for a level.
    ///
    /// Falls back to the level's canonical name when no override was
    /// configured.
    #[must_use]
    pub fn tag_for(&self, level: LogLevel) -> &str {
        self.tags.get(level).unwrap_or_else(|| level.as_str())
    }

    /// Borrows the threshold table.
    #[must_use]
    pub const fn thresholds(&self) -> &LevelThresholds {
        &self.thresholds
    }

    /// Borrows the tag table.
    #[must_use]
    pub const fn tags(&self) -> &LevelTags {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_match_documented_table() {
        let table = LevelThresholds::default();
        assert_eq!(table.get(LogLevel::Emergency), Verbosity::Normal);
        assert_eq!(table.get(LogLevel::Alert), Verbosity::Normal);
        assert_eq!(table.get(LogLevel::Critical), Verbosity::Normal);
        assert_eq!(table.get(LogLevel::Error), Verbosity::Normal);
        assert_eq!(table.get(LogLevel::Warning), Verbosity::Normal);
        assert_eq!(table.get(LogLevel::Notice), Verbosity::Verbose);
        assert_eq!(table.get(LogLevel::Info), Verbosity::Verbose);
        assert_eq!(table.get(LogLevel::Debug), Verbosity::VeryVerbose);
    }

    #[test]
    fn set_updates_only_the_requested_level() {
        let mut table = LevelThresholds::default();
        table.set(LogLevel::Emergency, Verbosity::Quiet);

        assert_eq!(table.get(LogLevel::Emergency), Verbosity::Quiet);
        assert_eq!(table.get(LogLevel::Alert), Verbosity::Normal);
    }

    #[test]
    fn uniform_covers_every_level() {
        let table = LevelThresholds::uniform(Verbosity::Normal);
        for level in LogLevel::ALL {
            assert_eq!(table.get(level), Verbosity::Normal);
        }
    }

    #[test]
    fn tags_default_to_none() {
        let tags = LevelTags::default();
        for level in LogLevel::ALL {
            assert_eq!(tags.get(level), None);
        }
    }

    #[test]
    fn tag_set_and_get_round_trip() {
        let mut tags = LevelTags::default();
        tags.set(LogLevel::Error, "ERR");
        assert_eq!(tags.get(LogLevel::Error), Some("ERR"));
        assert_eq!(tags.get(LogLevel::Warning), None);
    }

    #[test]
    fn default_policy_gates_by_documented_thresholds() {
        let policy = VerbosityPolicy::new();

        assert!(policy.is_visible(LogLevel::Warning, Verbosity::Normal));
        assert!(!policy.is_visible(LogLevel::Info, Verbosity::Normal));
        assert!(policy.is_visible(LogLevel::Info, Verbosity::Verbose));
        assert!(!policy.is_visible(LogLevel::Debug, Verbosity::Verbose));
        assert!(policy.is_visible(LogLevel::Debug, Verbosity::VeryVerbose));
    }

    #[test]
    fn quiet_sink_suppresses_everything_by_default() {
        let policy = VerbosityPolicy::new();
        for level in LogLevel::ALL {
            assert!(!policy.is_visible(level, Verbosity::Quiet));
        }
    }

    #[test]
    fn debug_sink_shows_everything_by_default() {
        let policy = VerbosityPolicy::new();
        for level in LogLevel::ALL {
            assert!(policy.is_visible(level, Verbosity::Debug));
        }
    }

    #[test]
    fn threshold_override_leaves_other_levels_untouched() {
        let policy = VerbosityPolicy::new().with_threshold(LogLevel::Emergency, Verbosity::Quiet);

        assert!(policy.is_visible(LogLevel::Emergency, Verbosity::Quiet));
        assert!(!policy.is_visible(LogLevel::Alert, Verbosity::Quiet));
    }

    #[test]
    fn tag_for_falls_back_to_canonical_name() {
        let policy = VerbosityPolicy::new().with_tag(LogLevel::Critical, "CRIT");

        assert_eq!(policy.tag_for(LogLevel::Critical), "CRIT");
        assert_eq!(policy.tag_for(LogLevel::Warning), "warning");
    }

    #[test]
    fn from_parts_uses_the_supplied_tables() {
        let mut tags = LevelTags::default();
        tags.set(LogLevel::Info, "note");
        let policy =
            VerbosityPolicy::from_parts(LevelThresholds::uniform(Verbosity::Quiet), tags);

        assert!(policy.is_visible(LogLevel::Debug, Verbosity::Quiet));
        assert_eq!(policy.tag_for(LogLevel::Info), "note");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn policy_serde_round_trip() {
        let policy = VerbosityPolicy::new()
            .with_threshold(LogLevel::Emergency, Verbosity::Quiet)
            .with_tag(LogLevel::Error, "ERR");

        let json = serde_json::to_string(&policy).unwrap();
        let decoded: VerbosityPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, policy);
    }
}
