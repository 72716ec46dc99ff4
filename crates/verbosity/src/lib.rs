#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `verbosity` provides the level and threshold vocabulary shared by the
//! console logging workspace: the closed [`LogLevel`] severity enumeration,
//! the ordered [`Verbosity`] threshold a sink currently shows, and the
//! [`VerbosityPolicy`] that decides whether a level is visible at a given
//! threshold and which tag to print for it.
//!
//! # Design
//!
//! The policy holds two fully populated tables, [`LevelThresholds`] and
//! [`LevelTags`], with one explicit field per level and match-based
//! dispatch. Both tables ship sane defaults and accept per-level overrides
//! at construction time through the `with_*` builders; the policy exposes no
//! mutating methods afterwards, so a shared reference is safe to consult
//! from any number of call sites.
//!
//! # Invariants
//!
//! - Every [`LogLevel`] has a threshold: defaulted tables leave no level
//!   unmapped, and overrides replace entries rather than removing them.
//! - [`Verbosity`] ordering is total, with [`Verbosity::Quiet`] the least
//!   permissive and [`Verbosity::Debug`] the most; a debug-level sink
//!   therefore shows every level under the default table.
//! - [`VerbosityPolicy::is_visible`] has no side effects.
//!
//! # Examples
//!
//! ```
//! use verbosity::{LogLevel, Verbosity, VerbosityPolicy};
//!
//! let policy = VerbosityPolicy::new();
//! assert!(policy.is_visible(LogLevel::Warning, Verbosity::Normal));
//! assert!(!policy.is_visible(LogLevel::Info, Verbosity::Normal));
//! assert_eq!(policy.tag_for(LogLevel::Warning), "warning");
//!
//! let relabelled = VerbosityPolicy::new()
//!     .with_threshold(LogLevel::Emergency, Verbosity::Quiet)
//!     .with_tag(LogLevel::Emergency, "EMERG");
//! assert!(relabelled.is_visible(LogLevel::Emergency, Verbosity::Quiet));
//! assert_eq!(relabelled.tag_for(LogLevel::Emergency), "EMERG");
//! ```

mod level;
mod policy;
mod threshold;

pub use level::{LogLevel, ParseLevelError};
pub use policy::{LevelTags, LevelThresholds, VerbosityPolicy};
pub use threshold::{ParseVerbosityError, Verbosity};
