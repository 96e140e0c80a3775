//! Snapshot/release classification of version strings.
//!
//! Exactly one [`SnapshotPredicate`] is active per run. It decides both the
//! destination repository and whether artifacts are signed.

use std::fmt;

use crate::SNAPSHOT_SUFFIX;

/// Decides whether a version string denotes a snapshot build.
pub trait SnapshotPredicate: Send + Sync {
    fn is_snapshot(&self, version: &str) -> bool;
}

impl<F> SnapshotPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_snapshot(&self, version: &str) -> bool {
        self(version)
    }
}

/// Snapshot iff the version ends with a literal suffix (`-SNAPSHOT` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixPredicate {
    suffix: String,
}

impl SuffixPredicate {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for SuffixPredicate {
    fn default() -> Self {
        Self::new(SNAPSHOT_SUFFIX)
    }
}

impl SnapshotPredicate for SuffixPredicate {
    fn is_snapshot(&self, version: &str) -> bool {
        version.ends_with(&self.suffix)
    }
}

/// Snapshot iff the version is a semver with a pre-release component
/// (`1.0.0-rc.1`, `2.0.0-SNAPSHOT`).
///
/// Strings that are not valid semver fall back to the `-SNAPSHOT` suffix rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrereleasePredicate;

impl SnapshotPredicate for PrereleasePredicate {
    fn is_snapshot(&self, version: &str) -> bool {
        match semver::Version::parse(version) {
            Ok(v) => !v.pre.is_empty(),
            Err(_) => version.ends_with(SNAPSHOT_SUFFIX),
        }
    }
}

/// Outcome of classifying a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    Snapshot,
    Release,
}

impl VersionKind {
    pub fn classify(version: &str, predicate: &dyn SnapshotPredicate) -> Self {
        if predicate.is_snapshot(version) {
            Self::Snapshot
        } else {
            Self::Release
        }
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => write!(f, "snapshot"),
            Self::Release => write!(f, "release"),
        }
    }
}
