//! Publication settings loaded from the optional `jarship.toml`.
//!
//! ```toml
//! [publication]
//! name = "OSSRH"
//! username-from = "OSSRH_USERNAME"
//! password-from = "OSSRH_PASSWORD"
//! snapshot-repo = "https://s01.oss.sonatype.org/content/repositories/snapshots/"
//! release-repo = "https://s01.oss.sonatype.org/service/local/staging/deploy/maven2/"
//! predicate = "suffix"          # or "prerelease"
//! snapshot-suffix = "-SNAPSHOT"
//! ```
//!
//! Every key is optional; absent keys fall back to the Sonatype OSSRH defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use jarship_util::errors::JarshipError;

use crate::version::{PrereleasePredicate, SnapshotPredicate, SuffixPredicate};
use crate::SNAPSHOT_SUFFIX;

/// File name of the optional settings file.
pub const SETTINGS_FILE: &str = "jarship.toml";

pub const OSSRH_SNAPSHOT_URL: &str =
    "https://s01.oss.sonatype.org/content/repositories/snapshots/";
pub const OSSRH_RELEASE_URL: &str =
    "https://s01.oss.sonatype.org/service/local/staging/deploy/maven2/";

/// Top-level layout of `jarship.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub publication: PublicationSettings,
}

/// Where and how a publication is uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PublicationSettings {
    #[serde(default = "default_name")]
    pub name: String,
    /// Name of the property holding the repository username.
    #[serde(default = "default_username_from")]
    pub username_from: String,
    /// Name of the property holding the repository password.
    #[serde(default = "default_password_from")]
    pub password_from: String,
    #[serde(default = "default_snapshot_repo")]
    pub snapshot_repo: String,
    #[serde(default = "default_release_repo")]
    pub release_repo: String,
    #[serde(default)]
    pub predicate: PredicateKind,
    #[serde(default = "default_suffix")]
    pub snapshot_suffix: String,
}

/// Which [`SnapshotPredicate`] a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateKind {
    #[default]
    Suffix,
    Prerelease,
}

impl Default for PublicationSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            username_from: default_username_from(),
            password_from: default_password_from(),
            snapshot_repo: default_snapshot_repo(),
            release_repo: default_release_repo(),
            predicate: PredicateKind::default(),
            snapshot_suffix: default_suffix(),
        }
    }
}

impl PublicationSettings {
    /// Build the predicate these settings select.
    pub fn snapshot_predicate(&self) -> Box<dyn SnapshotPredicate> {
        match self.predicate {
            PredicateKind::Suffix => Box::new(SuffixPredicate::new(self.snapshot_suffix.clone())),
            PredicateKind::Prerelease => Box::new(PrereleasePredicate),
        }
    }
}

fn default_name() -> String {
    "OSSRH".to_string()
}

fn default_username_from() -> String {
    "OSSRH_USERNAME".to_string()
}

fn default_password_from() -> String {
    "OSSRH_PASSWORD".to_string()
}

fn default_snapshot_repo() -> String {
    OSSRH_SNAPSHOT_URL.to_string()
}

fn default_release_repo() -> String {
    OSSRH_RELEASE_URL.to_string()
}

fn default_suffix() -> String {
    SNAPSHOT_SUFFIX.to_string()
}

impl ProjectSettings {
    /// Load `jarship.toml` from `project_dir`, or return defaults if the file doesn't exist.
    pub fn load(project_dir: &Path) -> Result<Self, JarshipError> {
        let path = project_dir.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, JarshipError> {
        toml::from_str(content).map_err(|e| JarshipError::Manifest {
            message: format!("Failed to parse {SETTINGS_FILE}: {e}"),
        })
    }
}
