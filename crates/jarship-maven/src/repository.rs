//! Repository targets: snapshot/release selection, URL layout, credentials.

use std::fmt;

use serde::Serialize;

use jarship_core::properties::PropertySource;
use jarship_core::settings::PublicationSettings;
use jarship_core::version::SnapshotPredicate;

/// Username/password pair for a repository. Never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Read the two named credential properties.
    pub fn from_source(source: &PropertySource, username_from: &str, password_from: &str) -> Self {
        let creds = Self {
            username: source.lookup(username_from),
            password: source.lookup(password_from),
        };
        if creds.username.is_none() {
            tracing::warn!("credential property `{username_from}` is not set");
        }
        if creds.password.is_none() {
            tracing::warn!("credential property `{password_from}` is not set");
        }
        creds
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .finish()
    }
}

/// The single repository a publish run uploads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryTarget {
    pub name: String,
    #[serde(skip)]
    pub credentials: Credentials,
    pub url: String,
}

impl RepositoryTarget {
    pub fn new(name: impl Into<String>, url: &str, credentials: Credentials) -> Self {
        Self {
            name: name.into(),
            url: url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Standard Maven layout path for a given coordinate.
    ///
    /// `com.example:demo-lib:1.0.0` becomes `com/example/demo-lib/1.0.0`
    pub fn coordinate_path(group: &str, artifact: &str, version: &str) -> String {
        format!("{}/{}/{}", group.replace('.', "/"), artifact, version)
    }

    /// Full URL to a specific file within the repository.
    pub fn file_url(&self, group: &str, artifact: &str, version: &str, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url,
            Self::coordinate_path(group, artifact, version),
            filename
        )
    }

}

/// Choose the snapshot or the release URL for `version`.
///
/// Deterministic: returns `snapshot_repo` iff the predicate classifies the
/// version as a snapshot, `release_repo` otherwise.
pub fn select<'a>(
    version: &str,
    snapshot_repo: &'a str,
    release_repo: &'a str,
    predicate: &dyn SnapshotPredicate,
) -> &'a str {
    if predicate.is_snapshot(version) {
        snapshot_repo
    } else {
        release_repo
    }
}

/// Build the [`RepositoryTarget`] for a run from publication settings.
pub fn select_target(
    version: &str,
    settings: &PublicationSettings,
    predicate: &dyn SnapshotPredicate,
    credentials: Credentials,
) -> RepositoryTarget {
    let url = select(
        version,
        &settings.snapshot_repo,
        &settings.release_repo,
        predicate,
    );
    tracing::debug!("version {version} -> {url}");
    RepositoryTarget::new(settings.name.clone(), url, credentials)
}
