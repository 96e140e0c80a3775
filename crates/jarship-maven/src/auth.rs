//! Repository authentication.
//!
//! Credentials are named indirectly: the publication settings say which
//! properties hold the username and password (`OSSRH_USERNAME` /
//! `OSSRH_PASSWORD` by default), and those are looked up in the project
//! properties, `.jarship.env`, then the process environment. By the time a
//! [`RepositoryTarget`] exists the values are already resolved, so this
//! module just applies them.

use reqwest::blocking::RequestBuilder;

use crate::repository::RepositoryTarget;

/// Apply HTTP basic authentication if the repository has a username.
///
/// A password without a username is not sent at all.
pub fn apply_auth(request: RequestBuilder, repo: &RepositoryTarget) -> RequestBuilder {
    let creds = &repo.credentials;
    match &creds.username {
        Some(user) => request.basic_auth(user, creds.password.as_deref()),
        None => {
            if !creds.is_empty() {
                tracing::warn!(
                    "password set for `{}` without a username; sending unauthenticated",
                    repo.name
                );
            }
            request
        }
    }
}
