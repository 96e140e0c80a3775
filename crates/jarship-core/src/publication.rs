//! Publication metadata: identity, license, organization, and SCM info
//! attached to an artifact set.

use serde::Serialize;

use jarship_util::errors::JarshipError;

use crate::artifact::ArtifactSet;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scm {
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
    pub url: Option<String>,
}

impl Scm {
    pub fn is_empty(&self) -> bool {
        self.connection.is_none() && self.url.is_none()
    }
}

/// The full metadata + artifact-set bundle submitted to a repository.
///
/// Built once per invocation by [`Publication::assemble`] and read-only after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    group_id: String,
    artifact_id: String,
    version: String,
    name: String,
    description: String,
    url: Option<String>,
    license: License,
    organization: Organization,
    scm: Scm,
    artifacts: ArtifactSet,
}

impl Publication {
    /// Aggregate config and artifacts into a publication.
    ///
    /// Identity fields are already validated by [`Config::resolve`]; a blank
    /// one here is an [`JarshipError::InvariantViolation`].
    pub fn assemble(config: &Config, artifacts: ArtifactSet) -> Result<Self, JarshipError> {
        for (field, value) in [
            ("groupId", &config.group_id),
            ("artifactId", &config.artifact_id),
            ("version", &config.version),
        ] {
            if value.trim().is_empty() {
                return Err(JarshipError::InvariantViolation {
                    message: format!("publication {field} is blank"),
                });
            }
        }
        if artifacts.is_empty() {
            return Err(JarshipError::InvariantViolation {
                message: "publication has no artifacts".to_string(),
            });
        }

        Ok(Self {
            group_id: config.group_id.clone(),
            artifact_id: config.artifact_id.clone(),
            version: config.version.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            license: License {
                name: config.license.clone(),
                url: config.license_url.clone(),
            },
            organization: Organization {
                name: config.org_name.clone(),
                url: config.org_url.clone(),
            },
            scm: Scm {
                connection: config.scm_connection.clone(),
                developer_connection: config.scm_connection.clone(),
                url: config.scm_url.clone(),
            },
            artifacts,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn license(&self) -> &License {
        &self.license
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    pub fn scm(&self) -> &Scm {
        &self.scm
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    /// `group:artifact:version`.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// File name of the POM for this publication.
    pub fn pom_file_name(&self) -> String {
        format!("{}-{}.pom", self.artifact_id, self.version)
    }
}
