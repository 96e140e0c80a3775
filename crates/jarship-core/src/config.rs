//! Resolved project configuration.
//!
//! [`Config::resolve`] turns the raw property mapping into a validated,
//! immutable struct. Every required key must be present and parseable before
//! any other component runs; the first problem found is returned.

use std::collections::BTreeMap;

use serde::Serialize;

use jarship_util::errors::JarshipError;

/// Validated project configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Enables the entire publish/sign flow.
    pub has_publication: bool,
    /// Enables signing of release artifacts.
    pub publication_signing: bool,
    pub has_javadoc_jar: bool,
    pub has_sources_jar: bool,

    pub group_id: String,
    pub artifact_id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub url: Option<String>,
    pub license_url: Option<String>,
    pub scm_connection: Option<String>,
    pub scm_url: Option<String>,
    pub license: String,
    /// License file bundled into every JAR.
    pub license_file_name: String,

    pub org_name: String,
    pub org_url: String,

    /// Target Java release.
    pub jdk_version: u32,
    pub jdk_enable_preview: bool,
    /// Early-access build whose API docs Javadoc should link against.
    pub jdk_early_access_doc: Option<String>,
}

impl Config {
    /// Resolve and validate a configuration from raw properties.
    pub fn resolve(raw: &BTreeMap<String, String>) -> Result<Self, JarshipError> {
        let r = Reader { raw };
        let config = Self {
            has_publication: r.required_bool("hasPublication")?,
            publication_signing: r.required_bool("publicationSigning")?,
            has_javadoc_jar: r.required_bool("hasJavadocJar")?,
            has_sources_jar: r.required_bool("hasSourcesJar")?,
            group_id: r.required("projGroupId")?,
            artifact_id: r.required("projArtifactId")?,
            name: r.required("projName")?,
            version: r.required("projVersion")?,
            description: r.required("projDesc")?,
            url: r.optional("projUrl"),
            license_url: r.optional("projLicenseUrl"),
            scm_connection: r.optional("projScmConnection"),
            scm_url: r.optional("projScmUrl"),
            license: r.required("projLicense")?,
            license_file_name: r.required("projLicenseFileName")?,
            org_name: r.required("orgName")?,
            org_url: r.required("orgUrl")?,
            jdk_version: r.required_u32("jdkVersion")?,
            jdk_enable_preview: r.required_bool("jdkEnablePreview")?,
            jdk_early_access_doc: r.optional("jdkEarlyAccessDoc"),
        };
        tracing::debug!(
            "resolved config for {}:{}:{}",
            config.group_id,
            config.artifact_id,
            config.version
        );
        Ok(config)
    }

    /// `group:artifact:version` coordinate.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

struct Reader<'a> {
    raw: &'a BTreeMap<String, String>,
}

impl Reader<'_> {
    fn optional(&self, key: &str) -> Option<String> {
        self.raw
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn required(&self, key: &str) -> Result<String, JarshipError> {
        self.optional(key).ok_or_else(|| JarshipError::MissingConfig {
            key: key.to_string(),
        })
    }

    fn required_bool(&self, key: &str) -> Result<bool, JarshipError> {
        let value = self.required(key)?;
        parse_bool(&value).ok_or_else(|| JarshipError::InvalidConfig {
            key: key.to_string(),
            value,
            expected: "true or false".to_string(),
        })
    }

    fn required_u32(&self, key: &str) -> Result<u32, JarshipError> {
        let value = self.required(key)?;
        match value.parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(JarshipError::InvalidConfig {
                key: key.to_string(),
                value,
                expected: "a positive integer".to_string(),
            }),
        }
    }
}

/// Parse a boolean property, case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
