//! The set of JAR artifacts a publication consists of.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::compile::ENCODING;
use crate::config::Config;

/// What an artifact contains. At most one artifact of each kind per publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Compiled classes and resources.
    Primary,
    Sources,
    Javadoc,
}

impl ArtifactKind {
    /// Maven classifier; the primary artifact has none.
    pub fn classifier(self) -> Option<&'static str> {
        match self {
            Self::Primary => None,
            Self::Sources => Some("sources"),
            Self::Javadoc => Some("javadoc"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Primary => "primary",
            Self::Sources => "sources",
            Self::Javadoc => "javadoc",
        })
    }
}

/// A license file copied into the archive root under a new name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseEntry {
    /// Path of the license file, relative to the project root.
    pub source: String,
    /// Entry name inside the archive.
    pub archive_name: String,
}

/// Metadata for one JAR to be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub classifier: Option<String>,
    pub content_charset: String,
    pub manifest_attributes: BTreeMap<String, String>,
    pub license: LicenseEntry,
    pub file_name: String,
}

impl Artifact {
    /// `group:artifact:version[:classifier]` identifier used in logs and errors.
    pub fn display_id(&self, config: &Config) -> String {
        match &self.classifier {
            Some(c) => format!("{}:{c}", config.coordinate()),
            None => config.coordinate(),
        }
    }
}

/// Artifacts keyed by kind; iteration order is primary, sources, javadoc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactSet {
    artifacts: BTreeMap<ArtifactKind, Artifact>,
}

impl ArtifactSet {
    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.get(&kind)
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.artifacts.contains_key(&kind)
    }

    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.artifacts.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    fn insert(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.kind, artifact);
    }
}

/// File name of a JAR following the Maven convention.
pub fn jar_file_name(artifact_id: &str, version: &str, classifier: Option<&str>) -> String {
    match classifier {
        Some(c) => format!("{artifact_id}-{version}-{c}.jar"),
        None => format!("{artifact_id}-{version}.jar"),
    }
}

/// Manifest attributes shared by every artifact of the project.
pub fn manifest_attributes(config: &Config) -> BTreeMap<String, String> {
    let mut attrs = BTreeMap::new();
    for group in ["Specification", "Implementation"] {
        attrs.insert(format!("{group}-Title"), config.name.clone());
        attrs.insert(format!("{group}-Vendor"), config.org_name.clone());
        attrs.insert(format!("{group}-Version"), config.version.clone());
    }
    attrs
}

/// Decide which artifacts to produce and assemble their metadata.
///
/// The primary artifact is always present; sources and javadoc follow
/// `hasSourcesJar` and `hasJavadocJar`.
pub fn build_artifacts(config: &Config) -> ArtifactSet {
    let mut set = ArtifactSet::default();
    let mut kinds = vec![ArtifactKind::Primary];
    if config.has_sources_jar {
        kinds.push(ArtifactKind::Sources);
    }
    if config.has_javadoc_jar {
        kinds.push(ArtifactKind::Javadoc);
    }

    let attributes = manifest_attributes(config);
    let license = LicenseEntry {
        source: config.license_file_name.clone(),
        archive_name: format!("{}_{}", config.license_file_name, config.artifact_id),
    };

    for kind in kinds {
        let classifier = kind.classifier();
        set.insert(Artifact {
            kind,
            classifier: classifier.map(str::to_string),
            content_charset: ENCODING.to_string(),
            manifest_attributes: attributes.clone(),
            license: license.clone(),
            file_name: jar_file_name(&config.artifact_id, &config.version, classifier),
        });
    }
    tracing::debug!("artifact set: {:?}", set.kinds());
    set
}
