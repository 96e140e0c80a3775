pub mod ops_build;
pub mod ops_package;
pub mod ops_publish;

use std::path::{Path, PathBuf};

use jarship_core::artifact::ArtifactKind;
use jarship_core::config::Config;
use jarship_core::properties::PropertySource;
use jarship_core::settings::ProjectSettings;
use jarship_util::errors::{JarshipError, JarshipResult};

/// Everything loaded from a project directory before the configuration is resolved.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_dir: PathBuf,
    pub properties: PropertySource,
    pub settings: ProjectSettings,
}

impl ProjectContext {
    /// Load properties and `jarship.toml` for the project at `project_dir`.
    pub fn load(project_dir: &Path, overrides: &[(String, String)]) -> JarshipResult<Self> {
        let properties = PropertySource::load(project_dir, overrides)?;
        let settings = ProjectSettings::load(project_dir)?;
        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            properties,
            settings,
        })
    }

    /// Resolve and validate the configuration.
    pub fn resolve_config(&self) -> Result<Config, JarshipError> {
        Config::resolve(self.properties.properties())
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.project_dir)
    }
}

/// Conventional directory layout of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn java_sources(&self) -> PathBuf {
        self.root.join("src").join("main").join("java")
    }

    pub fn resources(&self) -> PathBuf {
        self.root.join("src").join("main").join("resources")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    pub fn classes_dir(&self) -> PathBuf {
        self.build_dir().join("classes")
    }

    pub fn javadoc_dir(&self) -> PathBuf {
        self.build_dir().join("docs").join("javadoc")
    }

    /// Where packaged JARs are written.
    pub fn libs_dir(&self) -> PathBuf {
        self.build_dir().join("libs")
    }

    /// Where the POM is written.
    pub fn publications_dir(&self) -> PathBuf {
        self.build_dir().join("publications")
    }

    /// Directories whose files make up the content of an artifact kind.
    pub fn content_roots(&self, kind: ArtifactKind) -> Vec<PathBuf> {
        match kind {
            ArtifactKind::Primary => vec![self.classes_dir(), self.resources()],
            ArtifactKind::Sources => vec![self.java_sources(), self.resources()],
            ArtifactKind::Javadoc => vec![self.javadoc_dir()],
        }
    }
}
