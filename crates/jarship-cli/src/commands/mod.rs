//! Command dispatch and handler modules.

mod artifacts;
mod build;
mod config;
mod pom;
mod publish;

use std::path::Path;

use miette::Result;

use jarship_core::properties::PROPERTIES_FILE;
use jarship_ops::ProjectContext;
use jarship_util::errors::JarshipError;
use jarship_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = load_context(cli.project_dir.as_deref(), &cli.properties())?;
    match cli.command {
        Command::Config { json, .. } => config::exec(&ctx, json),
        Command::Artifacts { .. } => artifacts::exec(&ctx),
        Command::Pom { .. } => pom::exec(&ctx),
        Command::Build { .. } => build::exec(&ctx, cli.verbose),
        Command::Publish {
            dry_run,
            skip_build,
            ..
        } => publish::exec(&ctx, dry_run, skip_build),
    }
}

/// Load the project at `-C <dir>`, or the nearest ancestor of the working
/// directory holding a `gradle.properties`.
fn load_context(project_dir: Option<&Path>, overrides: &[(String, String)]) -> Result<ProjectContext> {
    let root = match project_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().map_err(JarshipError::Io)?;
            find_ancestor_with(&cwd, PROPERTIES_FILE).unwrap_or(cwd)
        }
    };
    if !root.is_dir() {
        return Err(JarshipError::Generic {
            message: format!("Project directory {} does not exist", root.display()),
        }
        .into());
    }
    tracing::debug!("project root: {}", root.display());
    ProjectContext::load(&root, overrides)
}
