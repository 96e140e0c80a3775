//! CLI argument definitions for Jarship.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use jarship_core::properties::parse_override;

#[derive(Parser, Debug)]
#[command(
    name = "jarship",
    version,
    about = "Package, sign and publish Java libraries to Maven repositories",
    long_about = "Jarship reads a project's gradle.properties, builds the primary, sources and \
                  javadoc JARs with a generated POM, signs release artifacts with GnuPG and \
                  uploads everything to a snapshot or release repository."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if jarship was started in <DIR>
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: PropertyArgs,
}

/// `-P KEY=VALUE` overrides.
///
/// Accepted both before and after the subcommand; the two lists are
/// concatenated, so later values win.
#[derive(Args, Debug, Clone, Default)]
pub struct PropertyArgs {
    /// Set a project property, overriding gradle.properties (repeatable)
    #[arg(
        short = 'P',
        long = "property",
        value_name = "KEY=VALUE",
        value_parser = parse_override
    )]
    pub properties: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the project configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        overrides: PropertyArgs,
    },

    /// Show the artifacts that would be produced and the target repository
    Artifacts {
        #[command(flatten)]
        overrides: PropertyArgs,
    },

    /// Print the generated POM
    Pom {
        #[command(flatten)]
        overrides: PropertyArgs,
    },

    /// Compile, document and package the JARs
    Build {
        #[command(flatten)]
        overrides: PropertyArgs,
    },

    /// Build, sign and upload the publication
    Publish {
        /// Sign and plan the uploads without sending anything
        #[arg(long)]
        dry_run: bool,
        /// Package existing build output without running javac/javadoc
        #[arg(long)]
        skip_build: bool,
        #[command(flatten)]
        overrides: PropertyArgs,
    },
}

impl Command {
    fn overrides(&self) -> &PropertyArgs {
        match self {
            Command::Config { overrides, .. }
            | Command::Artifacts { overrides }
            | Command::Pom { overrides }
            | Command::Build { overrides }
            | Command::Publish { overrides, .. } => overrides,
        }
    }
}

impl Cli {
    /// Every `-P` override in command-line order.
    pub fn properties(&self) -> Vec<(String, String)> {
        self.overrides
            .properties
            .iter()
            .chain(&self.command.overrides().properties)
            .cloned()
            .collect()
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
