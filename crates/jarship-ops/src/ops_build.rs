//! Operation: compile sources, generate Javadoc, and package the JARs.
//!
//! `javac` and `javadoc` are external collaborators; this module only finds
//! them, hands them the options derived from the configuration, and reports
//! failures. Javadoc failures are warnings, never fatal.

use std::path::{Path, PathBuf};
use std::time::Instant;

use jarship_core::artifact::build_artifacts;
use jarship_core::compile::{parse_jdk_major, JavacOptions, JavadocOptions};
use jarship_core::config::Config;
use jarship_util::errors::{JarshipError, JarshipResult};
use jarship_util::fs::{ensure_dir, walk_files};
use jarship_util::process::CommandBuilder;
use jarship_util::progress::{status, status_warn};

use crate::ops_package::{self, PackagedArtifact};
use crate::{ProjectContext, ProjectLayout};

/// Options for a build invocation.
#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
    /// Suppress non-error output.
    pub quiet: bool,
}

/// The JDK tools used for a build.
#[derive(Debug, Clone)]
pub struct Jdk {
    pub javac: String,
    pub javadoc: String,
    /// Major version of the running JDK, if it could be determined.
    pub major: Option<u32>,
}

impl Jdk {
    /// Locate `javac`/`javadoc`: `JAVA_HOME/bin` first, then `PATH`.
    pub fn discover() -> Self {
        let home = std::env::var("JAVA_HOME").ok().map(PathBuf::from);
        let tool = |name: &str| -> String {
            let exe = if cfg!(windows) {
                format!("{name}.exe")
            } else {
                name.to_string()
            };
            match &home {
                Some(h) if h.join("bin").join(&exe).is_file() => {
                    h.join("bin").join(exe).to_string_lossy().into_owned()
                }
                _ => name.to_string(),
            }
        };
        let javac = tool("javac");
        let major = detect_major(&javac);
        tracing::debug!("using {javac} (major {major:?})");
        Self {
            javadoc: tool("javadoc"),
            javac,
            major,
        }
    }
}

fn detect_major(javac: &str) -> Option<u32> {
    let output = CommandBuilder::new(javac).arg("-version").exec().ok()?;
    let text = format!(
        "{}\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    parse_jdk_major(&text)
}

/// Result of the compile phase.
#[derive(Debug, Clone, Default)]
pub struct CompileOutput {
    pub sources: usize,
    pub javadoc: bool,
}

/// Collect `.java` files under `dir`.
pub fn collect_java_files(dir: &Path) -> Result<Vec<PathBuf>, JarshipError> {
    Ok(walk_files(dir)?
        .into_iter()
        .filter(|p| p.extension().is_some_and(|e| e == "java"))
        .collect())
}

/// Compile `src/main/java` into `build/classes`, then generate Javadoc when a
/// javadoc JAR is wanted.
pub fn compile(ctx: &ProjectContext, config: &Config, opts: &BuildOptions) -> JarshipResult<CompileOutput> {
    let layout = ctx.layout();
    let sources = collect_java_files(&layout.java_sources())?;
    if sources.is_empty() {
        if !opts.quiet {
            status_warn("Warning", "no Java sources found in src/main/java");
        }
        return Ok(CompileOutput::default());
    }

    let jdk = Jdk::discover();
    let javac_opts = JavacOptions::from_config(config, jdk.major.unwrap_or(config.jdk_version));
    if let Some(required) = javac_opts.toolchain_request {
        status_warn(
            "Toolchain",
            &format!("JDK {required} requested; compiling with the JDK on JAVA_HOME/PATH"),
        );
    }

    if !opts.quiet {
        status(
            "Compiling",
            &format!("{} v{} ({} files)", config.artifact_id, config.version, sources.len()),
        );
    }
    ensure_dir(&layout.classes_dir()).map_err(JarshipError::Io)?;
    javac_command(&jdk, &javac_opts, &layout, &sources)
        .exec_checked()
        .map_err(|e| JarshipError::Generic {
            message: format!("Compilation failed: {e}"),
        })?;

    let javadoc = if config.has_javadoc_jar {
        run_javadoc(&jdk, config, &layout, &sources, opts)?
    } else {
        false
    };

    Ok(CompileOutput {
        sources: sources.len(),
        javadoc,
    })
}

/// The `javac` invocation for a set of sources.
pub fn javac_command(
    jdk: &Jdk,
    opts: &JavacOptions,
    layout: &ProjectLayout,
    sources: &[PathBuf],
) -> CommandBuilder {
    CommandBuilder::new(&jdk.javac)
        .args(opts.to_args())
        .arg("-d")
        .arg(layout.classes_dir().to_string_lossy())
        .args(sources.iter().map(|s| s.to_string_lossy().into_owned()))
}

/// The `javadoc` invocation for a set of sources.
pub fn javadoc_command(
    jdk: &Jdk,
    opts: &JavadocOptions,
    javac_opts: &JavacOptions,
    layout: &ProjectLayout,
    sources: &[PathBuf],
) -> CommandBuilder {
    let mut cmd = CommandBuilder::new(&jdk.javadoc).args(opts.to_args());
    if let Some(release) = javac_opts.release {
        cmd = cmd.arg("--release").arg(release.to_string());
    }
    if javac_opts.enable_preview {
        cmd = cmd.arg("--enable-preview");
    }
    cmd.arg("-quiet")
        .arg("-d")
        .arg(layout.javadoc_dir().to_string_lossy())
        .arg("-sourcepath")
        .arg(layout.java_sources().to_string_lossy())
        .args(sources.iter().map(|s| s.to_string_lossy().into_owned()))
}

fn run_javadoc(
    jdk: &Jdk,
    config: &Config,
    layout: &ProjectLayout,
    sources: &[PathBuf],
    opts: &BuildOptions,
) -> Result<bool, JarshipError> {
    let javadoc_opts = JavadocOptions::from_config(config);
    let javac_opts = JavacOptions::from_config(config, jdk.major.unwrap_or(config.jdk_version));
    ensure_dir(&layout.javadoc_dir())?;
    if !opts.quiet {
        status("Documenting", &javadoc_opts.window_title);
    }
    match javadoc_command(jdk, &javadoc_opts, &javac_opts, layout, sources).exec_checked() {
        Ok(_) => Ok(true),
        Err(e) if javadoc_opts.fail_on_error => Err(e),
        Err(e) => {
            tracing::warn!("javadoc failed: {e}");
            status_warn("Javadoc", "generation failed; continuing without documentation");
            Ok(false)
        }
    }
}

/// Result of `jarship build`.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub compiled: CompileOutput,
    pub packaged: Vec<PackagedArtifact>,
}

/// Compile, document, and package every artifact.
///
/// Runs regardless of `hasPublication`; that flag only gates publishing.
pub fn build(ctx: &ProjectContext, opts: &BuildOptions) -> JarshipResult<BuildResult> {
    let start = Instant::now();
    let config = ctx.resolve_config()?;
    let compiled = compile(ctx, &config, opts)?;
    let artifacts = build_artifacts(&config);
    let packaged = ops_package::package_all(&ctx.layout(), &artifacts, opts.quiet)?;
    if !opts.quiet {
        status(
            "Finished",
            &format!(
                "{} artifact(s) in {:.2}s",
                packaged.len(),
                start.elapsed().as_secs_f64()
            ),
        );
    }
    Ok(BuildResult { compiled, packaged })
}
