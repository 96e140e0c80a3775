//! Operation: publish the project's artifacts to a Maven repository.
//!
//! The pipeline is a strictly sequential state machine:
//!
//! ```text
//! Init -> Configured -> ArtifactsBuilt -> Signed -> Published
//!   \________\_______________\______________\______-> Failed
//! ```
//!
//! - `Configured`: the configuration resolved and the target repository was
//!   selected. No artifact is built and no request is sent before this.
//! - `ArtifactsBuilt`: every JAR and the POM exist on disk.
//! - `Signed`: the signing decision was applied to every file.
//! - `Published`: every upload succeeded.
//!
//! With `hasPublication=false` the run ends at `Configured`. Any error moves
//! the pipeline to `Failed`; nothing is retried and a pipeline runs once.

use std::fmt;
use std::path::PathBuf;

use jarship_core::artifact::build_artifacts;
use jarship_core::publication::Publication;
use jarship_core::version::SnapshotPredicate;
use jarship_maven::pom::render_pom;
use jarship_maven::publish::{plan_uploads, upload_all, PublishFile, UploadItem, Uploader};
use jarship_maven::repository::{select_target, Credentials, RepositoryTarget};
use jarship_maven::signing::{should_sign, GpgSigner, Signer, SignerGate};
use jarship_util::errors::{JarshipError, JarshipResult};
use jarship_util::fs::ensure_dir;
use jarship_util::progress::{status, status_info};

use crate::ops_build::{self, BuildOptions};
use crate::ops_package;
use crate::ProjectContext;

/// Where a pipeline is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Init,
    Configured,
    ArtifactsBuilt,
    Signed,
    Published,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Published | Self::Failed)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Configured => "configured",
            Self::ArtifactsBuilt => "artifacts-built",
            Self::Signed => "signed",
            Self::Published => "published",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Options for a publish invocation.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Run `javac`/`javadoc` before packaging.
    pub compile: bool,
    /// Stop after signing and report the upload plan.
    pub dry_run: bool,
    /// Suppress status lines and the progress bar.
    pub quiet: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// `hasPublication` is false; nothing was built or uploaded.
    Skipped,
    /// Dry run: these requests would have been sent.
    Planned(Vec<PlannedUpload>),
    Published { uploaded: usize },
}

/// One request of a dry-run plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedUpload {
    pub url: String,
    pub size: usize,
}

impl From<&UploadItem> for PlannedUpload {
    fn from(item: &UploadItem) -> Self {
        Self {
            url: item.url.clone(),
            size: item.data.len(),
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub state: PipelineState,
    pub target: RepositoryTarget,
    pub signed: bool,
    pub files: Vec<PathBuf>,
    pub outcome: PublishOutcome,
}

/// The publish pipeline for one project and one invocation.
pub struct Pipeline<'a> {
    ctx: &'a ProjectContext,
    predicate: Box<dyn SnapshotPredicate>,
    signer: Option<Box<dyn Signer + 'a>>,
    uploader: Box<dyn Uploader + 'a>,
    state: PipelineState,
    history: Vec<PipelineState>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline using the predicate from `jarship.toml` and a
    /// `gpg` signer when a signing key is configured.
    pub fn new(ctx: &'a ProjectContext, uploader: Box<dyn Uploader + 'a>) -> Self {
        let signer = GpgSigner::from_properties(&ctx.properties)
            .map(|s| Box::new(s) as Box<dyn Signer + 'a>);
        Self {
            ctx,
            predicate: ctx.settings.publication.snapshot_predicate(),
            signer,
            uploader,
            state: PipelineState::Init,
            history: vec![PipelineState::Init],
        }
    }

    /// Replace the snapshot predicate.
    pub fn with_predicate(mut self, predicate: Box<dyn SnapshotPredicate>) -> Self {
        self.predicate = predicate;
        self
    }

    /// Replace the signer; `None` means no key material is available.
    pub fn with_signer(mut self, signer: Option<Box<dyn Signer + 'a>>) -> Self {
        self.signer = signer;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Every state visited so far, starting with `Init`.
    pub fn history(&self) -> &[PipelineState] {
        &self.history
    }

    fn transition(&mut self, next: PipelineState) {
        tracing::info!("pipeline: {} -> {next}", self.state);
        self.state = next;
        self.history.push(next);
    }

    /// Run the pipeline. Fails if it already ran.
    pub fn run(&mut self, opts: &PublishOptions) -> JarshipResult<PipelineReport> {
        if self.state != PipelineState::Init {
            return Err(JarshipError::InvariantViolation {
                message: format!("pipeline already ran (state: {})", self.state),
            }
            .into());
        }
        match self.execute(opts) {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::error!("publish failed in state {}: {e}", self.state);
                self.transition(PipelineState::Failed);
                Err(e)
            }
        }
    }

    fn execute(&mut self, opts: &PublishOptions) -> JarshipResult<PipelineReport> {
        let ctx = self.ctx;

        // Configured
        let config = ctx.resolve_config()?;
        let settings = &ctx.settings.publication;
        let mut target = select_target(
            &config.version,
            settings,
            self.predicate.as_ref(),
            Credentials::default(),
        );
        let signing = should_sign(
            &config.version,
            config.publication_signing,
            self.predicate.as_ref(),
        );
        self.transition(PipelineState::Configured);

        if !config.has_publication {
            if !opts.quiet {
                status_info("Skipping", "publication disabled (hasPublication=false)");
            }
            return Ok(PipelineReport {
                state: self.state,
                target,
                signed: false,
                files: Vec::new(),
                outcome: PublishOutcome::Skipped,
            });
        }
        target.credentials = Credentials::from_source(
            &ctx.properties,
            &settings.username_from,
            &settings.password_from,
        );

        // ArtifactsBuilt
        if opts.compile {
            ops_build::compile(ctx, &config, &BuildOptions { quiet: opts.quiet })?;
        }
        let publication = Publication::assemble(&config, build_artifacts(&config))?;
        let layout = ctx.layout();
        let packaged = ops_package::package_all(&layout, publication.artifacts(), opts.quiet)?;
        let mut files: Vec<PublishFile> = packaged
            .iter()
            .map(|p| PublishFile {
                label: publication
                    .artifacts()
                    .get(p.kind)
                    .map(|a| a.display_id(&config))
                    .unwrap_or_else(|| publication.coordinate()),
                path: p.path.clone(),
            })
            .collect();
        files.push(PublishFile {
            label: format!("{}:pom", publication.coordinate()),
            path: write_pom(ctx, &publication)?,
        });
        self.transition(PipelineState::ArtifactsBuilt);

        // Signed
        let paths: Vec<PathBuf> = files.iter().map(|f| f.path.clone()).collect();
        let gate = SignerGate::new(signing, self.signer.as_deref());
        let signatures = gate.apply(&paths)?;
        if signing && !opts.quiet {
            status("Signed", &format!("{} file(s)", signatures.len()));
        }
        self.transition(PipelineState::Signed);

        let items = plan_uploads(
            &target,
            (
                publication.group_id(),
                publication.artifact_id(),
                publication.version(),
            ),
            &files,
            &signatures,
        )?;

        if opts.dry_run {
            if !opts.quiet {
                status_info("Dry run", &format!("{} request(s) to {}", items.len(), target.url));
            }
            return Ok(PipelineReport {
                state: self.state,
                target,
                signed: signing,
                files: paths,
                outcome: PublishOutcome::Planned(items.iter().map(PlannedUpload::from).collect()),
            });
        }

        // Published
        if !opts.quiet {
            status(
                "Publishing",
                &format!("{} to {} ({})", publication.coordinate(), target.name, target.url),
            );
        }
        let uploaded = upload_all(self.uploader.as_ref(), &target, &items, !opts.quiet)?;
        self.transition(PipelineState::Published);
        if !opts.quiet {
            status("Published", &format!("{uploaded} file(s)"));
        }

        Ok(PipelineReport {
            state: self.state,
            target,
            signed: signing,
            files: paths,
            outcome: PublishOutcome::Published { uploaded },
        })
    }
}

/// Render the POM into `build/publications`.
pub fn write_pom(ctx: &ProjectContext, publication: &Publication) -> Result<PathBuf, JarshipError> {
    let dir = ctx.layout().publications_dir();
    ensure_dir(&dir)?;
    let path = dir.join(publication.pom_file_name());
    std::fs::write(&path, render_pom(publication)?)?;
    Ok(path)
}
