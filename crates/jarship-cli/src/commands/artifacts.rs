use console::style;
use miette::Result;

use jarship_core::artifact::build_artifacts;
use jarship_core::version::VersionKind;
use jarship_maven::repository::select;
use jarship_maven::signing::should_sign;
use jarship_ops::ProjectContext;

pub fn exec(ctx: &ProjectContext) -> Result<()> {
    let config = ctx.resolve_config()?;
    let settings = &ctx.settings.publication;
    let predicate = settings.snapshot_predicate();
    let kind = VersionKind::classify(&config.version, predicate.as_ref());

    println!("{} ({kind})", style(config.coordinate()).bold());
    for artifact in build_artifacts(&config).iter() {
        println!("  {:<8} {}", artifact.kind, artifact.file_name);
    }

    if !config.has_publication {
        println!("publication: disabled");
        return Ok(());
    }
    let url = select(
        &config.version,
        &settings.snapshot_repo,
        &settings.release_repo,
        predicate.as_ref(),
    );
    let signed = should_sign(&config.version, config.publication_signing, predicate.as_ref());
    println!("repository:  {} {}", settings.name, url.trim_end_matches('/'));
    println!("signing:     {}", if signed { "yes" } else { "no" });
    Ok(())
}
