//! Publish command implementation.

use miette::Result;

use jarship_maven::publish::HttpUploader;
use jarship_ops::ops_publish::{Pipeline, PublishOptions, PublishOutcome};
use jarship_ops::ProjectContext;

pub fn exec(ctx: &ProjectContext, dry_run: bool, skip_build: bool) -> Result<()> {
    let uploader = HttpUploader::new()?;
    let mut pipeline = Pipeline::new(ctx, Box::new(uploader));
    let report = pipeline.run(&PublishOptions {
        compile: !skip_build,
        dry_run,
        quiet: false,
    })?;

    match report.outcome {
        PublishOutcome::Skipped => {
            println!("Publication disabled (hasPublication=false); nothing to publish.");
        }
        PublishOutcome::Planned(plan) => {
            println!(
                "Would upload {} file(s) to {} ({}):",
                plan.len(),
                report.target.name,
                report.target.url
            );
            for item in plan {
                println!("  PUT {} ({} bytes)", item.url, item.size);
            }
        }
        PublishOutcome::Published { uploaded } => {
            println!(
                "Published {uploaded} file(s) to {} ({})",
                report.target.name, report.target.url
            );
        }
    }
    Ok(())
}
