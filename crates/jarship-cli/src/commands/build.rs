//! Build command implementation.

use miette::Result;

use jarship_ops::ops_build::{self, BuildOptions};
use jarship_ops::ProjectContext;

pub fn exec(ctx: &ProjectContext, verbose: bool) -> Result<()> {
    let result = ops_build::build(ctx, &BuildOptions { quiet: false })?;

    if verbose {
        for jar in &result.packaged {
            println!("{} ({} entries)", jar.path.display(), jar.entries);
        }
    }
    Ok(())
}
