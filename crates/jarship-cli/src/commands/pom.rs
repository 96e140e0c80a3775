use miette::Result;

use jarship_core::artifact::build_artifacts;
use jarship_core::publication::Publication;
use jarship_maven::pom::render_pom;
use jarship_ops::ProjectContext;

pub fn exec(ctx: &ProjectContext) -> Result<()> {
    let config = ctx.resolve_config()?;
    let publication = Publication::assemble(&config, build_artifacts(&config))?;
    print!("{}", render_pom(&publication)?);
    Ok(())
}
