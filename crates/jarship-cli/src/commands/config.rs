use miette::Result;

use jarship_util::errors::JarshipError;
use jarship_ops::ProjectContext;

pub fn exec(ctx: &ProjectContext, json: bool) -> Result<()> {
    let config = ctx.resolve_config()?;

    if json {
        let out = serde_json::to_string_pretty(&config).map_err(|e| JarshipError::Generic {
            message: format!("Failed to serialize configuration: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    println!("{}", config.coordinate());
    let rows = [
        ("name", config.name.clone()),
        ("description", config.description.clone()),
        ("url", opt(&config.url)),
        ("license", config.license.clone()),
        ("license url", opt(&config.license_url)),
        ("license file", config.license_file_name.clone()),
        ("organization", format!("{} <{}>", config.org_name, config.org_url)),
        ("scm", opt(&config.scm_url)),
        ("jdk", config.jdk_version.to_string()),
        ("preview", config.jdk_enable_preview.to_string()),
        ("publication", config.has_publication.to_string()),
        ("signing", config.publication_signing.to_string()),
        ("sources jar", config.has_sources_jar.to_string()),
        ("javadoc jar", config.has_javadoc_jar.to_string()),
    ];
    for (key, value) in rows {
        println!("  {key:<14} {value}");
    }
    Ok(())
}
