//! Operation: package JAR artifacts.
//!
//! Each JAR gets `META-INF/MANIFEST.MF` first, then the files of its content
//! roots, then the project license under its renamed entry.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use jarship_core::artifact::{Artifact, ArtifactKind, ArtifactSet};
use jarship_util::errors::{JarshipError, JarshipResult};
use jarship_util::fs::{archive_path, ensure_dir, walk_files};
use jarship_util::progress::{status, status_warn};

use crate::ProjectLayout;

const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";
const MANIFEST_LINE_LIMIT: usize = 72;

/// A JAR written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Number of content entries, excluding the manifest and license.
    pub entries: usize,
}

/// Package every artifact of the set into `build/libs`.
pub fn package_all(
    layout: &ProjectLayout,
    artifacts: &ArtifactSet,
    quiet: bool,
) -> JarshipResult<Vec<PackagedArtifact>> {
    ensure_dir(&layout.libs_dir()).map_err(JarshipError::Io)?;
    let mut packaged = Vec::with_capacity(artifacts.len());
    for artifact in artifacts.iter() {
        let jar = package_artifact(layout, artifact)?;
        if !quiet {
            status("Packaging", &artifact.file_name);
        }
        packaged.push(jar);
    }
    Ok(packaged)
}

/// Write a single JAR for `artifact`.
pub fn package_artifact(
    layout: &ProjectLayout,
    artifact: &Artifact,
) -> Result<PackagedArtifact, JarshipError> {
    let license_path = layout.root().join(&artifact.license.source);
    let license = std::fs::read(&license_path).map_err(|e| {
        JarshipError::Io(std::io::Error::new(
            e.kind(),
            format!("license file {}: {e}", license_path.display()),
        ))
    })?;

    let jar_path = layout.libs_dir().join(&artifact.file_name);
    ensure_dir(&layout.libs_dir())?;
    let file = File::create(&jar_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut seen = BTreeSet::new();
    add_dir(&mut zip, "META-INF/", options, &mut seen)?;
    zip.start_file(MANIFEST_ENTRY, options).map_err(zip_err)?;
    zip.write_all(render_manifest(artifact).as_bytes())?;
    seen.insert(MANIFEST_ENTRY.to_string());

    let mut entries = 0;
    let roots = layout.content_roots(artifact.kind);
    if !roots.iter().any(|r| r.is_dir()) {
        status_warn(
            "Warning",
            &format!("no content for {} artifact; packaging manifest and license only", artifact.kind),
        );
    }
    for root in roots {
        for path in walk_files(&root)? {
            let Some(name) = archive_path(&root, &path) else {
                continue;
            };
            if !seen.insert(name.clone()) {
                tracing::warn!("duplicate entry {name} in {}, keeping the first", artifact.file_name);
                continue;
            }
            add_parent_dirs(&mut zip, &name, options, &mut seen)?;
            zip.start_file(name.as_str(), options).map_err(zip_err)?;
            zip.write_all(&std::fs::read(&path)?)?;
            entries += 1;
        }
    }

    if seen.insert(artifact.license.archive_name.clone()) {
        zip.start_file(artifact.license.archive_name.as_str(), options)
            .map_err(zip_err)?;
        zip.write_all(&license)?;
    }
    zip.finish().map_err(zip_err)?;

    tracing::debug!("wrote {} ({entries} entries)", jar_path.display());
    Ok(PackagedArtifact {
        kind: artifact.kind,
        path: jar_path,
        entries,
    })
}

fn add_dir(
    zip: &mut ZipWriter<File>,
    name: &str,
    options: SimpleFileOptions,
    seen: &mut BTreeSet<String>,
) -> Result<(), JarshipError> {
    if seen.insert(name.to_string()) {
        zip.add_directory(name, options).map_err(zip_err)?;
    }
    Ok(())
}

fn add_parent_dirs(
    zip: &mut ZipWriter<File>,
    entry: &str,
    options: SimpleFileOptions,
    seen: &mut BTreeSet<String>,
) -> Result<(), JarshipError> {
    let mut end = 0;
    while let Some(pos) = entry[end..].find('/') {
        end += pos + 1;
        add_dir(zip, &entry[..end], options, seen)?;
    }
    Ok(())
}

fn zip_err(e: zip::result::ZipError) -> JarshipError {
    JarshipError::Generic {
        message: format!("Failed to write JAR: {e}"),
    }
}

/// Render `META-INF/MANIFEST.MF` for an artifact.
///
/// Lines are capped at 72 bytes; longer headers continue on lines starting
/// with a single space. The content charset is always UTF-8.
pub fn render_manifest(artifact: &Artifact) -> String {
    let mut out = String::new();
    push_header(&mut out, "Manifest-Version", "1.0");
    push_header(&mut out, "Created-By", concat!("jarship ", env!("CARGO_PKG_VERSION")));
    for (key, value) in &artifact.manifest_attributes {
        push_header(&mut out, key, value);
    }
    out.push_str("\r\n");
    out
}

fn push_header(out: &mut String, key: &str, value: &str) {
    let line = format!("{key}: {value}");
    let mut rest = line.as_str();
    let mut limit = MANIFEST_LINE_LIMIT;
    loop {
        if rest.len() <= limit {
            out.push_str(rest);
            out.push_str("\r\n");
            break;
        }
        let mut cut = limit;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        out.push_str(&rest[..cut]);
        out.push_str("\r\n ");
        rest = &rest[cut..];
        // continuation lines spend one byte on the leading space
        limit = MANIFEST_LINE_LIMIT - 1;
    }
}
