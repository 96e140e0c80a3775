//! Uploading a signed publication to a Maven repository.
//!
//! Every file is PUT to its Maven layout URL, followed by its detached
//! signature (when signed) and its checksum sidecars. Nothing is retried: the
//! first failure aborts the upload and is reported with the target URL and
//! the artifact it belonged to.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use jarship_util::errors::JarshipError;

use crate::auth::apply_auth;
use crate::checksum;
use crate::repository::RepositoryTarget;
use crate::signing::Signature;

/// A produced file that belongs to the publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishFile {
    /// Identifier used in errors, e.g. `com.example:lib:1.0.0:sources`.
    pub label: String,
    pub path: PathBuf,
}

/// One PUT request of the upload plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadItem {
    pub label: String,
    pub file_name: String,
    pub url: String,
    pub data: Vec<u8>,
}

/// Sends a single item to the target repository.
pub trait Uploader {
    fn upload(&self, target: &RepositoryTarget, item: &UploadItem) -> Result<(), JarshipError>;
}

/// Build the ordered list of requests for a publication.
///
/// Reads every file (and signature) up front so nothing is sent unless the
/// whole set is readable.
pub fn plan_uploads(
    target: &RepositoryTarget,
    coordinate: (&str, &str, &str),
    files: &[PublishFile],
    signatures: &[Signature],
) -> Result<Vec<UploadItem>, JarshipError> {
    let (group, artifact, version) = coordinate;
    let mut items = Vec::new();
    for file in files {
        let file_name = file_name_of(&file.path)?;
        let data = std::fs::read(&file.path)?;
        let sidecars = checksum::sidecars(&file_name, &data);
        items.push(UploadItem {
            label: file.label.clone(),
            url: target.file_url(group, artifact, version, &file_name),
            file_name,
            data,
        });

        if let Some(sig) = signatures.iter().find(|s| s.signed == file.path) {
            let sig_name = file_name_of(&sig.signature)?;
            items.push(UploadItem {
                label: file.label.clone(),
                url: target.file_url(group, artifact, version, &sig_name),
                file_name: sig_name,
                data: std::fs::read(&sig.signature)?,
            });
        }

        for sidecar in sidecars {
            items.push(UploadItem {
                label: file.label.clone(),
                url: target.file_url(group, artifact, version, &sidecar.file_name),
                file_name: sidecar.file_name,
                data: sidecar.content.into_bytes(),
            });
        }
    }
    Ok(items)
}

fn file_name_of(path: &std::path::Path) -> Result<String, JarshipError> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| JarshipError::InvariantViolation {
            message: format!("{} has no file name", path.display()),
        })
}

/// Upload every item in order, stopping at the first failure.
pub fn upload_all(
    uploader: &dyn Uploader,
    target: &RepositoryTarget,
    items: &[UploadItem],
    show_progress: bool,
) -> Result<usize, JarshipError> {
    let pb = show_progress.then(|| {
        jarship_util::progress::progress_bar(items.len() as u64, &format!("Uploading to {}", target.name))
    });
    for item in items {
        tracing::debug!("PUT {}", item.url);
        if let Err(e) = uploader.upload(target, item) {
            if let Some(pb) = &pb {
                pb.abandon();
            }
            return Err(e);
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    Ok(items.len())
}

/// Uploads over HTTP(S) with a blocking `reqwest` client.
pub struct HttpUploader {
    client: Client,
}

impl HttpUploader {
    pub fn new() -> Result<Self, JarshipError> {
        let client = Client::builder()
            .user_agent(concat!("jarship/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| JarshipError::Generic {
                message: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl Uploader for HttpUploader {
    fn upload(&self, target: &RepositoryTarget, item: &UploadItem) -> Result<(), JarshipError> {
        let request = apply_auth(self.client.put(&item.url), target).body(item.data.clone());
        let upload_err = |message: String| JarshipError::Upload {
            url: item.url.clone(),
            artifact: item.label.clone(),
            message,
        };
        let response = request.send().map_err(|e| upload_err(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            let body = body.trim();
            Err(upload_err(if body.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {body}")
            }))
        }
    }
}
