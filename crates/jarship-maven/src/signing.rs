//! Deciding whether a publication is signed, and signing its files.
//!
//! Releases are signed when signing is enabled; snapshots never are. The
//! signature itself comes from an external [`Signer`], by default `gpg`.

use std::fmt;
use std::path::{Path, PathBuf};

use jarship_core::properties::PropertySource;
use jarship_core::version::SnapshotPredicate;
use jarship_util::errors::JarshipError;
use jarship_util::process::CommandBuilder;

/// Property naming the GnuPG key to sign with.
pub const KEY_NAME_PROPERTY: &str = "signing.gnupg.keyName";
/// Property holding the passphrase for that key.
pub const PASSPHRASE_PROPERTY: &str = "signing.gnupg.passphrase";
/// Property overriding the `gpg` executable.
pub const EXECUTABLE_PROPERTY: &str = "signing.gnupg.executable";

/// Whether a publication of `version` must be signed.
pub fn should_sign(version: &str, signing_enabled: bool, predicate: &dyn SnapshotPredicate) -> bool {
    signing_enabled && !predicate.is_snapshot(version)
}

/// Produces a detached signature for a file.
pub trait Signer {
    /// Sign `file`, returning the path of the detached signature.
    fn sign(&self, file: &Path) -> Result<PathBuf, JarshipError>;
}

/// A detached signature for one published file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub signed: PathBuf,
    pub signature: PathBuf,
}

/// Applies a signing decision to a set of files.
pub struct SignerGate<'a> {
    decision: bool,
    signer: Option<&'a dyn Signer>,
}

impl<'a> SignerGate<'a> {
    pub fn new(decision: bool, signer: Option<&'a dyn Signer>) -> Self {
        Self { decision, signer }
    }

    pub fn decision(&self) -> bool {
        self.decision
    }

    /// Sign every file, or none when the decision is negative.
    ///
    /// A positive decision without a signer is
    /// [`JarshipError::SigningKeyMissing`], never a silent skip.
    pub fn apply(&self, files: &[PathBuf]) -> Result<Vec<Signature>, JarshipError> {
        if !self.decision {
            tracing::debug!("signing not required; {} file(s) left unsigned", files.len());
            return Ok(Vec::new());
        }
        let signer = self.signer.ok_or_else(|| JarshipError::SigningKeyMissing {
            message: format!("`{KEY_NAME_PROPERTY}` is not configured"),
        })?;
        files
            .iter()
            .map(|file| {
                let signature = signer.sign(file)?;
                tracing::debug!("signed {}", file.display());
                Ok(Signature {
                    signed: file.clone(),
                    signature,
                })
            })
            .collect()
    }
}

/// Signs files with `gpg --armor --detach-sign`, producing `<file>.asc`.
#[derive(Clone)]
pub struct GpgSigner {
    executable: String,
    key_name: String,
    passphrase: Option<String>,
}

impl GpgSigner {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            executable: "gpg".to_string(),
            key_name: key_name.into(),
            passphrase: None,
        }
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Build a signer from project properties, or `None` when no key is configured.
    pub fn from_properties(source: &PropertySource) -> Option<Self> {
        let key_name = source.lookup(KEY_NAME_PROPERTY)?;
        let mut signer = Self::new(key_name);
        if let Some(pass) = source.lookup(PASSPHRASE_PROPERTY) {
            signer = signer.with_passphrase(pass);
        }
        if let Some(exe) = source.lookup(EXECUTABLE_PROPERTY) {
            signer = signer.with_executable(exe);
        }
        Some(signer)
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// The `gpg` invocation that signs `file` into `output`.
    pub fn command(&self, file: &Path, output: &Path) -> CommandBuilder {
        let mut cmd = CommandBuilder::new(&self.executable)
            .args(["--batch", "--yes", "--armor", "--detach-sign"])
            .args(["--local-user", self.key_name.as_str()]);
        if let Some(pass) = &self.passphrase {
            cmd = cmd
                .args(["--pinentry-mode", "loopback", "--passphrase"])
                .secret_arg(pass.as_str());
        }
        cmd.arg("--output")
            .arg(output.to_string_lossy())
            .arg(file.to_string_lossy())
    }
}

impl fmt::Debug for GpgSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GpgSigner")
            .field("executable", &self.executable)
            .field("key_name", &self.key_name)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "********"))
            .finish()
    }
}

impl Signer for GpgSigner {
    fn sign(&self, file: &Path) -> Result<PathBuf, JarshipError> {
        let output = signature_path(file);
        self.command(file, &output)
            .exec_checked()
            .map_err(|e| JarshipError::Signing {
                message: format!("{}: {e}", file.display()),
            })?;
        Ok(output)
    }
}

/// Path of the ASCII-armored signature for `file`.
pub fn signature_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".asc");
    PathBuf::from(name)
}
