use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all jarship operations.
///
/// Every variant is fatal to the current invocation: nothing in the pipeline
/// catches and retries them.
#[derive(Debug, Error, Diagnostic)]
pub enum JarshipError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required project property is absent or blank.
    #[error("Missing required property `{key}`")]
    #[diagnostic(help("Define `{key}` in gradle.properties or pass -P {key}=<value>"))]
    MissingConfig { key: String },

    /// A project property is present but cannot be parsed.
    #[error("Invalid value for `{key}`: `{value}` (expected {expected})")]
    InvalidConfig {
        key: String,
        value: String,
        expected: String,
    },

    /// Signing was requested for a release but no key material is configured.
    #[error("Signing key missing: {message}")]
    #[diagnostic(help(
        "Set `signing.gnupg.keyName` or disable signing with publicationSigning=false"
    ))]
    SigningKeyMissing { message: String },

    /// The external signer ran but failed.
    #[error("Signing failed: {message}")]
    Signing { message: String },

    /// Uploading an artifact to the target repository failed.
    #[error("Upload of {artifact} to {url} failed: {message}")]
    #[diagnostic(help("Nothing is retried; re-run `jarship publish` once the cause is fixed"))]
    Upload {
        url: String,
        artifact: String,
        message: String,
    },

    /// An internal invariant did not hold.
    #[error("Invariant violated: {message}")]
    InvariantViolation { message: String },

    /// Invalid or malformed `jarship.toml`.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your jarship.toml for syntax errors"))]
    Manifest { message: String },

    /// An external program could not be run or exited unsuccessfully.
    #[error("`{program}` failed: {message}")]
    Process { program: String, message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type JarshipResult<T> = miette::Result<T>;
