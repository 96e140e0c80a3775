//! Compiler, test JVM, and Javadoc options derived from the configuration.
//!
//! Only the argument lists are modelled here; running `javac` and `javadoc`
//! happens in `jarship-ops`.

use crate::config::Config;

/// Source and documentation encoding used everywhere.
pub const ENCODING: &str = "UTF-8";

/// First JDK whose `javac` understands `--release`.
const RELEASE_FLAG_SINCE: u32 = 10;

/// Options passed to `javac`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavacOptions {
    pub encoding: String,
    /// Value for `--release`, if the flag applies.
    pub release: Option<u32>,
    pub enable_preview: bool,
    /// A toolchain of this version is needed because the running JDK is older.
    pub toolchain_request: Option<u32>,
}

impl JavacOptions {
    /// Derive compiler options for the JDK currently running (`current_jdk`, major version).
    pub fn from_config(config: &Config, current_jdk: u32) -> Self {
        let target = config.jdk_version;
        let release = (target >= RELEASE_FLAG_SINCE || current_jdk >= RELEASE_FLAG_SINCE)
            .then_some(target);
        let toolchain_request = (current_jdk < target).then_some(target);
        if let Some(v) = toolchain_request {
            tracing::warn!("running JDK {current_jdk} is older than target {v}; a JDK {v} toolchain is required");
        }
        Self {
            encoding: ENCODING.to_string(),
            release,
            enable_preview: config.jdk_enable_preview,
            toolchain_request,
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-encoding".to_string(), self.encoding.clone()];
        if let Some(release) = self.release {
            args.push("--release".to_string());
            args.push(release.to_string());
        }
        if self.enable_preview {
            args.push("--enable-preview".to_string());
        }
        args
    }
}

/// Extra JVM arguments for running tests.
pub fn test_jvm_args(config: &Config) -> Vec<String> {
    if config.jdk_enable_preview {
        vec!["--enable-preview".to_string()]
    } else {
        Vec::new()
    }
}

/// Options passed to `javadoc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavadocOptions {
    pub encoding: String,
    pub doc_encoding: String,
    pub charset: String,
    pub locale: String,
    pub author: bool,
    pub window_title: String,
    pub links: Vec<String>,
    /// Javadoc errors abort the build only when set.
    pub fail_on_error: bool,
}

impl JavadocOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            encoding: ENCODING.to_string(),
            doc_encoding: ENCODING.to_string(),
            charset: ENCODING.to_string(),
            locale: "en_US".to_string(),
            author: true,
            window_title: format!("{} {} Javadoc", config.name, config.version),
            links: vec![api_docs_link(config)],
            fail_on_error: false,
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-encoding".to_string(),
            self.encoding.clone(),
            "-docencoding".to_string(),
            self.doc_encoding.clone(),
            "-charset".to_string(),
            self.charset.clone(),
            "-locale".to_string(),
            self.locale.clone(),
        ];
        if self.author {
            args.push("-author".to_string());
        }
        args.push("-windowtitle".to_string());
        args.push(self.window_title.clone());
        for link in &self.links {
            args.push("-link".to_string());
            args.push(link.clone());
        }
        args
    }
}

/// URL of the JDK API docs Javadoc links against.
///
/// GA releases live on docs.oracle.com; an early-access build, when
/// configured, is linked on download.java.net instead.
pub fn api_docs_link(config: &Config) -> String {
    match &config.jdk_early_access_doc {
        Some(ea) => format!("https://download.java.net/java/early_access/{ea}/docs/api/"),
        None => format!(
            "https://docs.oracle.com/en/java/javase/{}/docs/api/",
            config.jdk_version
        ),
    }
}

/// Parse the major version from `java -version` / `javac -version` output.
///
/// Handles both `openjdk version "21.0.2"` and `javac 17.0.9`, plus legacy
/// `1.8.0_392` numbering.
pub fn parse_jdk_major(output: &str) -> Option<u32> {
    for line in output.lines() {
        let full = if let Some(start) = line.find('"') {
            let rest = &line[start + 1..];
            let Some(end) = rest.find('"') else { continue };
            &rest[..end]
        } else if let Some(rest) = line.trim().strip_prefix("javac ") {
            rest.trim()
        } else {
            continue;
        };
        let major = if let Some(legacy) = full.strip_prefix("1.") {
            legacy.split(['.', '_']).next()
        } else {
            full.split(['.', '-', '+']).next()
        };
        if let Some(n) = major.and_then(|m| m.parse().ok()) {
            return Some(n);
        }
    }
    None
}
