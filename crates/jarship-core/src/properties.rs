//! Project property sources.
//!
//! Properties come from three layers, lowest precedence first:
//! `gradle.properties` in the project root, `JARSHIP_PROP_*` environment
//! variables, and `-P key=value` overrides from the command line.
//!
//! `.jarship.env` holds secrets (repository credentials, signing
//! passphrases). Its values are available via `${env:VAR}` interpolation in
//! property values and through [`PropertySource::lookup`].

use std::collections::BTreeMap;
use std::path::Path;

use jarship_util::errors::JarshipError;

/// File name of the project property file.
pub const PROPERTIES_FILE: &str = "gradle.properties";

/// File name of the secrets file.
pub const ENV_FILE: &str = ".jarship.env";

/// Prefix of environment variables that feed project properties.
pub const ENV_PROPERTY_PREFIX: &str = "JARSHIP_PROP_";

/// Loads a `.jarship.env` file (shell-style `KEY=value` format).
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(JarshipError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Loads a Java-style `.properties` file.
///
/// Accepts `key=value` and `key: value`, skips `#` and `!` comments, and
/// joins lines ending in a backslash with the next line.
pub fn load_properties_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read_to_string(path).map_err(JarshipError::Io)?;
    Ok(parse_properties(&content))
}

/// Parse the contents of a `.properties` file.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let mut pending = String::new();
    for line in content.lines() {
        let trimmed = line.trim_start();
        if pending.is_empty() && (trimmed.is_empty() || trimmed.starts_with(['#', '!'])) {
            continue;
        }
        if let Some(head) = trimmed.strip_suffix('\\') {
            pending.push_str(head);
            continue;
        }
        pending.push_str(trimmed);
        let logical = std::mem::take(&mut pending);
        if let Some((key, value)) = split_property(&logical) {
            map.insert(key, value);
        }
    }
    if let Some((key, value)) = split_property(&pending) {
        map.insert(key, value);
    }
    map
}

fn split_property(line: &str) -> Option<(String, String)> {
    let idx = line.find(['=', ':'])?;
    let key = line[..idx].trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), line[idx + 1..].trim().to_string()))
}

/// Parse a command-line override of the form `key=value`.
pub fn parse_override(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{input}`")),
    }
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from the provided `env_overrides` map (populated
/// from `.jarship.env`), then falls back to actual process environment variables.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${env:") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let key = &result[start + 6..end];
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.replace_range(start..=end, &value);
        from = start + value.len();
    }
    result
}

/// The merged, read-only view of every property layer for one invocation.
#[derive(Debug, Clone, Default)]
pub struct PropertySource {
    properties: BTreeMap<String, String>,
    secrets: BTreeMap<String, String>,
}

impl PropertySource {
    /// Load all layers for the project rooted at `project_dir`.
    pub fn load(project_dir: &Path, overrides: &[(String, String)]) -> miette::Result<Self> {
        let file = load_properties_file(&project_dir.join(PROPERTIES_FILE))?;
        let secrets = load_env_file(&project_dir.join(ENV_FILE))?;
        tracing::debug!(
            "loaded {} file properties, {} secrets",
            file.len(),
            secrets.len()
        );
        Ok(Self::from_layers(
            file,
            std::env::vars(),
            overrides.iter().cloned(),
            secrets,
        ))
    }

    /// Merge explicit layers. `env` is filtered to `JARSHIP_PROP_*` variables.
    pub fn from_layers(
        file: BTreeMap<String, String>,
        env: impl IntoIterator<Item = (String, String)>,
        overrides: impl IntoIterator<Item = (String, String)>,
        secrets: BTreeMap<String, String>,
    ) -> Self {
        let mut properties = file;
        for (key, value) in env {
            if let Some(name) = key.strip_prefix(ENV_PROPERTY_PREFIX) {
                if !name.is_empty() {
                    properties.insert(name.to_string(), value);
                }
            }
        }
        properties.extend(overrides);
        for value in properties.values_mut() {
            if value.contains("${env:") {
                *value = interpolate(value, &secrets);
            }
        }
        Self {
            properties,
            secrets,
        }
    }

    /// The merged project properties.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Look up a named value: project properties, then `.jarship.env`, then
    /// the process environment. Blank values count as absent.
    pub fn lookup(&self, name: &str) -> Option<String> {
        self.properties
            .get(name)
            .or_else(|| self.secrets.get(name))
            .cloned()
            .or_else(|| std::env::var(name).ok())
            .filter(|v| !v.trim().is_empty())
    }
}
