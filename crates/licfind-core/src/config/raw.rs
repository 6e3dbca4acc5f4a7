//! Untyped persisted form of the configuration and its typed boundary.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use super::{DEPENDENCIES_FILE_DIR_KEY, GRADLE_COMMAND_KEY, PROJECT_NAME_KEY};
use crate::error::{ConfigError, Result};

/// Flat mapping of setting keys to YAML values, exactly as stored on disk.
pub type RawConfig = BTreeMap<String, Value>;

/// Parse config file contents into a flat mapping.
///
/// An empty document (or one holding only comments) is an empty mapping.
/// `path` is only used for error reporting.
pub fn parse_raw_config(content: &str, path: &Path) -> Result<RawConfig> {
    if is_blank_document(content) {
        return Ok(RawConfig::new());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Null => Ok(RawConfig::new()),
        Value::Mapping(mapping) => Ok(mapping
            .into_iter()
            .filter_map(|(key, value)| match key {
                Value::String(key) => Some((key, value)),
                other => {
                    tracing::debug!(key = ?other, "Ignoring config key that is not a string");
                    None
                }
            })
            .collect()),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Serialize a flat mapping to YAML text.
pub fn to_yaml(raw: &RawConfig) -> Result<String> {
    serde_yaml::to_string(raw).map_err(ConfigError::Serialize)
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

/// Recognized settings as they arrive from the caller or the file.
///
/// `None` means the key was missing or explicitly nil; the two cases are not
/// distinguished past this point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
    pub project_name: Option<String>,
    pub dependencies_file_dir: Option<String>,
    pub gradle_command: Option<String>,
}

impl RawAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the recognized keys out of a raw mapping. Other keys are dropped.
    pub fn from_raw(raw: &RawConfig) -> Self {
        for key in raw.keys() {
            if !matches!(
                key.as_str(),
                PROJECT_NAME_KEY | DEPENDENCIES_FILE_DIR_KEY | GRADLE_COMMAND_KEY
            ) {
                tracing::debug!(key = %key, "Ignoring unrecognized config key");
            }
        }

        Self {
            project_name: lookup(raw, PROJECT_NAME_KEY),
            dependencies_file_dir: lookup(raw, DEPENDENCIES_FILE_DIR_KEY),
            gradle_command: lookup(raw, GRADLE_COMMAND_KEY),
        }
    }

    /// Overlay `overrides` on top of `self`: any value set in `overrides` wins.
    pub fn merged_with(self, overrides: RawAttributes) -> Self {
        Self {
            project_name: overrides.project_name.or(self.project_name),
            dependencies_file_dir: overrides
                .dependencies_file_dir
                .or(self.dependencies_file_dir),
            gradle_command: overrides.gradle_command.or(self.gradle_command),
        }
    }
}

fn lookup(raw: &RawConfig, key: &str) -> Option<String> {
    raw.get(key).and_then(|value| scalar_text(key, value))
}

fn scalar_text(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_text(key, &tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            tracing::warn!(key, "Ignoring non-scalar config value, using default");
            None
        }
    }
}
