//! Error types for loading and saving configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file is valid YAML but its root is a list or a scalar.
    #[error("Config file {} must contain a mapping of settings", path.display())]
    NotAMapping { path: PathBuf },

    #[error("Failed to serialize config to YAML")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to write config file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine working directory")]
    WorkingDir(#[source] std::io::Error),
}

impl ConfigError {
    /// True for failures caused by the file contents rather than the filesystem.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::Parse { .. } | ConfigError::NotAMapping { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn parse_error_mentions_path() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("config/license_finder.yml"),
            source,
        };
        assert!(err.to_string().contains("config/license_finder.yml"));
        assert!(err.is_parse_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn write_error_is_not_a_parse_error() {
        let err = ConfigError::Write {
            path: PathBuf::from("/readonly/config.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_parse_error());
        assert!(err.to_string().contains("Failed to write"));
    }

    #[test]
    fn not_a_mapping_is_a_parse_error() {
        let err = ConfigError::NotAMapping {
            path: PathBuf::from("config.yml"),
        };
        assert!(err.is_parse_error());
    }
}
