//! Config path resolution helpers.

use std::path::{Path, PathBuf};

/// Location of the config file relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "config/license_finder.yml";

pub fn config_file_path(project_root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_root.join(path),
        None => project_root.join(DEFAULT_CONFIG_FILE),
    }
}
