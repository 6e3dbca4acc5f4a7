//! Configuration loading, defaulting and persistence
//!
//! Two layers:
//! - Persistence: one flat YAML mapping in a single file (`get`, `set`, `init`)
//! - Configuration: resolved settings with defaults and derived artifact paths

pub mod artifacts;
pub mod paths;
pub mod persistence;
pub mod raw;
pub mod settings;

pub use artifacts::Artifacts;
pub use paths::{DEFAULT_CONFIG_FILE, config_file_path};
pub use persistence::{BUNDLED_TEMPLATE, FilePersistence, Persistence, TemplateSource};
pub use raw::{RawAttributes, RawConfig, parse_raw_config, to_yaml};
pub use settings::{
    Configuration, DEFAULT_DEPENDENCIES_FILE_DIR, DEFAULT_GRADLE_COMMAND, default_project_name,
};

/// Key under which the project name is persisted.
pub const PROJECT_NAME_KEY: &str = "project_name";
/// Key under which the dependency decisions directory is persisted.
pub const DEPENDENCIES_FILE_DIR_KEY: &str = "dependencies_file_dir";
/// Key under which the gradle invocation is persisted.
pub const GRADLE_COMMAND_KEY: &str = "gradle_command";
