//! Resolved settings.

use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use super::artifacts::Artifacts;
use super::persistence::Persistence;
use super::raw::{RawAttributes, RawConfig};
use super::{DEPENDENCIES_FILE_DIR_KEY, GRADLE_COMMAND_KEY, PROJECT_NAME_KEY};
use crate::error::Result;

pub const DEFAULT_DEPENDENCIES_FILE_DIR: &str = "./doc/";
pub const DEFAULT_GRADLE_COMMAND: &str = "gradle";

/// Fully defaulted settings. Every field is set once construction returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    project_name: String,
    dependencies_file_dir: String,
    gradle_command: String,
}

impl Configuration {
    /// Resolve settings from typed attributes without touching the filesystem.
    ///
    /// `working_dir` stands in for the process working directory and only
    /// feeds the project name default.
    pub fn new(attributes: RawAttributes, working_dir: &Path) -> Self {
        let RawAttributes {
            project_name,
            dependencies_file_dir,
            gradle_command,
        } = attributes;

        Self {
            project_name: project_name.unwrap_or_else(|| default_project_name(working_dir)),
            dependencies_file_dir: dependencies_file_dir
                .unwrap_or_else(|| DEFAULT_DEPENDENCIES_FILE_DIR.to_string()),
            gradle_command: gradle_command.unwrap_or_else(|| DEFAULT_GRADLE_COMMAND.to_string()),
        }
    }

    /// Resolve settings from an untyped mapping. Unrecognized keys are ignored.
    pub fn from_raw(raw: &RawConfig, working_dir: &Path) -> Self {
        Self::new(RawAttributes::from_raw(raw), working_dir)
    }

    /// Bootstrap the store if needed, then load settings from it.
    pub fn ensure_default(persistence: &dyn Persistence, working_dir: &Path) -> Result<Self> {
        Self::ensure_default_with(persistence, working_dir, RawAttributes::new())
    }

    /// Like [`Configuration::ensure_default`], with caller values taking
    /// precedence over the saved ones.
    pub fn ensure_default_with(
        persistence: &dyn Persistence,
        working_dir: &Path,
        overrides: RawAttributes,
    ) -> Result<Self> {
        persistence.init()?;
        let saved = RawAttributes::from_raw(&persistence.get()?);
        Ok(Self::new(saved.merged_with(overrides), working_dir))
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn dependencies_file_dir(&self) -> &str {
        &self.dependencies_file_dir
    }

    pub fn gradle_command(&self) -> &str {
        &self.gradle_command
    }

    pub fn artifacts(&self) -> Artifacts<'_> {
        Artifacts::new(Path::new(&self.dependencies_file_dir))
    }

    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    pub fn with_dependencies_file_dir(mut self, dir: impl Into<String>) -> Self {
        self.dependencies_file_dir = dir.into();
        self
    }

    pub fn with_gradle_command(mut self, gradle_command: impl Into<String>) -> Self {
        self.gradle_command = gradle_command.into();
        self
    }

    /// The scalar settings under their persisted keys. Derived paths are left out.
    pub fn to_raw(&self) -> RawConfig {
        [
            (PROJECT_NAME_KEY, &self.project_name),
            (DEPENDENCIES_FILE_DIR_KEY, &self.dependencies_file_dir),
            (GRADLE_COMMAND_KEY, &self.gradle_command),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.clone())))
        .collect()
    }

    pub fn save(&self, persistence: &dyn Persistence) -> Result<()> {
        persistence.set(&self.to_raw())
    }
}

/// Base name of `working_dir`, or the whole path when it has none (e.g. `/`).
pub fn default_project_name(working_dir: &Path) -> String {
    working_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| working_dir.display().to_string())
}
