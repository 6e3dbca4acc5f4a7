//! Environment the configuration is resolved in.

use std::path::{Path, PathBuf};

use crate::config::{
    Configuration, FilePersistence, RawAttributes, TemplateSource, config_file_path,
};
use crate::error::{ConfigError, Result};

/// Working directory and config file location for one tool run.
///
/// Frontends create this once, from the process or from explicit paths, and
/// load settings through it.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    working_dir: PathBuf,
    config_file: PathBuf,
    template: TemplateSource,
}

impl ConfigContext {
    /// Create a context with explicit paths.
    pub fn new(working_dir: PathBuf, config_file: PathBuf) -> Self {
        Self {
            working_dir,
            config_file,
            template: TemplateSource::Bundled,
        }
    }

    /// Create a context rooted at `project_root`, with the config file at its
    /// default location unless `config_override` is given.
    pub fn for_project(project_root: PathBuf, config_override: Option<&Path>) -> Self {
        let config_file = config_file_path(&project_root, config_override);
        Self::new(project_root, config_file)
    }

    /// Create a context for the current process working directory.
    pub fn from_process(config_override: Option<&Path>) -> Result<Self> {
        let working_dir = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        Ok(Self::for_project(working_dir, config_override))
    }

    pub fn with_template(mut self, template: TemplateSource) -> Self {
        self.template = template;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Get the persistence handle for the config file.
    pub fn persistence(&self) -> FilePersistence {
        FilePersistence::with_template(self.config_file.clone(), self.template.clone())
    }

    pub fn ensure_default(&self) -> Result<Configuration> {
        Configuration::ensure_default(&self.persistence(), &self.working_dir)
    }

    pub fn ensure_default_with(&self, overrides: RawAttributes) -> Result<Configuration> {
        Configuration::ensure_default_with(&self.persistence(), &self.working_dir, overrides)
    }

    pub fn save(&self, config: &Configuration) -> Result<()> {
        config.save(&self.persistence())
    }
}
