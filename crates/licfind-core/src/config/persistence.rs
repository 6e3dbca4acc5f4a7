//! Persistence for the flat config mapping.

use std::path::{Path, PathBuf};

use super::raw::{RawConfig, parse_raw_config, to_yaml};
use crate::error::{ConfigError, Result};

/// Default config file contents installed by `init`.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/license_finder.yml");

/// Storage for one flat mapping of settings.
///
/// `Configuration` only talks to this trait, so hosts and tests can swap the
/// backing store.
pub trait Persistence {
    /// Load the stored mapping. A store that was never written is empty.
    fn get(&self) -> Result<RawConfig>;

    /// Replace the stored mapping.
    fn set(&self, raw: &RawConfig) -> Result<()>;

    /// Create the store from its template if it does not exist yet.
    ///
    /// Returns `true` when the store was created, `false` when it already existed.
    fn init(&self) -> Result<bool>;
}

/// Where `init` takes the initial file contents from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// The template compiled into the library.
    #[default]
    Bundled,
    /// A template file on disk, copied byte for byte.
    File(PathBuf),
}

/// YAML file backed persistence.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    file: PathBuf,
    template: TemplateSource,
}

impl FilePersistence {
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            template: TemplateSource::Bundled,
        }
    }

    pub fn with_template(file: PathBuf, template: TemplateSource) -> Self {
        Self { file, template }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn template(&self) -> &TemplateSource {
        &self.template
    }

    fn create_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

impl Persistence for FilePersistence {
    fn get(&self) -> Result<RawConfig> {
        if !self.file.exists() {
            tracing::debug!(path = %self.file.display(), "No config file, using empty config");
            return Ok(RawConfig::new());
        }

        let content = std::fs::read_to_string(&self.file).map_err(|source| ConfigError::Read {
            path: self.file.clone(),
            source,
        })?;
        let raw = parse_raw_config(&content, &self.file)?;
        tracing::debug!(path = %self.file.display(), keys = raw.len(), "Loaded config file");
        Ok(raw)
    }

    fn set(&self, raw: &RawConfig) -> Result<()> {
        let content = to_yaml(raw)?;
        self.create_parent_dir()?;
        std::fs::write(&self.file, content).map_err(|source| ConfigError::Write {
            path: self.file.clone(),
            source,
        })?;
        tracing::debug!(path = %self.file.display(), keys = raw.len(), "Saved config file");
        Ok(())
    }

    fn init(&self) -> Result<bool> {
        if self.file.exists() {
            return Ok(false);
        }

        self.create_parent_dir()?;
        let written = match &self.template {
            TemplateSource::Bundled => std::fs::write(&self.file, BUNDLED_TEMPLATE),
            TemplateSource::File(template) => std::fs::copy(template, &self.file).map(|_| ()),
        };
        written.map_err(|source| ConfigError::Write {
            path: self.file.clone(),
            source,
        })?;

        tracing::info!(path = %self.file.display(), "Created config file from template");
        Ok(true)
    }
}
