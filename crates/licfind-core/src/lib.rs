//! licfind Core Library
//!
//! Resolves the settings the license finder runs with: the project name,
//! where dependency decision files live, and how to invoke gradle. Values
//! come from caller overrides, the persisted YAML config file, and computed
//! defaults, in that order.

pub mod config;
pub mod context;
pub mod error;

pub use error::{ConfigError, Result};

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::{
        Artifacts, Configuration, FilePersistence, Persistence, RawAttributes, RawConfig,
        TemplateSource,
    };
    pub use crate::context::ConfigContext;
    pub use crate::error::{ConfigError, Result};
}
