//! Paths of the files the license finder writes, all under one directory.

use std::path::{Path, PathBuf};

pub const DECISIONS_FILE_NAME: &str = "dependency_decisions.yml";
pub const LEGACY_YAML_FILE_NAME: &str = "dependencies.yml";
pub const TEXT_FILE_NAME: &str = "dependencies.txt";
pub const HTML_FILE_NAME: &str = "dependencies.html";

/// Artifact paths derived from the configured dependencies directory.
///
/// Borrowed from a `Configuration`; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifacts<'a> {
    dir: &'a Path,
}

impl<'a> Artifacts<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &'a Path {
        self.dir
    }

    pub fn decisions_file(&self) -> PathBuf {
        self.dir.join(DECISIONS_FILE_NAME)
    }

    pub fn legacy_yaml_file(&self) -> PathBuf {
        self.dir.join(LEGACY_YAML_FILE_NAME)
    }

    pub fn text_file(&self) -> PathBuf {
        self.dir.join(TEXT_FILE_NAME)
    }

    pub fn html_file(&self) -> PathBuf {
        self.dir.join(HTML_FILE_NAME)
    }
}
