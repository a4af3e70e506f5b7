//! Configuration management for itemview

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::markup::{CodeTable, MarkupError, Translator};

impl Config {
    /// Get the config file path (~/.config/itemview/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Load from `path` when given, otherwise from the default location
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Expand ~ in the catalog path
    pub fn catalog_path(&self) -> PathBuf {
        let path = &self.catalog.path;
        if let Some(stripped) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(path)
    }

    /// The legacy code table with configured color codes applied
    pub fn code_table(&self) -> Result<CodeTable, MarkupError> {
        CodeTable::legacy().with_overrides(
            self.markup
                .codes
                .iter()
                .map(|(code, value)| (code.as_str(), value.as_str())),
        )
    }

    /// Build the translator for this configuration
    pub fn translator(&self) -> Result<Translator, MarkupError> {
        Translator::new(&self.code_table()?)
    }
}
