//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
}

/// Catalog source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog used when none is given on the command line
    #[serde(default = "default_catalog_path")]
    pub path: String,
    /// Items with fewer wear flags than this are not shown
    #[serde(default = "default_min_wear_flags")]
    pub min_wear_flags: usize,
}

pub fn default_catalog_path() -> String {
    "json/aether.json".to_string()
}

pub fn default_min_wear_flags() -> usize {
    2
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            min_wear_flags: default_min_wear_flags(),
        }
    }
}

/// HTML output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

pub fn default_title() -> String {
    "Item Viewer".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Markup configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkupConfig {
    /// Extra or replacement foreground color codes, e.g. `"{o" = "#ffaa66"`.
    /// Codes may not contain `&`, `<`, `>`, `"` or `'`.
    #[serde(default)]
    pub codes: BTreeMap<String, String>,
}
