//! Catalog document parser.
//!
//! # Format
//!
//! ```text
//! {
//!   "area": {"name": "Aether", "file": "aether.are", ...},   <- optional
//!   "objects": [ {"vnum": 1200, "name": "...", ...}, ... ]
//! }
//! ```
//!
//! Only a missing or unreadable document, invalid JSON, or a missing
//! `objects` array is an error. Individual records that are not JSON objects
//! are skipped with a warning.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::error::CatalogError;
use super::types::{AreaInfo, Item};

/// An in-memory snapshot of one catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub area: Option<AreaInfo>,
    pub items: Vec<Item>,
}

impl Catalog {
    /// Load a catalog from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = ?path, bytes = contents.len(), "Read catalog");
        Self::parse_str(&contents)
    }

    /// Load a catalog from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CatalogError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::parse_str(&contents)
    }

    /// Parse a catalog from a JSON string.
    pub fn parse_str(contents: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Object(mut document) = value else {
            return Err(CatalogError::NotAnObject);
        };

        let Some(Value::Array(objects)) = document.remove("objects") else {
            return Err(CatalogError::MissingObjects);
        };

        let area = document
            .remove("area")
            .and_then(|area| serde_json::from_value(area).ok());

        let mut items = Vec::with_capacity(objects.len());
        for (index, object) in objects.into_iter().enumerate() {
            if !object.is_object() {
                warn!(index, "Skipping catalog record that is not an object");
                continue;
            }
            match serde_json::from_value::<Item>(object) {
                Ok(item) => items.push(item),
                Err(e) => warn!(index, error = %e, "Skipping unreadable catalog record"),
            }
        }

        debug!(items = items.len(), "Parsed catalog");
        Ok(Self { area, items })
    }

    /// Keep only items with at least `min_flags` wear flags.
    pub fn retain_wearable(&mut self, min_flags: usize) {
        let before = self.items.len();
        self.items.retain(|item| item.wear_flags().len() >= min_flags);
        debug!(
            kept = self.items.len(),
            dropped = before - self.items.len(),
            min_flags,
            "Applied wear flag filter"
        );
    }

    /// Distinct item types with their counts, sorted by type name.
    pub fn item_types(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.item_type()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
