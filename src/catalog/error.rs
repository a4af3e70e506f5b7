//! Catalog loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog must be a JSON object")]
    NotAnObject,

    #[error("Catalog has no \"objects\" array")]
    MissingObjects,
}
