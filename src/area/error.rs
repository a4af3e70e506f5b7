//! Area conversion errors.

use std::path::PathBuf;

/// Errors that can occur while converting an area file.
#[derive(Debug, thiserror::Error)]
pub enum AreaError {
    #[error("Failed to read area file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
