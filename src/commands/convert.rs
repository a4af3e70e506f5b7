//! Convert command handler

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use itemview::AreaFile;

use super::write_output;

/// Convert an area file to catalog JSON on stdout or in `output`.
#[cfg(not(tarpaulin_include))]
pub fn handle(area_file: &Path, output: Option<&Path>) -> Result<()> {
    let area = AreaFile::load(area_file)
        .with_context(|| format!("Failed to convert {}", area_file.display()))?;
    info!(path = ?area_file, objects = area.objects.len(), "Converted area file");

    let mut json = area.to_json_pretty()?;
    json.push('\n');
    write_output(&json, output)
}
