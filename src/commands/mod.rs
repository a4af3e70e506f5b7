//! Command handlers for the itemview CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod convert;
pub mod list;
pub mod markup;
pub mod render;
pub mod types;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use itemview::cli::FilterArgs;
use itemview::{Catalog, Config, ItemFilter};

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Use the catalog given on the command line, or fall back to the config.
pub fn resolve_catalog_path(catalog: Option<&Path>, config: &Config) -> PathBuf {
    match catalog {
        Some(path) => path.to_path_buf(),
        None => config.catalog_path(),
    }
}

/// Load a catalog and drop items below the configured wear flag count.
pub fn load_catalog(path: &Path, config: &Config) -> Result<Catalog> {
    let mut catalog = Catalog::load(path)?;
    catalog.retain_wearable(config.catalog.min_wear_flags);
    info!(path = ?path, items = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// Build an item filter from CLI arguments.
pub fn item_filter(args: &FilterArgs) -> ItemFilter {
    ItemFilter::new(&args.search, args.item_type.as_deref())
}

/// Write a document to `output`, creating its directory, or to stdout.
pub fn write_output(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = ?path, bytes = contents.len(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
