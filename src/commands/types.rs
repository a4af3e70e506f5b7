//! Types command handler

use anyhow::Result;
use std::path::Path;

use itemview::theme::Theme;
use itemview::Config;

use super::{load_catalog, resolve_catalog_path};

/// Show each item type with its count, sorted by type name.
#[cfg(not(tarpaulin_include))]
pub fn handle(catalog: Option<&Path>, config: &Config) -> Result<()> {
    let catalog = load_catalog(&resolve_catalog_path(catalog, config), config)?;
    let theme = Theme::default();

    let types = catalog.item_types();
    if types.is_empty() {
        println!("{}", theme.primary_text("No items found."));
        return Ok(());
    }

    let width = types.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
    for (item_type, count) in types {
        println!(
            "{}  {}",
            theme.accent_text(&format!("{:width$}", item_type, width = width)),
            theme.primary_text(&count.to_string())
        );
    }
    Ok(())
}
