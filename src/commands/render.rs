//! Render command handler

use anyhow::Result;
use std::path::Path;
use tracing::error;

use itemview::cli::FilterArgs;
use itemview::render::{render_catalog, render_error_page};
use itemview::Config;

use super::{item_filter, load_catalog, resolve_catalog_path, write_output};

/// Render the catalog as an HTML page.
///
/// When the catalog cannot be loaded, the error page is still written so the
/// output file always holds a valid document, and the load error is returned.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    catalog: Option<&Path>,
    filter: &FilterArgs,
    output: Option<&Path>,
    title: Option<&str>,
    config: &Config,
) -> Result<()> {
    let translator = config.translator()?;
    let title = title.unwrap_or(&config.render.title);
    let path = resolve_catalog_path(catalog, config);

    let (html, load_error) = match load_catalog(&path, config) {
        Ok(catalog) => (
            render_catalog(&catalog, &item_filter(filter), &translator, title),
            None,
        ),
        Err(e) => {
            error!(path = ?path, error = %e, "Failed to load catalog");
            (render_error_page(title), Some(e))
        }
    };

    write_output(&html, output)?;

    match load_error {
        Some(e) => Err(e.context(format!("Failed to load catalog {}", path.display()))),
        None => Ok(()),
    }
}
