//! Full HTML page shell.

use std::fmt::Write as _;

use crate::catalog::{Catalog, ItemFilter};
use crate::markup::Translator;

use super::card::CardRenderer;
use super::html::escape_html;

/// Shown in place of the grid when the catalog cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading items. Please check if the JSON file is accessible.";

const STYLESHEET: &str = r#"
body { background: #111; color: #ddd; font-family: monospace; margin: 2rem; }
h1 { color: #66ff66; }
.summary { color: #888; margin-bottom: 1rem; }
.item-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1rem; }
.item-card { background: #1b1b1b; border: 1px solid #333; border-radius: 6px; padding: 1rem; }
.item-card.rare { border-color: #6666ff; }
.item-card.epic { border-color: #aa66ff; }
.item-card.legendary { border-color: #ffaa66; }
.item-name { font-weight: bold; margin-bottom: 0.25rem; }
.item-type { color: #888; text-transform: capitalize; margin-bottom: 0.5rem; }
.stat-line { display: flex; justify-content: space-between; }
.stat-line.positive { color: #66cc66; }
.stat-line.negative { color: #cc6666; }
.stat-line.neutral { color: #aaaaaa; }
.stat-line.rare { color: #6666ff; }
.stat-line.epic { color: #aa66ff; }
.stat-line.legendary { color: #ffaa66; }
.item-flags { margin-top: 0.5rem; }
.flag { display: inline-block; background: #333; border-radius: 3px; padding: 0 0.4rem; margin: 0 0.25rem 0.25rem 0; }
.item-description { color: #aaa; margin-top: 0.5rem; }
.no-results, .error { color: #cc6666; }
.blink { animation: blink 1s step-start infinite; }
.reverse { filter: invert(1); }
@keyframes blink { 50% { opacity: 0; } }
"#;

/// Wrap a rendered body in a standalone HTML document.
///
/// `summary` is plain text shown under the title.
pub fn render_page(title: &str, summary: &str, body: &str) -> String {
    let title = escape_html(title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", title);
    let _ = writeln!(html, "<style>{}</style>", STYLESHEET);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", title);
    if !summary.is_empty() {
        let _ = writeln!(html, "<div class=\"summary\">{}</div>", escape_html(summary));
    }
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

/// Page with the static load error message in place of the grid.
pub fn render_error_page(title: &str) -> String {
    render_page(
        title,
        "",
        &format!("<div class=\"error\"><p>{}</p></div>\n", LOAD_ERROR_MESSAGE),
    )
}

/// Filter a catalog and render the full page.
pub fn render_catalog(
    catalog: &Catalog,
    filter: &ItemFilter,
    translator: &Translator,
    title: &str,
) -> String {
    let items = filter.apply(&catalog.items);
    let mut summary = format!("Showing {} of {} items", items.len(), catalog.len());
    if let Some(area) = catalog.area.as_ref().and_then(|a| a.name.as_deref()) {
        summary = format!("{} - {}", translator.strip(area), summary);
    }
    let body = CardRenderer::new(translator).grid(&items);
    render_page(title, &summary, &body)
}
