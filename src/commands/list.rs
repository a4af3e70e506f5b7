//! List command handler

use anyhow::Result;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use itemview::cli::FilterArgs;
use itemview::render::NO_RESULTS_MESSAGE;
use itemview::theme::Theme;
use itemview::{Config, Item, RarityTier, Translator};

use super::{item_filter, load_catalog, resolve_catalog_path, truncate_string};

const TYPE_WIDTH: usize = 12;
const NAME_WIDTH: usize = 48;

/// List matching items as a text table.
///
/// Names are shown with color codes removed and tinted by rarity tier.
#[cfg(not(tarpaulin_include))]
pub fn handle(catalog: Option<&Path>, filter: &FilterArgs, config: &Config) -> Result<()> {
    let translator = config.translator()?;
    let catalog = load_catalog(&resolve_catalog_path(catalog, config), config)?;
    let filter = item_filter(filter);
    let items = filter.apply(&catalog.items);
    let summary = summary_line(items.len(), catalog.len(), filter.is_active());
    let theme = Theme::default();

    if items.is_empty() {
        println!("{}", theme.primary_text(NO_RESULTS_MESSAGE));
        return Ok(());
    }

    println!("{}", theme.primary_text(&summary));
    println!();
    println!(
        "{}",
        theme.accent_text(" vnum | lvl | rarity    | type         | name")
    );
    println!(
        "{}",
        theme.secondary_text(
            "------+-----+-----------+--------------+------------------------------------------------"
        )
    );

    for item in items {
        let tier = RarityTier::for_item(item);
        println!("{}", format_row(item, tier, &translator, &theme));
    }

    Ok(())
}

fn summary_line(shown: usize, total: usize, filtered: bool) -> String {
    if filtered {
        format!("Items: {} of {} (filtered)", shown, total)
    } else {
        format!("Items: {} of {}", shown, total)
    }
}

/// One table row. Only the name cell is colored.
pub(crate) fn format_row(
    item: &Item,
    tier: RarityTier,
    translator: &Translator,
    theme: &Theme,
) -> String {
    let vnum = item.vnum.map(|v| v.to_string()).unwrap_or_default();
    let name = truncate_string(&translator.strip(item.display_name()), NAME_WIDTH);
    format!(
        "{:>5} | {:>3} | {:9} | {} | {}",
        vnum,
        item.level(),
        tier.to_string(),
        pad_display(&truncate_string(item.item_type(), TYPE_WIDTH), TYPE_WIDTH),
        theme.rarity_text(tier, &name)
    )
}

/// Pad to a terminal display width. `format!` pads by char count, which
/// misaligns wide characters.
fn pad_display(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
