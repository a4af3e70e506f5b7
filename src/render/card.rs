//! Item card assembly.

use std::fmt::Write as _;

use crate::catalog::Item;
use crate::markup::Translator;
use crate::present::{item_stat_lines, RarityTier, StatLine};

use super::html::escape_html;

/// Shown in place of the grid when no item matches.
pub const NO_RESULTS_MESSAGE: &str = "No items match your search.";

/// Renders items as HTML cards.
///
/// Item text is HTML escaped and then run through the translator.
#[derive(Debug, Clone, Copy)]
pub struct CardRenderer<'a> {
    translator: &'a Translator,
}

impl<'a> CardRenderer<'a> {
    pub fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    /// Escape, then translate color codes.
    pub fn format_text(&self, text: &str) -> String {
        self.translator.translate(&escape_html(text))
    }

    /// Render one item card.
    pub fn card(&self, item: &Item) -> String {
        let rarity = RarityTier::for_item(item);
        let mut html = String::new();

        html.push_str("<div class=\"item-card");
        if rarity != RarityTier::None {
            html.push(' ');
            html.push_str(rarity.css_class());
        }
        html.push('"');
        if let Some(vnum) = item.vnum {
            let _ = write!(html, " data-vnum=\"{}\"", vnum);
        }
        html.push_str(">\n");

        let _ = writeln!(
            html,
            "  <div class=\"item-name\">{}</div>",
            self.format_text(item.display_name())
        );
        let _ = writeln!(
            html,
            "  <div class=\"item-type\">{}</div>",
            escape_html(item.item_type())
        );

        let lines = item_stat_lines(item);
        if !lines.is_empty() {
            html.push_str("  <div class=\"item-stats\">\n");
            for line in &lines {
                html.push_str(&self.stat_line(line));
            }
            html.push_str("  </div>\n");
        }

        let flags = item.wear_flags();
        if !flags.is_empty() {
            html.push_str("  <div class=\"item-flags\">");
            for flag in flags {
                let _ = write!(html, "<span class=\"flag\">{}</span>", escape_html(flag));
            }
            html.push_str("</div>\n");
        }

        if let Some(description) = item.description() {
            let _ = writeln!(
                html,
                "  <div class=\"item-description\">{}</div>",
                self.format_text(description)
            );
        }

        html.push_str("</div>\n");
        html
    }

    fn stat_line(&self, line: &StatLine) -> String {
        format!(
            "    <div class=\"stat-line {}\"><span>{}</span><span>{}</span></div>\n",
            line.class.css_class(),
            self.format_text(&line.label),
            self.format_text(&line.value)
        )
    }

    /// Render the card grid, or a no-results block when `items` is empty.
    pub fn grid(&self, items: &[&Item]) -> String {
        if items.is_empty() {
            return format!("<div class=\"no-results\">{}</div>\n", NO_RESULTS_MESSAGE);
        }
        let mut html = String::from("<div class=\"item-grid\">\n");
        for item in items {
            html.push_str(&self.card(item));
        }
        html.push_str("</div>\n");
        html
    }
}
