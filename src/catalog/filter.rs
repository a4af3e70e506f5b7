//! Search and type filtering.

use super::types::Item;

/// Case-insensitive search plus an optional exact type match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    search: String,
    item_type: Option<String>,
}

impl ItemFilter {
    /// Create a filter. An empty type means every type matches.
    pub fn new(search: &str, item_type: Option<&str>) -> Self {
        Self {
            search: search.to_lowercase(),
            item_type: item_type.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Whether the item matches both the search term and the type.
    ///
    /// The search term is matched against the keyword name and the short
    /// description.
    pub fn matches(&self, item: &Item) -> bool {
        let matches_search = item.name().to_lowercase().contains(&self.search)
            || item.short_descr().to_lowercase().contains(&self.search);
        let matches_type = self
            .item_type
            .as_deref()
            .map_or(true, |t| item.item_type() == t);

        matches_search && matches_type
    }

    /// Filter a slice, preserving order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        if !self.is_active() {
            return items.iter().collect();
        }
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Whether a search term or type is set.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.item_type.is_some()
    }
}
