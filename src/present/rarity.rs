//! Rarity tiers.

use std::fmt;

use crate::catalog::Item;

/// Coarse visual classification from level and affect count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RarityTier {
    #[default]
    None,
    Rare,
    Epic,
    Legendary,
}

impl RarityTier {
    /// Classify from raw level and affect count. Checked top down.
    pub fn classify(level: i64, affect_count: usize) -> Self {
        if level >= 120 || affect_count >= 8 {
            RarityTier::Legendary
        } else if level >= 100 || affect_count >= 6 {
            RarityTier::Epic
        } else if level >= 80 || affect_count >= 4 {
            RarityTier::Rare
        } else {
            RarityTier::None
        }
    }

    pub fn for_item(item: &Item) -> Self {
        Self::classify(item.level(), item.affects.len())
    }

    /// CSS class name; empty for [`RarityTier::None`].
    pub fn css_class(self) -> &'static str {
        match self {
            RarityTier::None => "",
            RarityTier::Rare => "rare",
            RarityTier::Epic => "epic",
            RarityTier::Legendary => "legendary",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RarityTier::None => f.write_str("common"),
            other => f.write_str(other.css_class()),
        }
    }
}
