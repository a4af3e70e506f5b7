//! Presentation helpers: rarity, stat labels, polarity and stat lines.

mod line;
mod rarity;
mod stat;

pub use line::{item_stat_lines, FlagKind, StatClass, StatLine};
pub use rarity::RarityTier;
pub use stat::{modifier_text, stat_label, StatPolarity};
