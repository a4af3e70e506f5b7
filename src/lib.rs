//! Item Viewer Library
//!
//! Loads a JSON catalog of game items, filters it, and renders each item as
//! an HTML card. Item text may carry legacy color codes, which the
//! [`markup`] module translates into nested HTML. The [`area`] module
//! converts game area files into that catalog format.

pub mod area;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod markup;
pub mod present;
pub mod render;
pub mod theme;

pub use area::{AreaError, AreaFile};
pub use catalog::{Catalog, CatalogError, Item, ItemFilter};
pub use config::Config;
pub use markup::{CodeTable, Translator};
pub use present::RarityTier;
pub use render::CardRenderer;
