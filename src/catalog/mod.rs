//! Item catalog loading and filtering.

mod error;
mod filter;
mod loader;
mod types;

pub use error::CatalogError;
pub use filter::ItemFilter;
pub use loader::Catalog;
pub use types::{Affect, AreaInfo, Item, ItemValues};
