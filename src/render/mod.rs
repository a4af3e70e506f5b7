//! HTML rendering for item cards and pages.

mod card;
mod html;
mod page;

pub use card::{CardRenderer, NO_RESULTS_MESSAGE};
pub use html::escape_html;
pub use page::{render_catalog, render_error_page, render_page, LOAD_ERROR_MESSAGE};
