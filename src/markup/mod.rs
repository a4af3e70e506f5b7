//! Legacy color code markup.
//!
//! Item text carries brace codes (`{R`, `{@`, `{x`, ...) and packed RGB
//! escapes (`\t[F050]`). This module turns them into nested HTML spans.
//!
//! ```
//! use itemview::markup::Translator;
//!
//! let translator = Translator::legacy()?;
//! assert_eq!(
//!     translator.translate("{Rhot{x"),
//!     "<span style=\"color: #ff6666\">hot</span>"
//! );
//! # Ok::<(), itemview::markup::MarkupError>(())
//! ```

mod error;
mod table;
mod translator;

pub use error::MarkupError;
pub use table::{Channel, CodeAction, CodeEntry, CodeTable, Rgb};
pub use translator::{Scope, Translator};
