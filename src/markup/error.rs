//! Code table construction errors.

/// Errors raised while building a [`CodeTable`](super::CodeTable) or
/// compiling it into a [`Translator`](super::Translator).
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Markup code must not be empty")]
    EmptyCode,

    #[error("Markup code '{code}' contains an HTML-escaped character (& < > \" ')")]
    UnsafeCode { code: String },

    #[error("Invalid color '{value}' for code '{code}', expected #rrggbb")]
    InvalidColor { code: String, value: String },

    #[error("Failed to compile pattern for code '{code}': {source}")]
    Pattern {
        code: String,
        #[source]
        source: regex::Error,
    },
}
