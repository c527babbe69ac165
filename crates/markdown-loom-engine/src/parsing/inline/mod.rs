//! # Inline Tokenization
//!
//! Turns raw block text into an ordered sequence of typed [`TextSpan`]s by
//! repeatedly splitting plain spans.
//!
//! ## Pass order
//!
//! [`text_to_spans`] applies the passes in a fixed order:
//!
//! 1. `**` → Bold (before italic, so `**x**` is not eaten by `_`'s
//!    single-character cousin)
//! 2. `_` → Italic
//! 3. `` ` `` → Code
//! 4. image extraction
//! 5. link extraction
//!
//! Each pass only touches spans still marked Plain, so markup inside an
//! already-recognized span is never re-interpreted. Nested emphasis
//! combinations are out of scope for this dialect.

pub mod delimiter;
pub mod extract;
pub mod span;

pub use delimiter::split_spans_by_delimiter;
pub use extract::{extract_images, extract_links, split_spans_by_images, split_spans_by_links};
pub use span::{SpanKind, TextSpan};

/// Tokenizing a block's inline text failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An opened inline delimiter never closes. Fatal for the whole
    /// render; partial inline output would be ambiguous.
    #[error("no closing delimiter found for `{delimiter}`")]
    UnterminatedDelimiter { delimiter: String },
}

/// Tokenizes `text` into typed inline spans.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>, ParseError> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_spans_by_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_spans_by_delimiter(spans, "_", SpanKind::Italic)?;
    spans = split_spans_by_delimiter(spans, "`", SpanKind::Code)?;
    spans = split_spans_by_images(spans);
    spans = split_spans_by_links(spans);
    Ok(spans)
}
