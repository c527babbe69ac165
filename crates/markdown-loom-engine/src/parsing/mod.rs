pub mod blocks;
pub mod inline;

pub use blocks::{BlockKind, classify_block, split_into_blocks};
pub use inline::{ParseError, SpanKind, TextSpan, text_to_spans};
