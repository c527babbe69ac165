pub mod html;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use html::{HtmlNode, LeafNode, ParentNode, RenderError};
pub use parsing::{BlockKind, ParseError, SpanKind, TextSpan, classify_block, split_into_blocks, text_to_spans};
pub use render::{MarkdownError, block_to_node, render_document, span_to_node};
