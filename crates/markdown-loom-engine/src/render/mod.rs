//! # Document Rendering
//!
//! Ties the pipeline together: block splitting, per-block node
//! construction, inline tokenization for the blocks that need it, and
//! final serialization. [`render_document`] is the engine's entry point.
//!
//! Rendering is all-or-nothing. A failure in any block aborts the whole
//! document; no partial HTML is produced.

use crate::html::{HtmlNode, LeafNode, ParentNode, RenderError};
use crate::parsing::blocks::{BlockKind, classify_block, split_into_blocks};
use crate::parsing::inline::{ParseError, SpanKind, TextSpan, text_to_spans};

/// A document render failed, either while tokenizing inline markup or
/// while serializing the node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("inline tokenization failed: {0}")]
    Parse(#[from] ParseError),
    #[error("node rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Maps a typed text span to its leaf node. Pure construction, no parsing.
pub fn span_to_node(span: &TextSpan) -> LeafNode {
    let url = span.url.as_deref().unwrap_or_default();
    match span.kind {
        SpanKind::Plain => LeafNode::text(&span.text),
        SpanKind::Bold => LeafNode::new("b", &span.text),
        SpanKind::Italic => LeafNode::new("i", &span.text),
        SpanKind::Code => LeafNode::new("code", &span.text),
        SpanKind::Link => LeafNode::new("a", &span.text).attr("href", url),
        SpanKind::Image => LeafNode::new("img", "").attr("src", url).attr("alt", &span.text),
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    let spans = text_to_spans(text)?;
    Ok(spans.iter().map(|span| span_to_node(span).into()).collect())
}

/// Builds the HTML node for one normalized block.
pub fn block_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    let node = match classify_block(block) {
        BlockKind::Heading(level) => {
            let text = &block[level as usize + 1..];
            ParentNode::new(&format!("h{level}"), inline_children(text)?).into()
        }
        BlockKind::Code => {
            // Inline markup inside a fence is left alone.
            let inner = block
                .strip_prefix("```")
                .and_then(|rest| rest.strip_suffix("```"))
                .unwrap_or(block);
            let inner = inner.strip_prefix('\n').unwrap_or(inner);
            ParentNode::new("pre", vec![LeafNode::new("code", inner).into()]).into()
        }
        BlockKind::Quote => {
            let stripped: Vec<&str> = block
                .split('\n')
                .map(|line| {
                    let line = line.strip_prefix('>').unwrap_or(line);
                    line.strip_prefix(' ').unwrap_or(line)
                })
                .collect();
            ParentNode::new("blockquote", inline_children(&stripped.join("\n"))?).into()
        }
        BlockKind::UnorderedList => list_node("ul", block, |line| {
            line.strip_prefix("- ").unwrap_or(line)
        })?,
        BlockKind::OrderedList => list_node("ol", block, |line| {
            line.split_once(". ").map_or(line, |(_, rest)| rest)
        })?,
        BlockKind::Paragraph => ParentNode::new("p", inline_children(block)?).into(),
    };
    Ok(node)
}

fn list_node(
    tag: &str,
    block: &str,
    strip_marker: impl Fn(&str) -> &str,
) -> Result<HtmlNode, ParseError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        items.push(ParentNode::new("li", inline_children(strip_marker(line))?).into());
    }
    Ok(ParentNode::new(tag, items).into())
}

/// Renders a whole markdown document to an HTML string.
///
/// Blocks are rendered in order and concatenated with nothing between
/// them.
pub fn render_document(markdown: &str) -> Result<String, MarkdownError> {
    let mut html = String::new();
    for block in split_into_blocks(markdown) {
        let node = block_to_node(&block)?;
        html.push_str(&node.render()?);
    }
    Ok(html)
}
