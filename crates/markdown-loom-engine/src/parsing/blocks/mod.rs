//! # Block Splitting
//!
//! A document is a sequence of blocks separated by blank lines. Splitting
//! normalizes each surviving block: every line is stripped individually and
//! the lines are rejoined with single newlines, so inconsistent indentation
//! disappears without collapsing intentional multi-line content.
//!
//! Blocks are ephemeral strings; [`classify_block`](classify::classify_block)
//! derives their structural kind on demand.

pub mod classify;

pub use classify::{BlockKind, classify_block};

/// Splits a document into normalized block strings.
///
/// Blank-line runs separate blocks; blocks that are empty after trimming
/// are discarded, so an empty or whitespace-only document yields nothing.
pub fn split_into_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    for raw in document.split("\n\n") {
        let stripped = raw.trim();
        if stripped.is_empty() {
            continue;
        }
        let normalized: Vec<&str> = stripped.split('\n').map(str::trim).collect();
        blocks.push(normalized.join("\n"));
    }
    blocks
}
