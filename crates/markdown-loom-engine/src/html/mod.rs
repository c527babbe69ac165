pub mod node;

pub use node::{HtmlNode, LeafNode, ParentNode, RenderError};
