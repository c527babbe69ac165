//! The HTML node tree produced by rendering.
//!
//! Two node shapes exist: a [`LeafNode`] holding a literal value and a
//! [`ParentNode`] whose rendered content is the concatenation of its
//! children. The set is sealed; block and inline rendering only ever
//! construct these two.
//!
//! Attribute values are emitted verbatim, without escaping quotes or other
//! special characters. The constrained dialect's URLs cannot contain
//! parentheses and the upstream corpus relies on the unescaped form.

/// Rendering failed because a required field was never set.
///
/// These signal a construction bug upstream, not bad input: an empty value
/// or an empty child list is valid, only the unset state is an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node has no children")]
    MissingChildren,
}

/// A node in the HTML tree. Owns its children exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Renders this node and its descendants to an HTML string, in document
    /// order with no whitespace added between siblings.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A childless node holding a literal value.
///
/// A leaf without a tag renders as the bare value; this is how plain text
/// spans end up in the output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    /// Attribute pairs in insertion order.
    pub attrs: Vec<(String, String)>,
}

impl LeafNode {
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attrs: Vec::new(),
        }
    }

    /// An untagged leaf that renders as raw text.
    pub fn text(value: &str) -> Self {
        Self {
            tag: None,
            value: Some(value.to_string()),
            attrs: Vec::new(),
        }
    }

    /// Appends an attribute, preserving insertion order.
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let value = self.value.as_ref().ok_or(RenderError::MissingValue)?;
        match &self.tag {
            None => Ok(value.clone()),
            Some(tag) => Ok(format!(
                "<{tag}{attrs}>{value}</{tag}>",
                attrs = attrs_to_html(&self.attrs)
            )),
        }
    }
}

/// A node whose rendered content is the concatenation of its children.
///
/// `children` distinguishes unset (`None`, a render error) from empty
/// (`Some(vec![])`, which renders as empty inner content).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    /// Attribute pairs in insertion order.
    pub attrs: Vec<(String, String)>,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Vec::new(),
        }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let tag = self.tag.as_ref().ok_or(RenderError::MissingTag)?;
        let children = self.children.as_ref().ok_or(RenderError::MissingChildren)?;

        let mut inner = String::new();
        for child in children {
            inner.push_str(&child.render()?);
        }

        Ok(format!(
            "<{tag}{attrs}>{inner}</{tag}>",
            attrs = attrs_to_html(&self.attrs)
        ))
    }
}

fn attrs_to_html(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out
}
