/// The semantic kind of an inline text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A contiguous run of inline text tagged with one semantic kind.
///
/// `url` is present exactly when the kind is [`SpanKind::Link`] or
/// [`SpanKind::Image`]. Spans are immutable values; two spans are equal
/// when all three fields are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SpanKind::Link,
            url: Some(url.to_string()),
        }
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            text: alt.to_string(),
            kind: SpanKind::Image,
            url: Some(url.to_string()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
