use super::ParseError;
use super::span::{SpanKind, TextSpan};

/// Splits every plain span on a paired inline delimiter.
///
/// Each complete `delimiter .. delimiter` pair becomes a span of `kind`;
/// text before a pair is kept as plain when non-empty, the between text is
/// emitted even when empty. An opener with no closer is an error for the
/// whole split. Non-plain spans pass through untouched, so already-split
/// bold/italic/code text is never re-split.
///
/// The tail after a pair is re-scanned in place rather than by recursing,
/// so pathological inputs cannot grow the call stack.
pub fn split_spans_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ParseError> {
    let mut out = Vec::new();

    for span in spans {
        if !span.is_plain() || !span.text.contains(delimiter) {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        loop {
            let Some(open) = rest.find(delimiter) else {
                if !rest.is_empty() {
                    out.push(TextSpan::plain(rest));
                }
                break;
            };

            let after_open = &rest[open + delimiter.len()..];
            let Some(close) = after_open.find(delimiter) else {
                return Err(ParseError::UnterminatedDelimiter {
                    delimiter: delimiter.to_string(),
                });
            };

            let before = &rest[..open];
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan::new(&after_open[..close], kind));

            rest = &after_open[close + delimiter.len()..];
        }
    }

    Ok(out)
}
