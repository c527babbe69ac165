//! Image and link extraction.
//!
//! `![alt](url)` and `[text](url)` are matched with a compiled-once regex.
//! Alt/link text may not contain square brackets and URLs may not contain
//! parentheses; matching is left-to-right and non-overlapping. A leading
//! `!` makes a match an image and never also a link.

use regex::Regex;
use std::sync::OnceLock;

use super::span::TextSpan;

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid image regex")
    })
}

// The regex crate has no lookbehind, so link candidates share the bracket
// pattern and matches preceded by `!` are dropped afterwards.
fn bracket_regex() -> &'static Regex {
    static BRACKET_REGEX: OnceLock<Regex> = OnceLock::new();
    BRACKET_REGEX
        .get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid link regex"))
}

/// All `(alt, url)` image pairs in `text`, in order of appearance.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `(text, url)` link pairs in `text`, in order of appearance.
///
/// A bracket pair immediately preceded by `!` is an image, never a link.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for caps in bracket_regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > 0 && text.as_bytes()[whole.start() - 1] == b'!' {
            continue;
        }
        out.push((caps[1].to_string(), caps[2].to_string()));
    }
    out
}

/// Splits plain spans around every embedded image.
pub fn split_spans_by_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_on_matches(
        spans,
        extract_images,
        |alt, url| format!("![{alt}]({url})"),
        TextSpan::image,
    )
}

/// Splits plain spans around every embedded link.
pub fn split_spans_by_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_on_matches(
        spans,
        extract_links,
        |text, url| format!("[{text}]({url})"),
        TextSpan::link,
    )
}

/// Shared splitting pass for images and links.
///
/// For each extracted match, the *first* occurrence of its reconstructed
/// markdown in the still-unconsumed tail marks the boundary. Two identical
/// `![alt](url)` substrings in one span therefore resolve against the
/// earliest occurrence, which can misplace boundaries for the duplicate.
/// Kept as documented behavior, matching the extraction order contract.
fn split_on_matches(
    spans: Vec<TextSpan>,
    extract: fn(&str) -> Vec<(String, String)>,
    markdown_of: fn(&str, &str) -> String,
    span_of: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::new();

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let matches = extract(&span.text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut remaining = span.text.as_str();
        for (text, url) in &matches {
            let markdown = markdown_of(text, url);
            match remaining.split_once(&markdown) {
                Some((before, after)) => {
                    if !before.is_empty() {
                        out.push(TextSpan::plain(before));
                    }
                    out.push(span_of(text, url));
                    remaining = after;
                }
                None => {
                    // Match already consumed by an earlier duplicate.
                    if !remaining.is_empty() {
                        out.push(TextSpan::plain(remaining));
                    }
                    out.push(span_of(text, url));
                    remaining = "";
                }
            }
        }
        if !remaining.is_empty() {
            out.push(TextSpan::plain(remaining));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::span::SpanKind;

    #[test]
    fn extracts_single_image() {
        let matches =
            extract_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)");
        assert_eq!(
            matches,
            vec![(
                "image".to_string(),
                "https://i.imgur.com/zjjcJKZ.png".to_string()
            )]
        );
    }

    #[test]
    fn extracts_multiple_images_in_order() {
        let matches = extract_images(
            "A ![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)",
        );
        assert_eq!(
            matches,
            vec![
                (
                    "rick roll".to_string(),
                    "https://i.imgur.com/aKaOqIh.gif".to_string()
                ),
                (
                    "obi wan".to_string(),
                    "https://i.imgur.com/fJRm4Vk.jpeg".to_string()
                ),
            ]
        );
    }

    #[test]
    fn no_images_returns_empty() {
        assert!(extract_images("This text has no images").is_empty());
    }

    #[test]
    fn extracts_links_but_not_images() {
        let matches = extract_links(
            "This text has a ![image](https://example.com/img.jpg) and a [link](https://example.com)",
        );
        assert_eq!(
            matches,
            vec![("link".to_string(), "https://example.com".to_string())]
        );
    }

    #[test]
    fn images_and_links_are_mutually_exclusive() {
        let text = "a ![x](u) b [y](v) c";
        assert_eq!(
            extract_images(text),
            vec![("x".to_string(), "u".to_string())]
        );
        assert_eq!(extract_links(text), vec![("y".to_string(), "v".to_string())]);
    }

    #[test]
    fn link_at_start_of_text_is_extracted() {
        let matches = extract_links("[to the docs](https://docs.example.com) leads the text");
        assert_eq!(
            matches,
            vec![(
                "to the docs".to_string(),
                "https://docs.example.com".to_string()
            )]
        );
    }

    #[test]
    fn split_images_interleaves_plain_text() {
        let spans = vec![TextSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        let out = split_spans_by_images(spans);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_images_without_images_is_identity() {
        let spans = vec![TextSpan::plain("This is text with no images")];
        let out = split_spans_by_images(spans.clone());
        assert_eq!(out, spans);
    }

    #[test]
    fn split_image_only_text_emits_no_empty_plain() {
        let spans = vec![TextSpan::plain("![image](https://example.com/img.png)")];
        let out = split_spans_by_images(spans);
        assert_eq!(
            out,
            vec![TextSpan::image("image", "https://example.com/img.png")]
        );
    }

    #[test]
    fn split_images_handles_multiple_input_spans() {
        let spans = vec![
            TextSpan::plain("Text with ![img](https://example.com/1.png)"),
            TextSpan::plain("More ![text](https://example.com/2.png) here"),
        ];
        let out = split_spans_by_images(spans);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("Text with "),
                TextSpan::image("img", "https://example.com/1.png"),
                TextSpan::plain("More "),
                TextSpan::image("text", "https://example.com/2.png"),
                TextSpan::plain(" here"),
            ]
        );
    }

    #[test]
    fn split_images_skips_non_plain_spans() {
        let spans = vec![
            TextSpan::plain("regular text"),
            TextSpan::new("bold text", SpanKind::Bold),
            TextSpan::plain("![img](https://example.com/img.png)"),
        ];
        let out = split_spans_by_images(spans);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("regular text"),
                TextSpan::new("bold text", SpanKind::Bold),
                TextSpan::image("img", "https://example.com/img.png"),
            ]
        );
    }

    #[test]
    fn split_links_interleaves_plain_text() {
        let spans = vec![TextSpan::plain(
            "This is text with a [link](https://example.com) and [another](https://example.org/page)",
        )];
        let out = split_spans_by_links(spans);
        assert_eq!(
            out,
            vec![
                TextSpan::plain("This is text with a "),
                TextSpan::link("link", "https://example.com"),
                TextSpan::plain(" and "),
                TextSpan::link("another", "https://example.org/page"),
            ]
        );
    }

    #[test]
    fn split_links_without_links_is_identity() {
        let spans = vec![TextSpan::plain("This is text with no links")];
        let out = split_spans_by_links(spans.clone());
        assert_eq!(out, spans);
    }

    #[test]
    fn split_link_only_text_emits_no_empty_plain() {
        let spans = vec![TextSpan::plain("[link](https://example.com)")];
        let out = split_spans_by_links(spans);
        assert_eq!(out, vec![TextSpan::link("link", "https://example.com")]);
    }
}
