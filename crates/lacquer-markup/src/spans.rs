//! Turning tokenizer spans into classed HTML.

use lacquer_css::Prefix;
use lacquer_theme::{TokenCategory, category_for_capture};

use crate::escape::html_escape;

/// A highlighted byte range reported by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    /// Capture or class name, e.g. `keyword.function` or `hljs-string`.
    pub capture: String,
}

impl Span {
    pub fn new(start: u32, end: u32, capture: impl Into<String>) -> Self {
        Self {
            start,
            end,
            capture: capture.into(),
        }
    }
}

/// Something that can split source code into highlighted spans.
pub trait Tokenizer {
    /// Spans for `source` in `language`, or `None` if the language is not
    /// supported.
    fn tokenize(&self, language: &str, source: &str) -> Option<Vec<Span>>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str, &str) -> Option<Vec<Span>>,
{
    fn tokenize(&self, language: &str, source: &str) -> Option<Vec<Span>> {
        self(language, source)
    }
}

/// A tokenizer that supports no language, so everything renders as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Tokenizer for PlainText {
    fn tokenize(&self, _language: &str, _source: &str) -> Option<Vec<Span>> {
        None
    }
}

/// The class a token of `category` carries, e.g. `shiki-token-keyword`.
pub fn token_class(prefix: &Prefix, category: TokenCategory) -> String {
    format!("{prefix}-{}", category.slug())
}

#[derive(Debug)]
struct ClassedSpan {
    start: usize,
    end: usize,
    category: TokenCategory,
}

/// Map captures to categories, drop what cannot be rendered, then merge
/// adjacent spans of the same category.
///
/// The result is sorted and non-overlapping. When spans overlap, the one
/// starting first wins, and at equal starts the longer one.
fn normalize_and_coalesce(source: &str, spans: &[Span]) -> Vec<ClassedSpan> {
    let mut classed: Vec<ClassedSpan> = spans
        .iter()
        .filter_map(|span| {
            let (start, end) = (span.start as usize, span.end as usize);
            if start >= end
                || end > source.len()
                || !source.is_char_boundary(start)
                || !source.is_char_boundary(end)
            {
                return None;
            }
            category_for_capture(&span.capture).map(|category| ClassedSpan {
                start,
                end,
                category,
            })
        })
        .collect();

    classed.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end)));

    let mut coalesced: Vec<ClassedSpan> = Vec::with_capacity(classed.len());
    for span in classed {
        if let Some(last) = coalesced.last_mut() {
            if span.start < last.end {
                continue;
            }
            if span.start == last.end && span.category == last.category {
                last.end = span.end;
                continue;
            }
        }
        coalesced.push(span);
    }

    coalesced
}

/// Render `source` as HTML, wrapping each recognized span in
/// `<span class="<prefix>-token-...">`.
///
/// Spans with an unknown capture, an empty or out-of-range extent, or a
/// boundary inside a UTF-8 sequence are ignored. All text is escaped.
pub fn spans_to_html(source: &str, spans: &[Span], prefix: &Prefix) -> String {
    let spans = normalize_and_coalesce(source, spans);

    let mut html = String::with_capacity(source.len() * 2);
    let mut pos = 0;
    for span in spans {
        html.push_str(&html_escape(&source[pos..span.start]));
        html.push_str("<span class=\"");
        html.push_str(&token_class(prefix, span.category));
        html.push_str("\">");
        html.push_str(&html_escape(&source[span.start..span.end]));
        html.push_str("</span>");
        pos = span.end;
    }
    html.push_str(&html_escape(&source[pos..]));

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prefix() -> Prefix {
        Prefix::new("shiki").unwrap()
    }

    #[test]
    fn test_simple_highlight() {
        let spans = vec![Span::new(0, 2, "keyword"), Span::new(3, 7, "function")];
        assert_eq!(
            spans_to_html("fn main", &spans, &prefix()),
            "<span class=\"shiki-token-keyword\">fn</span> \
             <span class=\"shiki-token-function\">main</span>"
        );
    }

    #[test]
    fn test_adjacent_same_category_coalesce() {
        let spans = vec![
            Span::new(0, 3, "keyword"),
            Span::new(3, 7, "keyword.function"),
        ];
        assert_eq!(
            spans_to_html("keyword", &spans, &prefix()),
            "<span class=\"shiki-token-keyword\">keyword</span>"
        );
    }

    #[test]
    fn test_keyword_variants_share_class() {
        let spans = vec![
            Span::new(0, 4, "include"),
            Span::new(5, 8, "@keyword"),
            Span::new(9, 15, "hljs-keyword"),
        ];
        let html = spans_to_html("with use import", &spans, &prefix());
        assert!(html.contains("<span class=\"shiki-token-keyword\">with</span>"));
        assert!(html.contains("<span class=\"shiki-token-keyword\">use</span>"));
        assert!(html.contains("<span class=\"shiki-token-keyword\">import</span>"));
    }

    #[test]
    fn test_overlapping_spans_dedupe() {
        let spans = vec![
            Span::new(0, 10, "property"),
            Span::new(0, 10, "variable"),
            Span::new(3, 10, "string"),
        ];
        let html = spans_to_html("apiVersion", &spans, &prefix());
        assert_eq!(html, "<span class=\"shiki-token-variable\">apiVersion</span>");
    }

    #[test]
    fn test_unmapped_and_invalid_spans_dropped() {
        let spans = vec![
            Span::new(0, 5, "spell"),
            Span::new(6, 99, "comment"),
            Span::new(4, 4, "comment"),
            Span::new(6, 5, "comment"),
        ];
        assert_eq!(spans_to_html("hello world", &spans, &prefix()), "hello world");
    }

    #[test]
    fn test_span_inside_multibyte_char_dropped() {
        // 'é' is two bytes; offset 2 splits it
        let spans = vec![Span::new(0, 2, "string")];
        assert_eq!(spans_to_html("hé", &spans, &prefix()), "hé");
    }

    #[test]
    fn test_text_is_escaped() {
        let spans = vec![Span::new(0, 6, "string")];
        assert_eq!(
            spans_to_html("\"<b>&\" + x", &spans, &prefix()),
            "<span class=\"shiki-token-string\">&quot;&lt;b&gt;&amp;&quot;</span> + x"
        );
    }

    #[test]
    fn test_token_class() {
        assert_eq!(
            token_class(&prefix(), TokenCategory::Comment),
            "shiki-token-comment"
        );
    }

    #[test]
    fn test_closure_tokenizer() {
        let tokenizer = |language: &str, _source: &str| {
            (language == "rust").then(|| vec![Span::new(0, 2, "keyword")])
        };
        assert!(tokenizer.tokenize("rust", "fn").is_some());
        assert!(tokenizer.tokenize("cobol", "fn").is_none());
        assert!(PlainText.tokenize("rust", "fn").is_none());
    }
}
