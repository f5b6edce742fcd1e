use lacquer_css::Prefix;

use crate::escape::html_escape;
use crate::spans::{Tokenizer, spans_to_html};

/// Render a complete code block.
///
/// The body is the tokenizer's classed HTML, or the escaped source when the
/// tokenizer does not support `language`. Either way it is wrapped as
/// `<div class="<prefix>-wrapper"><pre><code class="language-<lang> <prefix>-renderer">`.
pub fn highlight<T>(tokenizer: &T, prefix: &Prefix, language: &str, source: &str) -> String
where
    T: Tokenizer + ?Sized,
{
    let body = match tokenizer.tokenize(language, source) {
        Some(spans) => spans_to_html(source, &spans, prefix),
        None => {
            tracing::debug!(language, "no tokenizer for language, rendering plain text");
            html_escape(source)
        }
    };

    format!(
        "<div class=\"{prefix}-wrapper\"><pre><code class=\"language-{} {prefix}-renderer\">{body}</code></pre></div>",
        html_escape(language)
    )
}
