//! HTML for code blocks colored by lacquer's CSS variables.
//!
//! Tokens are emitted as `<span class="<prefix>-token-...">`, and the
//! generated stylesheet plus a few utility rules pointing those classes at
//! `var(--<prefix>-token-...)` is all a page needs. The tokenizer itself is
//! pluggable through [`Tokenizer`].

mod code_block;
mod escape;
mod spans;

pub use code_block::highlight;
pub use escape::html_escape;
pub use spans::{PlainText, Span, Tokenizer, spans_to_html, token_class};
