//! Color map for utility-CSS framework plugins.

use lacquer_theme::TokenCategory;
use serde_json::{Map, Value};

use crate::names::{Prefix, var_ref};

/// The color map a utility-CSS plugin registers, keyed by slug and nested
/// under the prefix:
///
/// ```json
/// { "shiki": { "bg": "var(--shiki-bg)", "token-comment": "var(--shiki-token-comment)" } }
/// ```
///
/// Every category is present regardless of which themes define it; a missing
/// variable falls back to the property's initial value in the browser.
pub fn color_tokens(prefix: &Prefix) -> Value {
    let colors: Map<String, Value> = TokenCategory::ALL
        .iter()
        .map(|&category| {
            (
                category.slug().to_string(),
                Value::String(var_ref(prefix, category, None)),
            )
        })
        .collect();

    let mut root = Map::new();
    root.insert(prefix.as_str().to_string(), Value::Object(colors));
    Value::Object(root)
}
