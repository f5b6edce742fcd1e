//! Built-in themes, embedded from `themes/*.toml` at compile time.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::catalog::ThemeCatalog;
use crate::parse::parse_theme;
use crate::theme::RawTheme;

/// Identifier and TOML source of every built-in theme.
const SOURCES: &[(&str, &str)] = &[
    (
        "catppuccin-latte",
        include_str!("../themes/catppuccin-latte.toml"),
    ),
    (
        "catppuccin-mocha",
        include_str!("../themes/catppuccin-mocha.toml"),
    ),
    ("dracula", include_str!("../themes/dracula.toml")),
    ("github-dark", include_str!("../themes/github-dark.toml")),
    ("github-light", include_str!("../themes/github-light.toml")),
    ("nord", include_str!("../themes/nord.toml")),
    ("one-dark", include_str!("../themes/one-dark.toml")),
    ("solarized-dark", include_str!("../themes/solarized-dark.toml")),
    (
        "solarized-light",
        include_str!("../themes/solarized-light.toml"),
    ),
];

/// Parsed built-in themes, shared by every `BuiltinCatalog`.
fn themes() -> &'static BTreeMap<&'static str, RawTheme> {
    static THEMES: OnceLock<BTreeMap<&'static str, RawTheme>> = OnceLock::new();
    THEMES.get_or_init(|| {
        SOURCES
            .iter()
            .filter_map(|&(id, source)| match parse_theme(source) {
                Ok(theme) => Some((id, theme)),
                Err(e) => {
                    tracing::error!(id, error = %e, "built-in theme failed to parse");
                    None
                }
            })
            .collect()
    })
}

/// The themes that ship with lacquer.
///
/// Parsing happens once per process, on first use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeCatalog for BuiltinCatalog {
    fn fetch(&self, id: &str) -> Option<RawTheme> {
        themes().get(id).cloned()
    }

    fn ids(&self) -> Vec<String> {
        themes().keys().map(|id| id.to_string()).collect()
    }
}
