//! Parsing Helix-style TOML theme files into [`RawTheme`]s.
//!
//! Supported shape:
//!
//! ```toml
//! name = "GitHub Light"
//! variant = "light"
//! source = "https://github.com/primer/github-vscode-theme"
//!
//! "ui.background" = { bg = "white" }
//! "ui.text" = "gray9"
//!
//! comment = "gray5"
//! "keyword.control" = { fg = "red5", modifiers = ["bold"] }
//!
//! [palette]
//! white = "#ffffff"
//! ```
//!
//! Style values are either a color string or a table with an `fg` key.
//! Colors are looked up in `[palette]` first and used verbatim otherwise.
//! Keys keep their file order. Values of other types (`rainbow = [..]`) are
//! ignored unless the key names a token category.

use std::collections::HashMap;

use miette::Diagnostic;
use thiserror::Error;

use crate::category::TokenCategory;
use crate::theme::{RawTheme, Variant};

/// Error parsing a theme file.
#[derive(Debug, Error, Diagnostic)]
pub enum ThemeParseError {
    #[error("theme is not valid TOML: {0}")]
    #[diagnostic(code(lacquer::theme::toml))]
    Toml(#[from] toml::de::Error),

    #[error("theme key `{key}` must be a string or a table")]
    #[diagnostic(
        code(lacquer::theme::value),
        help("use a color string, or a table with an `fg` key")
    )]
    InvalidValue { key: String },

    #[error("unknown theme variant `{0}`")]
    #[diagnostic(code(lacquer::theme::variant), help("expected `light` or `dark`"))]
    InvalidVariant(String),
}

/// Keys that describe the theme rather than color a scope.
const META_KEYS: &[&str] = &["name", "variant", "source", "palette", "inherits"];

/// Parse a theme from TOML content.
pub fn parse_theme(toml_str: &str) -> Result<RawTheme, ThemeParseError> {
    let table: toml::Table = toml_str.parse()?;

    let mut theme = RawTheme::new(
        table
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default(),
    );

    theme.variant = match table.get("variant").and_then(|v| v.as_str()) {
        None => None,
        Some("light") => Some(Variant::Light),
        Some("dark") => Some(Variant::Dark),
        Some(other) => return Err(ThemeParseError::InvalidVariant(other.to_string())),
    };

    theme.source_url = table
        .get("source")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    // Extract palette for color lookups
    let palette: HashMap<&str, &str> = table
        .get("palette")
        .and_then(|v| v.as_table())
        .map(|t| {
            t.iter()
                .filter_map(|(k, v)| v.as_str().map(|c| (k.as_str(), c)))
                .collect()
        })
        .unwrap_or_default();

    let resolve_color = |s: &str| -> String {
        palette.get(s).copied().unwrap_or(s).to_string()
    };

    for (key, value) in &table {
        if META_KEYS.contains(&key.as_str()) {
            continue;
        }

        // Helix keeps the editor background/foreground under `ui.*`
        let (key, field, from_ui) = match key.as_str() {
            "ui.background" => ("background", "bg", true),
            "ui.foreground" | "ui.text" => ("foreground", "fg", true),
            other => (other, "fg", false),
        };

        let color = match value {
            toml::Value::String(s) => Some(s.as_str()),
            toml::Value::Table(t) => t.get(field).and_then(|v| v.as_str()),
            _ if TokenCategory::from_key(key).is_none() => continue,
            _ => {
                return Err(ThemeParseError::InvalidValue {
                    key: key.to_string(),
                });
            }
        };

        // A table without the field (e.g. only modifiers) colors nothing
        let Some(color) = color else { continue };

        // Top-level `background = ".."` wins over `ui.background`
        if from_ui && theme.entries.contains_key(key) {
            continue;
        }
        theme.entries.insert(key.to_string(), resolve_color(color));
    }

    Ok(theme)
}
