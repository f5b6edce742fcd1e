//! Colors, raw catalog themes, and resolved theme definitions.

use indexmap::IndexMap;

use crate::category::{COUNT, KeyMatch, TokenCategory};

/// An opaque CSS color value (`#fff`, `rgb(0 0 0)`, `rebeccapurple`, ...).
///
/// The value is never parsed. It is not blank and contains none of `;`, `{`
/// or `}`, so it cannot end the declaration it is written into. Surrounding
/// whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Create a color, returning `None` for blank input or input that would
    /// break out of a CSS declaration.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();
        if value.is_empty() || value.contains([';', '{', '}']) {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    /// The color as written in the theme source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a theme is designed for a light or dark background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Light,
    Dark,
}

/// A theme as a catalog provides it: scope names in the catalog's own
/// vocabulary, mapped to color strings.
///
/// Entries keep the order of the theme source so alias precedence is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTheme {
    /// Human-readable name (e.g., "GitHub Light"). May be empty.
    pub name: String,
    /// Declared variant, if the source says.
    pub variant: Option<Variant>,
    /// Where the theme came from, if known.
    pub source_url: Option<String>,
    /// Catalog key -> color string.
    pub entries: IndexMap<String, String>,
}

impl RawTheme {
    /// Create an empty raw theme with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style entry insertion.
    pub fn entry(mut self, key: impl Into<String>, color: impl Into<String>) -> Self {
        self.entries.insert(key.into(), color.into());
        self
    }
}

/// A resolved theme: one optional color per [`TokenCategory`].
///
/// Identity is the theme identifier it was resolved from. Categories the
/// source did not define stay empty; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDefinition {
    id: String,
    colors: [Option<Color>; COUNT],
}

impl ThemeDefinition {
    /// Create an empty definition for a theme identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            colors: Default::default(),
        }
    }

    /// Re-key a raw catalog theme into the fixed category set.
    ///
    /// Exact keys win over aliases; among aliases, the first one in source
    /// order wins. Keys that name no category and blank colors are dropped.
    pub fn from_raw(id: impl Into<String>, raw: &RawTheme) -> Self {
        let id = id.into();
        let mut definition = Self::new(id);
        let mut strength: [Option<KeyMatch>; COUNT] = [None; COUNT];

        for (key, value) in &raw.entries {
            let Some((category, matched)) = TokenCategory::from_key(key) else {
                continue;
            };
            let Some(color) = Color::new(value) else {
                tracing::debug!(theme = %definition.id, key = %key, "skipping blank or unusable color");
                continue;
            };

            let slot = &mut strength[category.index()];
            if slot.is_some_and(|existing| existing >= matched) {
                continue;
            }
            *slot = Some(matched);
            definition.colors[category.index()] = Some(color);
        }

        definition
    }

    /// Builder-style setter.
    pub fn with(mut self, category: TokenCategory, color: Color) -> Self {
        self.set(category, color);
        self
    }

    /// Set the color for a category.
    pub fn set(&mut self, category: TokenCategory, color: Color) {
        self.colors[category.index()] = Some(color);
    }

    /// The theme identifier (e.g., `"github-light"`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The color for a category, if the theme defines one.
    pub fn get(&self, category: TokenCategory) -> Option<&Color> {
        self.colors[category.index()].as_ref()
    }

    /// Defined categories and their colors, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &Color)> + '_ {
        TokenCategory::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|color| (category, color)))
    }

    /// Number of defined categories.
    pub fn len(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no category is defined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
