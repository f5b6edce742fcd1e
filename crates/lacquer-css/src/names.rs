//! Variable prefixes, custom-property names, and selectors.

use lacquer_theme::TokenCategory;

use crate::EmitError;

/// The mode that owns the root scope.
pub const ROOT_MODE: &str = "light";

/// A validated custom-property prefix (the `shiki` in `--shiki-bg`).
///
/// Non-empty, and made only of ASCII letters, digits, `-`, `_`, or
/// non-ASCII code points, which is what a custom-property name allows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, EmitError> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(EmitError::InvalidPrefix {
                prefix,
                reason: "it is empty".to_string(),
            });
        }
        if let Some(c) = prefix.chars().find(|&c| !is_name_char(c)) {
            return Err(EmitError::InvalidPrefix {
                reason: format!("{c:?} is not allowed in a custom property name"),
                prefix,
            });
        }

        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// Whether `s` is a CSS identifier that needs no escaping.
fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some('-') => match chars.next() {
            Some(c) => c,
            None => return false,
        },
        Some(c) => c,
        None => return false,
    };
    let starts_ok = first == '-' || first == '_' || first.is_ascii_alphabetic() || !first.is_ascii();
    starts_ok && chars.all(is_name_char)
}

/// The custom property for a category, e.g. `--shiki-token-comment`.
pub fn variable_name(prefix: &Prefix, category: TokenCategory) -> String {
    format!("--{prefix}-{}", category.slug())
}

/// A `var()` reference to a category's property, with an optional fallback.
///
/// # Example
/// ```
/// use lacquer_css::{Prefix, var_ref};
/// use lacquer_theme::TokenCategory;
///
/// let prefix = Prefix::new("shiki").unwrap();
/// assert_eq!(var_ref(&prefix, TokenCategory::Background, None), "var(--shiki-bg)");
/// assert_eq!(
///     var_ref(&prefix, TokenCategory::Comment, Some("gray")),
///     "var(--shiki-token-comment, gray)"
/// );
/// ```
pub fn var_ref(prefix: &Prefix, category: TokenCategory, fallback: Option<&str>) -> String {
    let name = variable_name(prefix, category);
    match fallback {
        Some(fallback) => format!("var({name}, {fallback})"),
        None => format!("var({name})"),
    }
}

/// Where a mode's variables are declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `:root`
    Root,
    /// `.<mode>`
    Class(String),
}

impl Selector {
    /// `light` maps to the root scope; every other mode to a class named after it.
    pub fn for_mode(mode: &str) -> Result<Self, EmitError> {
        if mode == ROOT_MODE {
            return Ok(Selector::Root);
        }
        if !is_ident(mode) {
            return Err(EmitError::InvalidModeName {
                mode: mode.to_string(),
            });
        }
        Ok(Selector::Class(mode.to_string()))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Root => f.write_str(":root"),
            Selector::Class(name) => write!(f, ".{name}"),
        }
    }
}
