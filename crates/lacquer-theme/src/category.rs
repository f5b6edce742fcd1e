//! Token category definitions - single source of truth.
//!
//! A theme assigns colors to a small, closed set of categories. Catalogs and
//! highlighters use a much larger vocabulary of names (`keyword.control`,
//! `comment.line`, `hljs-title.function_`, ...), so this module also owns the
//! mapping from that vocabulary down to the fixed set.
//!
//! # Layers
//!
//! 1. **Catalog keys** - whatever a theme source calls its scopes
//!    (e.g., `type`, `keyword.control.import`, `ui.background`)
//!
//! 2. **Token categories** - the ten slots below, in canonical order
//!
//! 3. **Variable slugs** - the suffix of the emitted custom property
//!    (e.g., `bg`, `token-keyword`)

/// The fixed set of color categories a theme can define.
///
/// The declaration order is the canonical order: it is the order in which
/// properties are emitted inside every selector block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    Background,
    Foreground,
    Comment,
    String,
    Keyword,
    Function,
    Class,
    Constant,
    Punctuation,
    Variable,
}

/// Total number of token categories.
pub const COUNT: usize = 10;

/// How strongly a catalog key claims a category.
///
/// Exact keys always beat aliases, regardless of where they appear in the
/// theme source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyMatch {
    /// A dotted sub-scope or an editor-specific synonym.
    Alias,
    /// The canonical name, the variable slug, or a well-known short name.
    Exact,
}

impl TokenCategory {
    /// All categories, in canonical order.
    pub const ALL: [TokenCategory; COUNT] = [
        TokenCategory::Background,
        TokenCategory::Foreground,
        TokenCategory::Comment,
        TokenCategory::String,
        TokenCategory::Keyword,
        TokenCategory::Function,
        TokenCategory::Class,
        TokenCategory::Constant,
        TokenCategory::Punctuation,
        TokenCategory::Variable,
    ];

    /// Position of this category in [`TokenCategory::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The canonical name (e.g., `"comment"`).
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Background => "background",
            TokenCategory::Foreground => "foreground",
            TokenCategory::Comment => "comment",
            TokenCategory::String => "string",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Function => "function",
            TokenCategory::Class => "class",
            TokenCategory::Constant => "constant",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Variable => "variable",
        }
    }

    /// The custom-property suffix for this category.
    ///
    /// Background and foreground use the short `bg`/`fg` forms; every other
    /// category is `token-<name>`. Consumers depend on these exact strings.
    pub const fn slug(self) -> &'static str {
        match self {
            TokenCategory::Background => "bg",
            TokenCategory::Foreground => "fg",
            TokenCategory::Comment => "token-comment",
            TokenCategory::String => "token-string",
            TokenCategory::Keyword => "token-keyword",
            TokenCategory::Function => "token-function",
            TokenCategory::Class => "token-class",
            TokenCategory::Constant => "token-constant",
            TokenCategory::Punctuation => "token-punctuation",
            TokenCategory::Variable => "token-variable",
        }
    }

    /// Whether this category colors source tokens (as opposed to the
    /// background/foreground of the whole block).
    pub const fn is_token(self) -> bool {
        !matches!(self, TokenCategory::Background | TokenCategory::Foreground)
    }

    /// Map a catalog key to a category.
    ///
    /// Returns the category together with the strength of the match, or
    /// `None` when the key names nothing we color.
    pub fn from_key(key: &str) -> Option<(TokenCategory, KeyMatch)> {
        let key = key.trim();

        let exact = match key {
            "background" | "bg" => Some(TokenCategory::Background),
            "foreground" | "fg" => Some(TokenCategory::Foreground),
            "comment" | "token-comment" => Some(TokenCategory::Comment),
            "string" | "token-string" => Some(TokenCategory::String),
            "keyword" | "token-keyword" => Some(TokenCategory::Keyword),
            "function" | "token-function" => Some(TokenCategory::Function),
            "class" | "type" | "token-class" => Some(TokenCategory::Class),
            "constant" | "token-constant" => Some(TokenCategory::Constant),
            "punctuation" | "token-punctuation" => Some(TokenCategory::Punctuation),
            "variable" | "token-variable" => Some(TokenCategory::Variable),
            _ => None,
        };
        if let Some(category) = exact {
            return Some((category, KeyMatch::Exact));
        }

        let alias = match key {
            // nvim-treesitter / helix names that are really keywords
            "include" | "conditional" | "repeat" | "exception" | "storageclass" | "preproc" => {
                Some(TokenCategory::Keyword)
            }
            "method" | "built_in" => Some(TokenCategory::Function),
            "constructor" | "namespace" | "module" => Some(TokenCategory::Class),
            "number" | "boolean" | "float" | "literal" | "character" => {
                Some(TokenCategory::Constant)
            }
            "property" | "parameter" | "params" | "attr" => Some(TokenCategory::Variable),
            "delimiter" => Some(TokenCategory::Punctuation),
            // highlight.js dotted titles: `title.function_`, `title.class_`
            "title" | "title.function_" | "title.function_.invoke__" => {
                Some(TokenCategory::Function)
            }
            "title.class_" | "title.class_.inherited__" => Some(TokenCategory::Class),
            _ => None,
        };
        if let Some(category) = alias {
            return Some((category, KeyMatch::Alias));
        }

        // Dotted sub-scopes inherit from their root: `keyword.control.import` -> keyword
        let (root, _) = key.split_once('.')?;
        match Self::from_key(root)? {
            (TokenCategory::Background | TokenCategory::Foreground, _) => None,
            (category, _) => Some((category, KeyMatch::Alias)),
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a highlighter capture or class name to the token category it colors.
///
/// Accepts tree-sitter style captures (`@keyword.function`) and highlight.js
/// class names (`hljs-comment`). Never returns background or foreground.
///
/// # Example
/// ```
/// use lacquer_theme::{TokenCategory, category_for_capture};
///
/// assert_eq!(category_for_capture("@keyword.function"), Some(TokenCategory::Keyword));
/// assert_eq!(category_for_capture("hljs-comment"), Some(TokenCategory::Comment));
/// assert_eq!(category_for_capture("background"), None);
/// ```
pub fn category_for_capture(capture: &str) -> Option<TokenCategory> {
    let capture = capture.strip_prefix('@').unwrap_or(capture);
    let capture = capture.strip_prefix("hljs-").unwrap_or(capture);

    TokenCategory::from_key(capture)
        .map(|(category, _)| category)
        .filter(|category| category.is_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, category) in TokenCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_slugs() {
        let slugs: Vec<&str> = TokenCategory::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(
            slugs,
            [
                "bg",
                "fg",
                "token-comment",
                "token-string",
                "token-keyword",
                "token-function",
                "token-class",
                "token-constant",
                "token-punctuation",
                "token-variable",
            ]
        );
    }

    #[test]
    fn test_exact_keys() {
        for category in TokenCategory::ALL {
            assert_eq!(
                TokenCategory::from_key(category.name()),
                Some((category, KeyMatch::Exact))
            );
            assert_eq!(
                TokenCategory::from_key(category.slug()),
                Some((category, KeyMatch::Exact))
            );
        }
        assert_eq!(
            TokenCategory::from_key("type"),
            Some((TokenCategory::Class, KeyMatch::Exact))
        );
    }

    #[test]
    fn test_dotted_keys_are_aliases() {
        assert_eq!(
            TokenCategory::from_key("keyword.control.import"),
            Some((TokenCategory::Keyword, KeyMatch::Alias))
        );
        assert_eq!(
            TokenCategory::from_key("comment.line"),
            Some((TokenCategory::Comment, KeyMatch::Alias))
        );
        assert_eq!(
            TokenCategory::from_key("type.builtin"),
            Some((TokenCategory::Class, KeyMatch::Alias))
        );
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(TokenCategory::from_key("ui.cursor"), None);
        assert_eq!(TokenCategory::from_key("markup.heading"), None);
        assert_eq!(TokenCategory::from_key("background.alt"), None);
        assert_eq!(TokenCategory::from_key(""), None);
    }

    #[test]
    fn test_capture_mapping() {
        assert_eq!(
            category_for_capture("@string.escape"),
            Some(TokenCategory::String)
        );
        assert_eq!(
            category_for_capture("hljs-title.function_"),
            Some(TokenCategory::Function)
        );
        assert_eq!(
            category_for_capture("hljs-title.class_"),
            Some(TokenCategory::Class)
        );
        assert_eq!(category_for_capture("number"), Some(TokenCategory::Constant));
        assert_eq!(category_for_capture("fg"), None);
        assert_eq!(category_for_capture("spell"), None);
    }
}
