//! Theme catalogs: where theme identifiers are looked up.
//!
//! The resolver never cares where a theme comes from. Anything that can
//! answer "given an identifier, return its scope -> color mapping" is a
//! [`ThemeCatalog`]:
//!
//! | Catalog | Source |
//! |---------|--------|
//! | [`BuiltinCatalog`](crate::BuiltinCatalog) | TOML files compiled into the crate |
//! | [`DirCatalog`] | `*.toml` files in a directory, loaded once |
//! | [`MemoryCatalog`] | themes inserted programmatically |
//! | [`Layered`] | one catalog overriding another |
//!
//! Catalogs are read-only once built and must be safe to share between
//! threads.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use miette::Diagnostic;
use thiserror::Error;

use crate::parse::{ThemeParseError, parse_theme};
use crate::theme::RawTheme;

/// Provides themes by identifier.
pub trait ThemeCatalog: Send + Sync {
    /// Get a theme by identifier.
    ///
    /// Returns `None` if the catalog does not know the identifier.
    fn fetch(&self, id: &str) -> Option<RawTheme>;

    /// All identifiers this catalog knows, sorted.
    fn ids(&self) -> Vec<String>;
}

impl<T: ThemeCatalog + ?Sized> ThemeCatalog for &T {
    fn fetch(&self, id: &str) -> Option<RawTheme> {
        (**self).fetch(id)
    }

    fn ids(&self) -> Vec<String> {
        (**self).ids()
    }
}

impl<T: ThemeCatalog + ?Sized> ThemeCatalog for Box<T> {
    fn fetch(&self, id: &str) -> Option<RawTheme> {
        (**self).fetch(id)
    }

    fn ids(&self) -> Vec<String> {
        (**self).ids()
    }
}

/// A catalog of themes held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    themes: BTreeMap<String, RawTheme>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a theme.
    pub fn insert(&mut self, id: impl Into<String>, theme: RawTheme) -> &mut Self {
        self.themes.insert(id.into(), theme);
        self
    }

    /// Builder-style [`MemoryCatalog::insert`].
    pub fn with(mut self, id: impl Into<String>, theme: RawTheme) -> Self {
        self.insert(id, theme);
        self
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl ThemeCatalog for MemoryCatalog {
    fn fetch(&self, id: &str) -> Option<RawTheme> {
        self.themes.get(id).cloned()
    }

    fn ids(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }
}

/// Error loading a theme directory.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("failed to read theme directory `{path}`")]
    #[diagnostic(code(lacquer::catalog::read_dir))]
    ReadDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read theme file `{path}`")]
    #[diagnostic(code(lacquer::catalog::read_file))]
    ReadFile {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme file `{path}`")]
    #[diagnostic(code(lacquer::catalog::parse))]
    Parse {
        path: Utf8PathBuf,
        #[source]
        #[diagnostic_source]
        source: ThemeParseError,
    },
}

/// A catalog loaded from the `*.toml` files of a directory.
///
/// The identifier of each theme is its file stem (`nord.toml` -> `nord`).
/// Every file is read and parsed up front, so a broken file fails loudly at
/// load time instead of at lookup time.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    dir: Utf8PathBuf,
    themes: MemoryCatalog,
}

impl DirCatalog {
    /// Load all themes in `dir`.
    pub fn open(dir: impl AsRef<Utf8Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref().to_path_buf();
        let read_dir_err = |source| CatalogError::ReadDir {
            path: dir.clone(),
            source,
        };

        let mut themes = MemoryCatalog::new();
        for entry in fs::read_dir(&dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let Ok(path) = Utf8PathBuf::from_path_buf(entry.path()) else {
                tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 theme path");
                continue;
            };

            if path.extension() != Some("toml") {
                continue;
            }
            let Some(id) = path.file_stem() else { continue };

            let content = fs::read_to_string(&path).map_err(|source| CatalogError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let theme = parse_theme(&content).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

            tracing::debug!(id, path = %path, "loaded theme file");
            themes.insert(id, theme);
        }

        Ok(Self { dir, themes })
    }

    /// The directory this catalog was loaded from.
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }
}

impl ThemeCatalog for DirCatalog {
    fn fetch(&self, id: &str) -> Option<RawTheme> {
        self.themes.fetch(id)
    }

    fn ids(&self) -> Vec<String> {
        self.themes.ids()
    }
}

/// Two catalogs stacked: `upper` is consulted first, then `lower`.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    pub upper: A,
    pub lower: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(upper: A, lower: B) -> Self {
        Self { upper, lower }
    }
}

impl<A: ThemeCatalog, B: ThemeCatalog> ThemeCatalog for Layered<A, B> {
    fn fetch(&self, id: &str) -> Option<RawTheme> {
        self.upper.fetch(id).or_else(|| self.lower.fetch(id))
    }

    fn ids(&self) -> Vec<String> {
        let mut ids = self.upper.ids();
        ids.extend(self.lower.ids());
        ids.sort();
        ids.dedup();
        ids
    }
}
