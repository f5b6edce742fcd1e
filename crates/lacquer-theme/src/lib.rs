//! Theme support for lacquer.
//!
//! This crate provides:
//! - Token category definitions (the canonical list of colorable categories)
//! - Theme parsing from Helix-style TOML files
//! - Theme catalogs (built-in, directory-backed, in-memory, layered)
//! - Resolution of a mode -> theme mapping into concrete theme definitions
//!
//! # Example
//!
//! ```
//! use lacquer_theme::{BuiltinCatalog, ModeMapping, TokenCategory, resolve};
//!
//! let mut modes = ModeMapping::new();
//! modes.insert("light".to_string(), "github-light".to_string());
//! modes.insert("dark".to_string(), "github-dark".to_string());
//!
//! let resolved = resolve(&modes, &BuiltinCatalog).unwrap();
//! let light = &resolved["light"];
//! assert_eq!(light.get(TokenCategory::Background).unwrap().as_str(), "#ffffff");
//! ```

pub mod builtin;
pub mod catalog;
pub mod category;
pub mod parse;
pub mod resolve;
pub mod theme;

pub use builtin::BuiltinCatalog;
pub use catalog::{CatalogError, DirCatalog, Layered, MemoryCatalog, ThemeCatalog};
pub use category::{COUNT, KeyMatch, TokenCategory, category_for_capture};
pub use parse::{ThemeParseError, parse_theme};
pub use resolve::{ModeMapping, ResolveError, ResolvedThemes, resolve};
pub use theme::{Color, RawTheme, ThemeDefinition, Variant};
