//! Compile syntax-highlighting themes into CSS custom properties.
//!
//! A [`Config`] maps display modes (`light`, `dark`, ...) to theme names.
//! [`generate`] resolves each theme through a catalog, emits one block of
//! `--<prefix>-*` variables per mode, and atomically writes the stylesheet:
//!
//! ```css
//! .dark {
//!   --shiki-bg: #24292e;
//!   ...
//! }
//!
//! :root {
//!   --shiki-bg: #ffffff;
//!   ...
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use lacquer::{BuiltinCatalog, Config, render};
//!
//! let css = render(&Config::default(), &BuiltinCatalog).unwrap();
//! assert!(css.starts_with(".dark {\n  --shiki-bg: "));
//! assert!(css.contains(":root {\n  --shiki-bg: #ffffff;\n"));
//! ```

mod compile;
mod config;
mod error;
mod write;

pub use compile::{Generated, catalog_for, generate, render};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use write::{WriteError, write_atomic};

pub use lacquer_css::{EmitError, EmitOptions, ModeOrder, Prefix, color_tokens};
pub use lacquer_theme::{
    BuiltinCatalog, CatalogError, DirCatalog, Layered, MemoryCatalog, ModeMapping, RawTheme,
    ResolveError, ThemeCatalog, TokenCategory,
};

pub use lacquer_css as css;
pub use lacquer_markup as markup;
pub use lacquer_theme as theme;
