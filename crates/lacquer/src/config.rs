//! Compiler configuration.

use camino::{Utf8Path, Utf8PathBuf};
use lacquer_css::{EmitOptions, ModeOrder};
use lacquer_theme::ModeMapping;
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// Where the stylesheet goes, how its variables are named, and which theme
/// each mode uses.
///
/// Every field has a default, so an empty document is a valid configuration:
///
/// ```toml
/// output = "public/css/shiki-theme.css"
/// var_prefix = "shiki"
/// mode_order = "lexicographic"   # or "root-first"
/// theme_dir = "themes"           # optional, searched before the built-ins
///
/// [themes]
/// light = "github-light"
/// dark = "github-dark"
/// ```
///
/// Relative paths are taken relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: Utf8PathBuf,
    pub var_prefix: String,
    pub themes: ModeMapping,
    pub mode_order: ModeOrder,
    pub theme_dir: Option<Utf8PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let mut themes = ModeMapping::new();
        themes.insert("light".to_string(), "github-light".to_string());
        themes.insert("dark".to_string(), "github-dark".to_string());

        Self {
            output: Utf8PathBuf::from("public/css/shiki-theme.css"),
            var_prefix: "shiki".to_string(),
            themes,
            mode_order: ModeOrder::default(),
            theme_dir: None,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read configuration")]
    #[diagnostic(code(lacquer::config::read))]
    Read(#[from] std::io::Error),

    #[error("invalid configuration in {origin}")]
    #[diagnostic(code(lacquer::config::parse))]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Self::parse(input, "<string>")
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs_err::read_to_string(path)?;
        Self::parse(&input, path.as_str())
    }

    fn parse(input: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            order: self.mode_order,
        }
    }
}
