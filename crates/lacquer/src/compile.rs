//! The compile pipeline: configuration in, stylesheet out.

use camino::Utf8PathBuf;
use lacquer_css::{Prefix, emit_with};
use lacquer_theme::{BuiltinCatalog, DirCatalog, Layered, ThemeCatalog, resolve};

use crate::config::Config;
use crate::error::Error;
use crate::write::write_atomic;

/// What [`generate`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: Utf8PathBuf,
    pub bytes: usize,
    /// Mode names, sorted.
    pub modes: Vec<String>,
}

/// The catalog a configuration asks for: themes from `theme_dir` shadowing
/// the built-in ones, or just the built-ins.
pub fn catalog_for(config: &Config) -> Result<Box<dyn ThemeCatalog>, Error> {
    match &config.theme_dir {
        Some(dir) => {
            let local = DirCatalog::open(dir)?;
            tracing::debug!(
                dir = %local.dir(),
                themes = local.ids().len(),
                "loaded theme directory"
            );
            Ok(Box::new(Layered::new(local, BuiltinCatalog)))
        }
        None => Ok(Box::new(BuiltinCatalog)),
    }
}

/// Resolve and emit the stylesheet without touching the filesystem.
pub fn render<C>(config: &Config, catalog: &C) -> Result<String, Error>
where
    C: ThemeCatalog + ?Sized,
{
    let prefix = Prefix::new(config.var_prefix.as_str())?;
    let resolved = resolve(&config.themes, catalog)?;
    Ok(emit_with(&resolved, &prefix, &config.emit_options())?)
}

/// Render the stylesheet and atomically write it to `config.output`.
///
/// Nothing is written unless every mode resolves and emits.
pub fn generate<C>(config: &Config, catalog: &C) -> Result<Generated, Error>
where
    C: ThemeCatalog + ?Sized,
{
    let css = render(config, catalog)?;
    write_atomic(&config.output, &css)?;

    let mut modes: Vec<String> = config.themes.keys().cloned().collect();
    modes.sort();

    tracing::info!(
        path = %config.output,
        modes = modes.len(),
        bytes = css.len(),
        "wrote theme stylesheet"
    );

    Ok(Generated {
        path: config.output.clone(),
        bytes: css.len(),
        modes,
    })
}
