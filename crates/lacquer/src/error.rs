use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::write::WriteError;
use lacquer_css::EmitError;
use lacquer_theme::{CatalogError, ResolveError};

/// Anything that can stop a compile. Each variant keeps the diagnostic of
/// the stage that failed.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Write(#[from] WriteError),
}
