//! Theme resolution: mode names -> theme identifiers -> theme definitions.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::ThemeCatalog;
use crate::theme::{ThemeDefinition, Variant};

/// Mode name (`"light"`, `"dark"`, ...) -> theme identifier, in the order
/// the configuration declared them.
pub type ModeMapping = IndexMap<String, String>;

/// Mode name -> resolved theme, sorted by mode name.
pub type ResolvedThemes = BTreeMap<String, ThemeDefinition>;

/// Errors that abort resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("no themes configured: the mode mapping is empty")]
    #[diagnostic(
        code(lacquer::resolve::empty),
        help("map at least one mode to a theme, e.g. `light = \"github-light\"`")
    )]
    EmptyModeMapping,

    #[error("unknown theme `{theme}` for mode `{mode}`")]
    #[diagnostic(code(lacquer::resolve::unknown_theme))]
    UnknownTheme {
        mode: String,
        theme: String,
        #[help]
        known: Option<String>,
    },
}

/// Resolve every mode's theme identifier through `catalog`.
///
/// Modes are visited in sorted order and the first failure aborts the whole
/// batch: either every mode resolves or nothing does. Categories a theme does
/// not define are left out of its definition.
pub fn resolve<C>(modes: &ModeMapping, catalog: &C) -> Result<ResolvedThemes, ResolveError>
where
    C: ThemeCatalog + ?Sized,
{
    if modes.is_empty() {
        return Err(ResolveError::EmptyModeMapping);
    }

    let mut sorted: Vec<(&String, &String)> = modes.iter().collect();
    sorted.sort();

    let mut resolved = ResolvedThemes::new();
    for (mode, theme_id) in sorted {
        let Some(raw) = catalog.fetch(theme_id) else {
            return Err(unknown_theme(mode, theme_id, catalog));
        };

        if let Some(declared) = raw.variant {
            if variant_mismatch(mode, declared) {
                tracing::warn!(
                    mode = %mode,
                    theme = %theme_id,
                    variant = ?declared,
                    "theme variant does not match the mode it is mapped to"
                );
            }
        }

        let definition = ThemeDefinition::from_raw(theme_id.as_str(), &raw);
        tracing::debug!(
            mode = %mode,
            theme = %theme_id,
            source = raw.source_url.as_deref().unwrap_or("-"),
            categories = definition.len(),
            "resolved theme"
        );
        resolved.insert(mode.clone(), definition);
    }

    Ok(resolved)
}

/// Whether a theme declared as `variant` looks wrong for `mode`.
///
/// Only the `light` and `dark` modes imply a variant.
fn variant_mismatch(mode: &str, variant: Variant) -> bool {
    matches!(
        (mode, variant),
        ("light", Variant::Dark) | ("dark", Variant::Light)
    )
}

fn unknown_theme<C>(mode: &str, theme: &str, catalog: &C) -> ResolveError
where
    C: ThemeCatalog + ?Sized,
{
    let ids = catalog.ids();
    let known = if ids.is_empty() {
        None
    } else {
        Some(format!("known themes: {}", ids.join(", ")))
    };

    ResolveError::UnknownTheme {
        mode: mode.to_string(),
        theme: theme.to_string(),
        known,
    }
}
