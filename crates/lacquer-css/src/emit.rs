//! Serializing resolved themes into a stylesheet of custom properties.

use lacquer_theme::ResolvedThemes;
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use crate::block::CssBlock;
use crate::names::{Prefix, ROOT_MODE, Selector, variable_name};

/// Errors that abort emission.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("invalid variable prefix `{prefix}`: {reason}")]
    #[diagnostic(
        code(lacquer::emit::invalid_prefix),
        help("use ASCII letters, digits, `-` or `_`, e.g. `shiki`")
    )]
    InvalidPrefix { prefix: String, reason: String },

    #[error("mode `{mode}` cannot be used as a CSS class name")]
    #[diagnostic(
        code(lacquer::emit::invalid_mode),
        help("mode names must be CSS identifiers, e.g. `dark` or `high-contrast`")
    )]
    InvalidModeName { mode: String },
}

/// Order of the selector blocks in the emitted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeOrder {
    /// Sorted by mode name (`dark`, `light`, `solarized`).
    #[default]
    Lexicographic,
    /// The root (`light`) block first, then the other modes sorted by name.
    ///
    /// `:root` and `.dark` have the same specificity, so when the class sits
    /// on the root element the block that comes later wins.
    RootFirst,
}

/// Knobs for [`emit_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub order: ModeOrder,
}

/// Emit the stylesheet for `resolved` with the default options.
///
/// The prefix is validated first; see [`Prefix::new`].
pub fn emit(resolved: &ResolvedThemes, prefix: &str) -> Result<String, EmitError> {
    let prefix = Prefix::new(prefix)?;
    emit_with(resolved, &prefix, &EmitOptions::default())
}

/// Emit the stylesheet for `resolved`.
///
/// One block per mode, one custom property per category the mode's theme
/// defines, in canonical category order. Blocks are separated by a blank
/// line. The output is a pure function of the inputs.
pub fn emit_with(
    resolved: &ResolvedThemes,
    prefix: &Prefix,
    options: &EmitOptions,
) -> Result<String, EmitError> {
    // BTreeMap iteration is already sorted by mode name
    let mut modes: Vec<_> = resolved.iter().collect();
    if options.order == ModeOrder::RootFirst {
        // Stable sort keeps the remaining modes in name order
        modes.sort_by_key(|(mode, _)| mode.as_str() != ROOT_MODE);
    }

    let mut blocks = Vec::with_capacity(modes.len());
    for (mode, theme) in modes {
        let selector = Selector::for_mode(mode)?;
        let block = theme
            .iter()
            .fold(CssBlock::new(selector.to_string()), |block, (category, color)| {
                block.property(variable_name(prefix, category), color.as_str())
            });

        tracing::debug!(
            mode = %mode,
            selector = %selector,
            properties = block.len(),
            "emitted block"
        );
        blocks.push(block.to_string());
    }

    Ok(blocks.join("\n"))
}
