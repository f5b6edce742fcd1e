//! CSS custom-property emission for lacquer.
//!
//! Turns a set of resolved themes (one per mode) into a stylesheet that
//! declares `--<prefix>-bg`, `--<prefix>-fg` and `--<prefix>-token-*`
//! variables. The `light` mode is declared on `:root`; every other mode on a
//! class named after it, so toggling `.dark` on an ancestor switches palettes.
//!
//! # Example
//!
//! ```
//! use lacquer_css::emit;
//! use lacquer_theme::{Color, ResolvedThemes, ThemeDefinition, TokenCategory};
//!
//! let mut resolved = ResolvedThemes::new();
//! resolved.insert(
//!     "light".to_string(),
//!     ThemeDefinition::new("plain")
//!         .with(TokenCategory::Background, Color::new("#fff").unwrap())
//!         .with(TokenCategory::Foreground, Color::new("#000").unwrap()),
//! );
//!
//! let css = emit(&resolved, "shiki").unwrap();
//! assert_eq!(css, ":root {\n  --shiki-bg: #fff;\n  --shiki-fg: #000;\n}\n");
//! ```

mod block;
mod emit;
mod framework;
mod names;

pub use block::CssBlock;
pub use emit::{EmitError, EmitOptions, ModeOrder, emit, emit_with};
pub use framework::color_tokens;
pub use names::{Prefix, ROOT_MODE, Selector, var_ref, variable_name};
