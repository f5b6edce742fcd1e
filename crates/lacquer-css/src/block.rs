//! A single CSS rule made only of declarations.

use std::fmt;

/// One selector block.
///
/// Declarations render in insertion order, indented by two spaces:
///
/// ```text
/// :root {
///   --shiki-bg: #fff;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssBlock {
    selector: String,
    declarations: Vec<(String, String)>,
}

impl CssBlock {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((name.into(), value.into()));
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for CssBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (name, value) in &self.declarations {
            writeln!(f, "  {name}: {value};")?;
        }
        writeln!(f, "}}")
    }
}
