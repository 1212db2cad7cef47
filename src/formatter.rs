mod outline;
mod text;

pub use self::{
    outline::OutlineFormatter,
    text::{node_to_text, TextFormatter},
};
use crate::{
    error::{FormatError, ParseError, ParseErrorKind, Result},
    parser::Node,
};

/// Largest indentation step accepted by [`FormatConfig`]
pub const MAX_INDENT_SPACES: usize = 8;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for each nesting level
    pub indent_spaces: usize,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

impl FormatConfig {
    pub fn validate(&self) -> Result<()> {
        if self.indent_spaces > MAX_INDENT_SPACES {
            return Err(ParseError::new(ParseErrorKind::Format(
                FormatError::InvalidIndentation(format!(
                    "Indentation of {} spaces exceeds maximum allowed ({})",
                    self.indent_spaces, MAX_INDENT_SPACES
                )),
            ))
            .with_context("Invalid formatting configuration"));
        }
        Ok(())
    }
}

/// Trait for rendering an SSML tree as a string
pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> Result<String>;
}
