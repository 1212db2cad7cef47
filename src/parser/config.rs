use std::fmt;

use crate::error::{ParseError, ParseErrorKind, Result, SecurityError};

/// Maximum element nesting depth (128); real SSML rarely goes past a handful
pub const DEFAULT_MAX_DEPTH: usize = 128;
/// Maximum input size (1MB) to prevent memory exhaustion attacks
pub const DEFAULT_MAX_SIZE: usize = 1_048_576; // 1MB

/// Configuration for parser limits
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum nesting depth for elements
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {} }}",
            self.max_depth, self.max_size
        )
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(
                ParseError::new(ParseErrorKind::Security(SecurityError::MaxSizeExceeded))
                    .with_context(format!(
                        "Input size ({} bytes) exceeds maximum allowed ({})",
                        size, self.max_size
                    )),
            );
        }
        Ok(())
    }
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(ParseError::new(ParseErrorKind::Security(
                SecurityError::MaxDepthExceeded,
            )));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        if self.current_depth > 0 {
            self.current_depth -= 1;
        }
    }
}
