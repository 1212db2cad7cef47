//! Error handling types for the parser
//!
//! Every failure aborts the whole parse. Parser errors carry the line and
//! column of the tag or text run that triggered them.

use std::{error::Error, fmt};

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, counted in chars)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    IO(IOError),
    Format(FormatError),
    Security(SecurityError),
    Semantic(SemanticError),
    Syntax(SyntaxError),
}

/// Malformed markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Malformed `name="value"` sequence inside a tag
    AttributeFormat(String),
    /// Opening tag does not follow the tag grammar
    InvalidTagFormat(String),
    /// Input ended (or another closing tag appeared) before the named tag closed
    UnclosedTag(String),
}

/// Document shape violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// The top-level node is not a single `<speak>` element
    InvalidRoot(String),
}

/// Security-related errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// Exceeded maximum depth of element nesting
    MaxDepthExceeded,
    /// Exceeded maximum input size
    MaxSizeExceeded,
}

/// Output formatting errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    InvalidIndentation(String),
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolves a byte offset into `input` to a line and column.
    ///
    /// Offsets past the end or inside a multi-byte char are clamped back to
    /// the nearest char boundary.
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = input.get(..offset).unwrap_or_default();
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before.get(line_start..).unwrap_or_default().chars().count() + 1;
        Self { line, column }
    }

    pub fn create_error(self, kind: ParseErrorKind, context: &str) -> ParseError {
        ParseError::new(kind)
            .with_location(self.line, self.column)
            .with_context(context)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            ParseErrorKind::IO(err) => err.to_string(),
            ParseErrorKind::Format(err) => err.to_string(),
            ParseErrorKind::Security(err) => err.to_string(),
            ParseErrorKind::Semantic(err) => err.to_string(),
            ParseErrorKind::Syntax(err) => err.to_string(),
        };

        if let Some(loc) = &self.location {
            write!(f, "at {}: {}", loc, base_error)?;
        } else {
            write!(f, "Error: {}", base_error)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeFormat(msg) => write!(f, "Invalid attribute format: {}", msg),
            Self::InvalidTagFormat(tag) => write!(f, "Invalid tag format: '{}'", tag),
            Self::UnclosedTag(name) => write!(f, "Unclosed tag <{}>", name),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRoot(msg) => write!(f, "Invalid root: {}", msg),
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "Maximum nesting depth exceeded"),
            Self::MaxSizeExceeded => write!(f, "Maximum input size exceeded"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndentation(msg) => write!(f, "Invalid indentation: {}", msg),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
