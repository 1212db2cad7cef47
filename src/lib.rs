//! ssmlparse: A small parser for SSML (Speech Synthesis Markup Language)
//!
//! This crate provides functionality to:
//! - Parse a constrained SSML subset into a tree of elements and text
//! - Validate that a document has a single `<speak>` root
//! - Decode the `&lt;`, `&gt;` and `&amp;` entities in text
//! - Project a tree to the plain text it would speak
//!
//! # Examples
//! ```
//! use ssmlparse::{parse_ssml, Node, Result};
//!
//! fn example() -> Result<()> {
//!     let doc = parse_ssml("<speak>Hello <emphasis>world</emphasis>!</speak>")?;
//!     assert_eq!(doc.root().children.len(), 3);
//!     assert_eq!(doc.root().children[0], Node::text("Hello "));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod entities;
pub mod enums;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use entities::{unescape_text_nodes, unescape_xml_chars};
pub use error::{ParseError, ParseErrorKind, Result, SemanticError, SyntaxError};
pub use formatter::node_to_text;
pub use parser::{Attribute, Document, Element, Node, ParserConfig, SsmlParser};

/// Parses an SSML string into a validated, entity-decoded document
pub fn parse_ssml(input: &str) -> Result<Document> {
    SsmlParser::new(input).parse()
}

/// Parses an SSML string with custom limits
pub fn parse_ssml_with_config(input: &str, config: ParserConfig) -> Result<Document> {
    SsmlParser::new(input).with_config(config).parse()
}

/// Parses an SSML string and returns the text it speaks
///
/// Entities are decoded exactly once: the tree is projected before any
/// decoding pass has run on it.
pub fn ssml_to_text(input: &str) -> Result<String> {
    let document = SsmlParser::new(input).parse_raw()?;
    utils::format_text(&document.into())
}

#[instrument]
pub fn parse_file(path: &str) -> Result<Document> {
    debug!("Starting to parse file: {}", path);

    let content = utils::read_file(path)?;

    info!("File read successfully ({} bytes)", content.len());

    let result = parse_ssml(&content);

    debug!("Parsing completed");
    result
}
