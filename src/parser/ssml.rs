// parser/ssml.rs
//! SSML parser implementation.
//!
//! A recursive descent parser over string slices. Each step looks at the head
//! of the remaining input and yields either a text run, a complete element
//! (with all of its children), or the closing tag of the element currently
//! collecting children. Every slice handed around is a suffix of the trimmed
//! input, which is how error locations are recovered.

use tracing::{debug, trace};

use super::{
    attributes::{parse_attributes, split_name},
    config::{ParserConfig, ParsingContext},
    node::{Attribute, Document, Element, Node, ROOT_TAG},
};
use crate::{
    entities::unescape_element,
    error::{Location, ParseError, ParseErrorKind, Result, SemanticError, SyntaxError},
};

/// Longest slice of input quoted back in error messages
const SNIPPET_CHARS: usize = 32;

/// Parser for SSML documents
#[derive(Debug)]
pub struct SsmlParser<'a> {
    /// Untouched input, used to resolve error locations
    input: &'a str,
    /// Input with surrounding whitespace removed
    source: &'a str,
    /// Byte length of the whitespace trimmed off the front of `input`
    leading: usize,
    config: ParserConfig,
    /// Parsing context for tracking depth
    context: ParsingContext,
}

/// Outcome of a single parsing step
#[derive(Debug)]
enum Step {
    Node(Node),
    /// The closing tag of the enclosing element was consumed
    Closed,
}

/// An opening tag matched at the head of the input
#[derive(Debug)]
struct OpenTag<'a> {
    name: &'a str,
    attributes: &'a str,
    self_closing: bool,
    rest: &'a str,
}

impl<'a> OpenTag<'a> {
    /// Matches `< ws* name ws* attributes (ws* '/' ws*)? >`. The attribute
    /// text runs up to the first `>`.
    fn match_head(input: &'a str) -> Option<Self> {
        let body = input.strip_prefix('<')?.trim_start();
        let (name, after_name) = split_name(body)?;
        let (inner, rest) = after_name.split_once('>')?;
        let inner = inner.trim();
        let (attributes, self_closing) = match inner.strip_suffix('/') {
            Some(attributes) => (attributes.trim_end(), true),
            None => (inner, false),
        };

        Some(Self {
            name,
            attributes,
            self_closing,
            rest,
        })
    }
}

/// Strips `</ ws* name ws* >` off the head of `input`
fn strip_closing_tag<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix("</")?
        .trim_start()
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('>')
}

fn snippet(input: &str) -> String {
    input.chars().take(SNIPPET_CHARS).collect()
}

impl<'a> SsmlParser<'a> {
    /// Creates a new SSML parser for the given input
    pub fn new(input: &'a str) -> Self {
        let leading = input.len() - input.trim_start().len();
        Self {
            input,
            source: input.trim(),
            leading,
            config: ParserConfig::default(),
            context: ParsingContext::new(),
        }
    }

    /// Replaces the default depth and size limits
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a complete SSML document and decodes its text nodes
    /// # Returns
    /// - Ok(Document) whose root is a `<speak>` element
    /// - Err if the markup is malformed or the root is not a single `<speak>`
    pub fn parse(&mut self) -> Result<Document> {
        let root = self.parse_raw()?.into_root();
        Ok(Document::new(unescape_element(root)))
    }

    /// Parses and validates a document without decoding entities in text nodes
    pub fn parse_raw(&mut self) -> Result<Document> {
        // A failed parse returns without unwinding the depth counter
        self.context = ParsingContext::new();
        self.config.validate_input_size(self.input.len())?;
        debug!("Parsing SSML document ({} bytes)", self.input.len());

        let source = self.source;
        let (step, rest) = self.parse_node(source, None)?;
        let root = self.validate_root(step, rest)?;

        debug!("Parsed <{}> with {} children", root.name, root.children.len());
        Ok(Document::new(root))
    }

    /// Parses one node at the head of `input`
    ///
    /// With an `enclosing` tag name, the closing tag of that element is
    /// recognised and reported as [`Step::Closed`].
    fn parse_node(&mut self, input: &'a str, enclosing: Option<&str>) -> Result<(Step, &'a str)> {
        let trimmed = input.trim_start();
        let leading = input.len() - trimmed.len();

        // Text run, leading whitespace included
        if !trimmed.starts_with('<') {
            return Ok(match trimmed.find('<') {
                Some(idx) => {
                    let (text, rest) = input.split_at(leading + idx);
                    (Step::Node(Node::text(text)), rest)
                }
                None => (Step::Node(Node::text(input)), ""),
            });
        }

        if let Some(name) = enclosing {
            if let Some(rest) = strip_closing_tag(trimmed, name) {
                return Ok((Step::Closed, rest));
            }
            if trimmed.starts_with("</") {
                return Err(self.error_at(
                    trimmed,
                    ParseErrorKind::Syntax(SyntaxError::UnclosedTag(name.to_string())),
                    &format!("expected </{}>, found '{}'", name, snippet(trimmed)),
                ));
            }
        }

        let Some(tag) = OpenTag::match_head(trimmed) else {
            return Err(self.error_at(
                trimmed,
                ParseErrorKind::Syntax(SyntaxError::InvalidTagFormat(snippet(trimmed))),
                "expected an opening tag",
            ));
        };

        let attributes = parse_attributes(tag.attributes).map_err(|e| self.locate(e, trimmed))?;

        if tag.self_closing {
            let element = Element {
                name: tag.name.to_string(),
                attributes,
                children: Vec::new(),
            };
            return Ok((Step::Node(element.into()), tag.rest));
        }

        self.parse_children(tag.name, attributes, tag.rest, trimmed)
    }

    /// Collects children until the closing tag of `name` is consumed
    fn parse_children(
        &mut self,
        name: &'a str,
        attributes: Vec<Attribute>,
        mut rest: &'a str,
        tag_start: &'a str,
    ) -> Result<(Step, &'a str)> {
        self.context
            .enter_nested(&self.config)
            .map_err(|e| self.locate(e, tag_start))?;
        trace!(tag = name, depth = self.context.depth(), "entering element");

        let mut children = Vec::new();
        loop {
            if rest.is_empty() {
                return Err(self.error_at(
                    tag_start,
                    ParseErrorKind::Syntax(SyntaxError::UnclosedTag(name.to_string())),
                    &format!("input ended before </{}>", name),
                ));
            }

            let (step, remaining) = self.parse_node(rest, Some(name))?;
            rest = remaining;
            match step {
                Step::Closed => break,
                Step::Node(node) => children.push(node),
            }
        }

        self.context.exit_nested();
        let element = Element {
            name: name.to_string(),
            attributes,
            children,
        };
        Ok((Step::Node(element.into()), rest))
    }

    /// Requires a single `<speak>` element with nothing but whitespace after it
    fn validate_root(&self, step: Step, rest: &'a str) -> Result<Element> {
        let root = match step {
            Step::Node(Node::Element(element)) if element.name == ROOT_TAG => element,
            Step::Node(Node::Element(element)) => {
                return Err(self.error_at(
                    self.source,
                    ParseErrorKind::Semantic(SemanticError::InvalidRoot(format!(
                        "root node must be <{}>, found <{}>",
                        ROOT_TAG, element.name
                    ))),
                    "the document must be wrapped in a single <speak> element",
                ));
            }
            Step::Node(Node::Text(_)) | Step::Closed => {
                return Err(self.error_at(
                    self.source,
                    ParseErrorKind::Semantic(SemanticError::InvalidRoot(format!(
                        "root node must be <{}>, found text",
                        ROOT_TAG
                    ))),
                    "the document must be wrapped in a single <speak> element",
                ));
            }
        };

        let trailing = rest.trim_start();
        if !trailing.is_empty() {
            return Err(self.error_at(
                trailing,
                ParseErrorKind::Semantic(SemanticError::InvalidRoot(
                    "multiple root nodes are not allowed".to_string(),
                )),
                &format!("unexpected content after </{}>: '{}'", ROOT_TAG, snippet(trailing)),
            ));
        }

        Ok(root)
    }

    /// Byte offset of `at` within the original input. `at` must be a suffix of
    /// `self.source`.
    fn offset_of(&self, at: &str) -> usize {
        self.leading + self.source.len().saturating_sub(at.len())
    }

    fn locate(&self, err: ParseError, at: &str) -> ParseError {
        let location = Location::from_offset(self.input, self.offset_of(at));
        err.with_location(location.line, location.column)
    }

    fn error_at(&self, at: &str, kind: ParseErrorKind, context: &str) -> ParseError {
        Location::from_offset(self.input, self.offset_of(at)).create_error(kind, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Document> {
        SsmlParser::new(input).parse()
    }

    fn kind_of(input: &str) -> ParseErrorKind {
        parse(input).unwrap_err().kind().clone()
    }

    #[test]
    fn open_tag_variants() {
        let tag = OpenTag::match_head(r#"< break time="1s" / >tail"#).unwrap();
        assert_eq!(tag.name, "break");
        assert_eq!(tag.attributes, r#"time="1s""#);
        assert!(tag.self_closing);
        assert_eq!(tag.rest, "tail");

        let tag = OpenTag::match_head("<speak>x").unwrap();
        assert_eq!(tag.attributes, "");
        assert!(!tag.self_closing);

        assert!(OpenTag::match_head("<>").is_none());
        assert!(OpenTag::match_head("</speak>").is_none());
        assert!(OpenTag::match_head("<speak").is_none());
    }

    #[test]
    fn closing_tag_tolerates_whitespace_around_name() {
        assert_eq!(strip_closing_tag("</ b >x", "b"), Some("x"));
        assert_eq!(strip_closing_tag("</bc>", "b"), None);
        assert_eq!(strip_closing_tag("</b", "b"), None);
    }

    #[test]
    fn whitespace_before_tags_is_dropped() {
        let doc = parse("<speak>\n  <break/>\n  <s>Hi there </s>\n</speak>").unwrap();
        let root = doc.root();
        assert_eq!(root.children.len(), 2);
        assert_eq!(
            root.children[1],
            Node::Element(Element::new("s").with_text("Hi there "))
        );
    }

    #[test]
    fn text_keeps_leading_whitespace() {
        let doc = parse("<speak><b/>  spaced  <b/></speak>").unwrap();
        assert_eq!(doc.root().children[1], Node::text("  spaced  "));
    }

    #[test]
    fn empty_element_has_no_children() {
        let doc = parse("<speak><p></p><p>  </p></speak>").unwrap();
        for child in &doc.root().children {
            assert_eq!(child.as_element().map(|e| e.children.len()), Some(0));
        }
    }

    #[test]
    fn bare_open_root_is_unclosed() {
        assert_eq!(
            kind_of("<speak>"),
            ParseErrorKind::Syntax(SyntaxError::UnclosedTag("speak".to_string()))
        );
    }

    #[test]
    fn stray_closing_tag_at_top_level() {
        assert!(matches!(
            kind_of("</speak>"),
            ParseErrorKind::Syntax(SyntaxError::InvalidTagFormat(_))
        ));
    }

    #[test]
    fn error_location_points_at_tag() {
        let err = parse("\n<speak>\n  <p>text\n</speak>").unwrap_err();
        assert_eq!(err.location(), Some(&Location::new(4, 1)));

        let err = parse("<speak>\n  <b x=y/>\n</speak>").unwrap_err();
        assert_eq!(err.location(), Some(&Location::new(2, 3)));
    }

    #[test]
    fn repeated_parse_gives_same_result() {
        let config = ParserConfig::default().with_max_depth(3);
        let mut parser = SsmlParser::new("<speak><p><p>x</speak>").with_config(config);
        let first = parser.parse().unwrap_err();
        let second = parser.parse().unwrap_err();
        assert_eq!(first.kind(), second.kind());
        assert_eq!(
            second.kind(),
            &ParseErrorKind::Syntax(SyntaxError::UnclosedTag("p".to_string()))
        );

        let mut parser = SsmlParser::new("<speak><p>x</p></speak>");
        assert_eq!(parser.parse().unwrap(), parser.parse().unwrap());
    }

    #[test]
    fn raw_parse_leaves_entities() {
        let doc = SsmlParser::new("<speak>&amp;lt;</speak>").parse_raw().unwrap();
        assert_eq!(doc.root().children, vec![Node::text("&amp;lt;")]);
    }
}
