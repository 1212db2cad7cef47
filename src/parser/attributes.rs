//! Attribute lexer for the text between a tag name and its closing `>`.

use super::node::Attribute;
use crate::error::{ParseError, ParseErrorKind, Result, SyntaxError};

/// Tag and attribute names are runs of ASCII word characters and colons
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ':'
}

/// Splits a leading name off `input`, or `None` if it doesn't start with one
pub(crate) fn split_name(input: &str) -> Option<(&str, &str)> {
    let end = input
        .find(|c: char| !is_name_char(c))
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    Some(input.split_at(end))
}

/// Parses `name="value"` pairs in order.
///
/// A lone trailing `/` (self-closing marker) is accepted and ignored. Values
/// are taken verbatim up to the next `"`; there is no quote escaping and no
/// entity decoding.
pub fn parse_attributes(source: &str) -> Result<Vec<Attribute>> {
    let mut attributes = Vec::new();
    let mut remaining = source.trim();

    loop {
        remaining = remaining.trim_start();
        if remaining.is_empty() || remaining == "/" {
            break;
        }

        let Some((name, rest)) = split_name(remaining) else {
            return Err(attribute_error(format!(
                "expected attribute name, found '{}'",
                remaining
            )));
        };

        let Some(rest) = rest.trim_start().strip_prefix('=') else {
            return Err(attribute_error(format!("missing '=' after '{}'", name)));
        };

        let Some(rest) = rest.trim_start().strip_prefix('"') else {
            return Err(attribute_error(format!(
                "value of '{}' must be double-quoted",
                name
            )));
        };

        let Some((value, rest)) = rest.split_once('"') else {
            return Err(attribute_error(format!(
                "unterminated value for '{}'",
                name
            )));
        };

        attributes.push(Attribute::new(name, value));
        remaining = rest;
    }

    Ok(attributes)
}

fn attribute_error(message: String) -> ParseError {
    ParseError::new(ParseErrorKind::Syntax(SyntaxError::AttributeFormat(message)))
}
