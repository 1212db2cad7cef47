use std::fmt::Write;

use super::{FormatConfig, Formatter};
use crate::{
    error::Result,
    parser::{Element, Node},
};

/// Indented one-node-per-line dump of a tree, for inspecting parse results.
///
/// ```text
/// speak
///   "Hello "
///   emphasis level="strong"
///     "world"
/// ```
pub struct OutlineFormatter;

impl Formatter for OutlineFormatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> Result<String> {
        config.validate()?;
        let mut lines = Vec::new();
        Self::format_node(node, 0, config, &mut lines);
        Ok(lines.join("\n"))
    }
}

impl OutlineFormatter {
    fn format_node(node: &Node, depth: usize, config: &FormatConfig, lines: &mut Vec<String>) {
        let indent = " ".repeat(depth * config.indent_spaces);
        match node {
            Node::Text(text) => lines.push(format!("{}{:?}", indent, text)),
            Node::Element(element) => {
                lines.push(format!("{}{}", indent, Self::format_tag(element)));
                for child in &element.children {
                    Self::format_node(child, depth + 1, config, lines);
                }
            }
        }
    }

    fn format_tag(element: &Element) -> String {
        let mut tag = element.name.clone();
        for attr in &element.attributes {
            let _ = write!(tag, " {}=\"{}\"", attr.name, attr.value);
        }
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormatError, ParseErrorKind};

    fn sample() -> Node {
        Node::Element(
            Element::new("speak")
                .with_text("Hi\n")
                .with_child(
                    Element::new("prosody")
                        .with_attribute("rate", "slow")
                        .with_attribute("pitch", "low")
                        .with_child(Element::new("break")),
                ),
        )
    }

    #[test]
    fn one_line_per_node() {
        let out = OutlineFormatter
            .format(&sample(), &FormatConfig::default())
            .unwrap();
        assert_eq!(
            out,
            "speak\n  \"Hi\\n\"\n  prosody rate=\"slow\" pitch=\"low\"\n    break"
        );
    }

    #[test]
    fn honours_indent_width() {
        let config = FormatConfig { indent_spaces: 4 };
        let out = OutlineFormatter.format(&sample(), &config).unwrap();
        assert!(out.contains("\n        break"));
    }

    #[test]
    fn rejects_excessive_indent() {
        let config = FormatConfig { indent_spaces: 9 };
        let err = OutlineFormatter.format(&sample(), &config).unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::Format(FormatError::InvalidIndentation(_))
        ));
    }
}
