use super::{FormatConfig, Formatter};
use crate::{entities::unescape_xml_chars, error::Result, parser::Node};

/// Renders the spoken text of a tree, dropping all markup
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, node: &Node, _config: &FormatConfig) -> Result<String> {
        Ok(node_to_text(node))
    }
}

/// Concatenates the text leaves of `node` in document order.
///
/// Every leaf is entity-decoded on the way out, whether or not the tree was
/// decoded already. Feeding it a decoded tree that still contains a literal
/// `&lt;` therefore decodes that sequence a second time.
pub fn node_to_text(node: &Node) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&unescape_xml_chars(text)),
        Node::Element(element) => {
            for child in &element.children {
                push_text(child, out);
            }
        }
    }
}
