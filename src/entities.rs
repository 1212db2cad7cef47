//! Character entity decoding for text nodes.
//!
//! Only `&lt;`, `&gt;` and `&amp;` are understood. Anything else that looks
//! like a reference (`&quot;`, `&#60;`, ...) passes through untouched.

use crate::parser::node::{Element, Node};

/// Decodes the three supported entities.
///
/// `&amp;` is replaced last, so `&amp;lt;` comes out as `&lt;` and not `<`.
pub fn unescape_xml_chars(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Rebuilds `node` with every text leaf decoded. Attribute values are left
/// exactly as written.
pub fn unescape_text_nodes(node: Node) -> Node {
    match node {
        Node::Text(text) => Node::Text(unescape_xml_chars(&text)),
        Node::Element(element) => Node::Element(unescape_element(element)),
    }
}

/// [`unescape_text_nodes`] for an element
pub fn unescape_element(element: Element) -> Element {
    Element {
        name: element.name,
        attributes: element.attributes,
        children: element
            .children
            .into_iter()
            .map(unescape_text_nodes)
            .collect(),
    }
}
