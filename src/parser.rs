pub mod attributes;
pub mod config;
pub mod node;
pub mod ssml;

pub use attributes::parse_attributes;
pub use config::ParserConfig;
pub use node::{Attribute, Document, Element, Node, ROOT_TAG};
pub use ssml::SsmlParser;
