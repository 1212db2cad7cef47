mod data;
mod helpers;

pub use data::{INVALID_SSML_SAMPLES, TEST_FILES, VALID_SSML_SAMPLES};
pub use helpers::{nested_ssml, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    entities::{unescape_element, unescape_text_nodes, unescape_xml_chars},
    error::{
        FormatError, IOError, Location, ParseError, ParseErrorKind, Result, SecurityError,
        SemanticError, SyntaxError,
    },
    formatter::{node_to_text, FormatConfig, Formatter, OutlineFormatter, TextFormatter},
    parse_file, parse_ssml, parse_ssml_with_config,
    parser::{
        config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE},
        node::{Attribute, Document, Element, Node, ROOT_TAG},
        parse_attributes,
        ssml::SsmlParser,
    },
    ssml_to_text,
    utils::{format_outline, format_text, read_file, write_file},
};
