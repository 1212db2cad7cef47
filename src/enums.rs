use clap::ValueEnum;

/// What the CLI prints for a parsed document
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The spoken text with all markup removed
    Text,
    /// An indented dump of the parsed tree
    Outline,
}
