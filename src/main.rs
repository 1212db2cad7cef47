use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use ssmlparse::{
    enums::OutputFormat,
    error::Result,
    formatter::FormatConfig,
    parse_ssml, ssml_to_text,
    utils::{format_outline, read_file, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input SSML file path
    #[arg(short, long)]
    file: String,

    /// What to print for the parsed document
    #[arg(short = 't', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Indentation width for the outline format
    #[arg(short, long, default_value_t = 2)]
    indent: usize,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Read input file
    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    let formatted_output = match args.format {
        OutputFormat::Text => ssml_to_text(&content)?,
        OutputFormat::Outline => {
            let document = parse_ssml(&content)?;
            let config = FormatConfig {
                indent_spaces: args.indent,
            };
            format_outline(&document.into(), &config)?
        }
    };

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        write_file(&output_path, &formatted_output)?;
    } else {
        println!("{}", formatted_output);
    }

    Ok(())
}
