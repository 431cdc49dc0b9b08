//! Parse command - parse a single recognized-text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use snapcart_core::{ReceiptParser, ReceiptTextParser};

use super::{format_receipt, load_config, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file holding the recognized receipt text
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let receipt = ReceiptTextParser::with_config(config).parse(&text);

    let output = format_receipt(&receipt, args.format)?;
    match &args.output {
        Some(path) => fs::write(path, output)?,
        None => println!("{}", output),
    }

    Ok(())
}
