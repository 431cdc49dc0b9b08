//! Batch command - parse every .txt file in a directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use snapcart_core::{ReceiptParser, ReceiptTextParser};

use super::{format_receipt, load_config, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing recognized-text files
    #[arg(required = true)]
    dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = ReceiptTextParser::with_config(config);

    if !args.dir.is_dir() {
        anyhow::bail!("Not a directory: {}", args.dir.display());
    }

    let mut inputs: Vec<PathBuf> = fs::read_dir(&args.dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        warn!("No .txt files found in {}", args.dir.display());
        return Ok(());
    }

    info!("Parsing {} files", inputs.len());

    for path in &inputs {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                continue;
            }
        };

        let receipt = parser.parse(&text);
        println!("== {}", path.display());
        println!("{}", format_receipt(&receipt, args.format)?);
    }

    Ok(())
}
