//! CLI subcommands.

pub mod batch;
pub mod parse;

use std::fs;
use std::path::Path;

use snapcart_core::{ParsedReceipt, ParserConfig};

/// Load a parser config from a JSON file, or fall back to the defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<ParserConfig> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(Path::new(path))?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(ParserConfig::default()),
    }
}

/// Output format shared by the subcommands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// Render one parsed receipt in the chosen format.
pub fn format_receipt(receipt: &ParsedReceipt, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Store: {}\n", receipt.store_name));
            for item in &receipt.items {
                out.push_str(&format!(
                    "  {} x{} @ {} = {}\n",
                    item.name,
                    item.quantity,
                    item.unit_price,
                    item.total_price()
                ));
            }
            out.push_str(&format!("Computed total: {}", receipt.computed_total));
            Ok(out)
        }
    }
}
