//! Receipt parsing pipeline.
//!
//! One linear pass over the recognized text: primary item extraction, the
//! fallback strategy if and only if the primary found nothing, store-name
//! resolution over the leading lines, and a reconciled total. Each stage
//! runs at most once per parse and the two strategies are never merged.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::ParserConfig;
use crate::models::receipt::ParsedReceipt;
use crate::recognize::TextRecognizer;

use super::rules::{
    FallbackItemExtractor, ItemExtractionStrategy, PrimaryItemExtractor, reconcile_total,
    resolve_store_name,
};
use super::ReceiptParser;

/// Heuristic receipt-text parser.
///
/// Stateless apart from its configuration; one instance can parse any number
/// of receipts, concurrently if desired.
#[derive(Debug, Clone, Default)]
pub struct ReceiptTextParser {
    config: ParserConfig,
}

impl ReceiptTextParser {
    /// Create a parser with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom thresholds.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Recognize an image through the given provider, then parse the text.
    ///
    /// Recognition failures propagate; parsing itself cannot fail.
    pub fn parse_image<R: TextRecognizer>(
        &self,
        recognizer: &R,
        image: &[u8],
    ) -> Result<ParsedReceipt> {
        let text = recognizer.recognize(image)?;
        Ok(self.parse(&text))
    }
}

impl ReceiptParser for ReceiptTextParser {
    fn parse(&self, text: &str) -> ParsedReceipt {
        let lines: Vec<&str> = text.lines().collect();
        info!(lines = lines.len(), "parsing receipt text");

        let mut items = PrimaryItemExtractor::new().extract(&lines, &self.config);
        if items.is_empty() {
            debug!("primary strategy found no items, trying fallback");
            items = FallbackItemExtractor::new().extract(&lines, &self.config);
        }

        let store_name = resolve_store_name(&lines, &self.config);
        let computed_total = reconcile_total(&items);

        debug!(
            items = items.len(),
            %store_name,
            %computed_total,
            "receipt parsed"
        );

        ParsedReceipt {
            items,
            store_name,
            computed_total,
        }
    }
}
