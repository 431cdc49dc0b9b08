//! Item extraction strategies.
//!
//! Two strategies share one seam: the primary extractor wants a strict
//! name-then-price line shape, the fallback settles for any strict price
//! token and treats the rest of the line as the name. The pipeline runs the
//! fallback only when the primary found nothing; their outputs are never
//! merged.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::config::ParserConfig;
use crate::models::receipt::ReceiptItem;

use super::classify::classify;
use super::patterns::{ITEM_LINE, PRICE_TOKEN, PRICE_TOKEN_STRIP};

/// A strategy for extracting line items from receipt lines.
pub trait ItemExtractionStrategy {
    /// Extract items in line order. An empty result is a valid outcome,
    /// never an error.
    fn extract(&self, lines: &[&str], config: &ParserConfig) -> Vec<ReceiptItem>;
}

/// Parse a price token, keeping only amounts inside the reasonable range.
///
/// Unparseable tokens yield `None`; the caller skips the line.
fn parse_guarded_price(token: &str, config: &ParserConfig) -> Option<Decimal> {
    let price = Decimal::from_str(token).ok()?;
    if price > Decimal::ZERO && price < config.max_reasonable_price {
        Some(price)
    } else {
        None
    }
}

/// Strict extractor: matches lines shaped as `<name> <price>`.
#[derive(Debug, Default)]
pub struct PrimaryItemExtractor;

impl PrimaryItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ItemExtractionStrategy for PrimaryItemExtractor {
    fn extract(&self, lines: &[&str], config: &ParserConfig) -> Vec<ReceiptItem> {
        let mut items = Vec::new();

        for line in lines {
            let line = line.trim();
            if classify(line, config).is_noise() {
                continue;
            }

            let Some(caps) = ITEM_LINE.captures(line) else {
                continue;
            };

            if let Some(price) = parse_guarded_price(&caps[2], config) {
                items.push(ReceiptItem::new(caps[1].trim(), price));
            } else {
                debug!(line, "discarding line with out-of-range or unparseable price");
            }
        }

        items
    }
}

/// Loose extractor: any strict price token, name is what remains.
#[derive(Debug, Default)]
pub struct FallbackItemExtractor;

impl FallbackItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ItemExtractionStrategy for FallbackItemExtractor {
    fn extract(&self, lines: &[&str], config: &ParserConfig) -> Vec<ReceiptItem> {
        let mut items = Vec::new();

        for line in lines {
            let line = line.trim();
            if classify(line, config).is_noise() {
                continue;
            }

            let Some(caps) = PRICE_TOKEN.captures(line) else {
                continue;
            };

            // A bare price with no residual name is not evidence of an item.
            let name = PRICE_TOKEN_STRIP.replace_all(line, "");
            let name = name.trim();
            if name.len() <= config.min_fallback_name_len {
                continue;
            }

            if let Some(price) = parse_guarded_price(&caps[1], config) {
                items.push(ReceiptItem::new(name, price));
            }
        }

        items
    }
}
