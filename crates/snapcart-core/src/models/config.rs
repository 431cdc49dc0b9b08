//! Configuration for the receipt parsing heuristics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tunable thresholds for the parsing pipeline.
///
/// The defaults were tuned against real photographed receipts; changing them
/// changes which lines are accepted as items, so they are exposed as
/// configuration rather than hard-coded, but callers should normally keep
/// the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Upper bound (exclusive) on a believable single-item price. Amounts at
    /// or above this are treated as OCR garbage and skipped.
    pub max_reasonable_price: Decimal,

    /// Lines shorter than this (after trimming) are noise.
    pub min_line_len: usize,

    /// How many leading lines are scanned for the store name.
    pub store_name_window: usize,

    /// Store-name candidates must be strictly longer than this.
    pub store_name_min_len: usize,

    /// Store-name candidates must be strictly shorter than this.
    pub store_name_max_len: usize,

    /// In the fallback strategy, the name left after stripping price tokens
    /// must be strictly longer than this to count as a real item line.
    pub min_fallback_name_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_reasonable_price: Decimal::from(1000),
            min_line_len: 3,
            store_name_window: 5,
            store_name_min_len: 3,
            store_name_max_len: 50,
            min_fallback_name_len: 2,
        }
    }
}
