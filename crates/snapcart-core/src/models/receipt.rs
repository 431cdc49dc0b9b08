//! Parsed receipt data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel store name used when no leading line qualifies.
pub const UNKNOWN_STORE: &str = "Unknown Store";

/// A single purchased item extracted from receipt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Item name as printed on the receipt, trimmed.
    pub name: String,

    /// Price per unit. Always within the configured reasonable range.
    pub unit_price: Decimal,

    /// Number of units purchased.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Item category.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_quantity() -> u32 {
    1
}

fn default_category() -> String {
    "General".to_string()
}

impl ReceiptItem {
    /// Create an item with quantity 1 and the default category.
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: default_quantity(),
            category: default_category(),
        }
    }

    /// Total price for this line: `unit_price * quantity`.
    ///
    /// Derived on demand so it can never drift from its inputs.
    pub fn total_price(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Structured result of parsing one receipt's recognized text.
///
/// Built once per parse and never mutated afterwards; the caller owns it and
/// typically attaches it to a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    /// Extracted line items, in document order.
    pub items: Vec<ReceiptItem>,

    /// Merchant name, or [`UNKNOWN_STORE`] if none was found.
    pub store_name: String,

    /// Sum of `unit_price * quantity` over `items`. Zero when empty.
    ///
    /// This is a reconciled total, independent of any total printed on the
    /// receipt (those lines are classified as noise and discarded).
    pub computed_total: Decimal,
}
