//! Receipt text parsing.

mod parser;
pub mod rules;

pub use parser::ReceiptTextParser;

use crate::models::receipt::ParsedReceipt;

/// Trait for receipt parsers.
///
/// `parse` is total: malformed input degrades to an empty item list, the
/// unknown-store sentinel, and a zero total, never an error.
pub trait ReceiptParser {
    /// Parse one receipt's recognized text into a structured result.
    fn parse(&self, text: &str) -> ParsedReceipt;
}
