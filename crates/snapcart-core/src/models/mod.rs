//! Data models for parsed receipts and parser configuration.

pub mod config;
pub mod receipt;

pub use config::ParserConfig;
pub use receipt::{ParsedReceipt, ReceiptItem, UNKNOWN_STORE};
