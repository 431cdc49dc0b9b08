//! Core library for receipt OCR post-processing.
//!
//! This crate provides:
//! - Line classification (content vs. header/footer/metadata noise)
//! - Heuristic line-item extraction with a primary and a fallback strategy
//! - Store-name resolution and reconciled totals
//! - A seam for external text-recognition providers
//!
//! The parsing pipeline is a pure function of the recognized text: it never
//! fails, never blocks, and holds no state across receipts.

pub mod error;
pub mod models;
pub mod receipt;
pub mod recognize;

pub use error::{RecognitionError, Result, SnapcartError};
pub use models::config::ParserConfig;
pub use models::receipt::{ParsedReceipt, ReceiptItem, UNKNOWN_STORE};
pub use receipt::{ReceiptParser, ReceiptTextParser};
pub use recognize::TextRecognizer;
