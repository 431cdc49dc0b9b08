//! Heuristic rules for receipt-text parsing.

pub mod classify;
pub mod items;
pub mod patterns;
pub mod store;
pub mod totals;

pub use classify::{classify, LineRole, NoiseReason};
pub use items::{FallbackItemExtractor, ItemExtractionStrategy, PrimaryItemExtractor};
pub use store::resolve_store_name;
pub use totals::reconcile_total;
