//! Reconciled totals.

use rust_decimal::Decimal;

use crate::models::receipt::ReceiptItem;

/// Sum `unit_price * quantity` over all items.
///
/// This is computed from the extracted items only; any total printed on the
/// receipt was classified as noise and discarded, so the two may differ when
/// extraction missed lines. Empty input sums to zero.
pub fn reconcile_total(items: &[ReceiptItem]) -> Decimal {
    items.iter().map(ReceiptItem::total_price).sum()
}
