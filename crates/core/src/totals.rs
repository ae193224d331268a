//! Aggregate totals for the dashboard and reports.

use serde::Serialize;

/// Running sums over every production document's line items.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProductionTotals {
    pub total_length: f64,
    pub total_weight: f64,
    pub total_items: u64,
}

/// Running sums over every sale document's line items.
///
/// `total_orders` counts documents regardless of whether their line-item blob
/// decoded; the other fields only accumulate over decodable blobs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SalesTotals {
    pub total_amount: f64,
    pub total_items: u64,
    pub total_orders: u64,
}
