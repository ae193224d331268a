//! Full-scan aggregations for the dashboard and reports.
//!
//! Recomputed on demand over every stored document; cost is linear in total
//! line items across all time. No incremental maintenance or caching.

use sqlx::{Row, SqlitePool};

use milldesk_core::{decode_line_items, numeric_field, ProductionTotals, SalesTotals};

use crate::error::StoreResult;

/// Sum `length`/`weight` and count line items over all production documents.
///
/// A document whose blob fails to decode contributes nothing and is skipped.
pub async fn production_totals(pool: &SqlitePool) -> StoreResult<ProductionTotals> {
    let rows = sqlx::query("SELECT data FROM productions")
        .fetch_all(pool)
        .await?;

    let mut totals = ProductionTotals::default();
    for row in rows {
        let data: Option<String> = row.try_get("data")?;
        for item in decode_line_items(data.as_deref()) {
            totals.total_length += numeric_field(&item, "length");
            totals.total_weight += numeric_field(&item, "weight");
            totals.total_items += 1;
        }
    }

    Ok(totals)
}

/// Sum `amount` and count line items over all sale documents.
///
/// `total_orders` counts every stored sale, decodable or not.
pub async fn sales_totals(pool: &SqlitePool) -> StoreResult<SalesTotals> {
    let rows = sqlx::query("SELECT data FROM sales").fetch_all(pool).await?;

    let mut totals = SalesTotals {
        total_orders: rows.len() as u64,
        ..Default::default()
    };
    for row in rows {
        let data: Option<String> = row.try_get("data")?;
        for item in decode_line_items(data.as_deref()) {
            totals.total_amount += numeric_field(&item, "amount");
            totals.total_items += 1;
        }
    }

    Ok(totals)
}
