//! Transactional documents: production and sale entries.
//!
//! Documents are append-only headers with an embedded line-item blob. Saving
//! applies no validation (number uniqueness, reference existence, line-item
//! shape are all the caller's concern); listing LEFT JOINs the referenced
//! catalog so a dangling reference surfaces as a missing name, not an error.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use milldesk_core::{decode_line_items, encode_line_items, DocKind, LineItem};

use crate::error::StoreResult;

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduction {
    pub number: String,
    pub date: String,
    pub shift: String,
    pub operator_id: i64,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub order_no: String,
    pub date: String,
    pub party_id: i64,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProductionRow {
    pub id: i64,
    pub number: Option<String>,
    pub date: Option<String>,
    pub shift: Option<String>,
    pub operator_id: Option<i64>,
    pub operator_name: Option<String>,
    pub items: Vec<LineItem>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SaleRow {
    pub id: i64,
    pub order_no: Option<String>,
    pub date: Option<String>,
    pub party_id: Option<i64>,
    pub party_name: Option<String>,
    pub items: Vec<LineItem>,
    pub created_at: Option<String>,
}

/// Insert a production document and return its storage id.
pub async fn save_production(pool: &SqlitePool, doc: &NewProduction) -> StoreResult<i64> {
    let result = sqlx::query(
        "INSERT INTO productions (number, date, shift, operator_id, data, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&doc.number)
    .bind(&doc.date)
    .bind(&doc.shift)
    .bind(doc.operator_id)
    .bind(encode_line_items(&doc.items))
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Insert a sale document and return its storage id.
pub async fn save_sale(pool: &SqlitePool, doc: &NewSale) -> StoreResult<i64> {
    let result = sqlx::query(
        "INSERT INTO sales (order_no, date, party_id, data, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&doc.order_no)
    .bind(&doc.date)
    .bind(doc.party_id)
    .bind(encode_line_items(&doc.items))
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List production documents joined with the operator's display name,
/// date descending then most-recently-inserted first.
pub async fn list_productions(pool: &SqlitePool) -> StoreResult<Vec<ProductionRow>> {
    let rows = sqlx::query(
        "SELECT p.id, p.number, p.date, p.shift, p.operator_id, p.data, p.created_at, \
                o.name AS operator_name \
         FROM productions p \
         LEFT JOIN operators o ON p.operator_id = o.id \
         ORDER BY p.date DESC, p.id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let data: Option<String> = row.try_get("data")?;
            Ok(ProductionRow {
                id: row.try_get("id")?,
                number: row.try_get("number")?,
                date: row.try_get("date")?,
                shift: row.try_get("shift")?,
                operator_id: row.try_get("operator_id")?,
                operator_name: row.try_get("operator_name")?,
                items: decode_line_items(data.as_deref()),
                created_at: row.try_get("created_at")?,
            })
        })
        .collect()
}

/// List sale documents joined with the party's display name, same order.
pub async fn list_sales(pool: &SqlitePool) -> StoreResult<Vec<SaleRow>> {
    let rows = sqlx::query(
        "SELECT s.id, s.order_no, s.date, s.party_id, s.data, s.created_at, \
                pt.name AS party_name \
         FROM sales s \
         LEFT JOIN parties pt ON s.party_id = pt.id \
         ORDER BY s.date DESC, s.id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let data: Option<String> = row.try_get("data")?;
            Ok(SaleRow {
                id: row.try_get("id")?,
                order_no: row.try_get("order_no")?,
                date: row.try_get("date")?,
                party_id: row.try_get("party_id")?,
                party_name: row.try_get("party_name")?,
                items: decode_line_items(data.as_deref()),
                created_at: row.try_get("created_at")?,
            })
        })
        .collect()
}

/// Advisory next document number for `kind`.
///
/// Reads the most recently *inserted* number (insertion order, not parsed
/// numeric order) and derives its successor. Nothing is reserved; concurrent
/// callers can be handed the same number.
pub async fn next_number(pool: &SqlitePool, kind: DocKind) -> StoreResult<String> {
    let (table, column) = match kind {
        DocKind::Production => ("productions", "number"),
        DocKind::Sale => ("sales", "order_no"),
    };

    let sql = format!("SELECT {column} FROM {table} ORDER BY id DESC LIMIT 1");
    let row = sqlx::query(&sql).fetch_optional(pool).await?;

    let last: Option<String> = match row {
        Some(row) => row.try_get(column)?,
        None => None,
    };

    Ok(kind.next_after(last.as_deref()))
}
