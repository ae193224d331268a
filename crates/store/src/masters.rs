//! Reference catalogs (masters).
//!
//! Four parallel uniqueness-keyed catalogs. Rather than branching on a table
//! name string at every call site, each catalog is described once here: its
//! table, its extra columns and its display label. Rows are immutable after
//! creation (no update operation) and deletion neither cascades into nor is
//! blocked by documents referencing the row.

use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::{Row, SqlitePool};

use milldesk_core::DomainError;

use crate::error::{is_unique_violation, StoreResult};

/// Descriptor for one reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Operators,
    Parties,
    Machines,
    Items,
}

impl Catalog {
    pub const ALL: [Catalog; 4] = [
        Catalog::Operators,
        Catalog::Parties,
        Catalog::Machines,
        Catalog::Items,
    ];

    /// Resolve a wire-level table key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "operators" => Some(Catalog::Operators),
            "parties" => Some(Catalog::Parties),
            "machines" => Some(Catalog::Machines),
            "items" => Some(Catalog::Items),
            _ => None,
        }
    }

    /// Backing table name (static, never interpolated from user input).
    pub fn table(self) -> &'static str {
        match self {
            Catalog::Operators => "operators",
            Catalog::Parties => "parties",
            Catalog::Machines => "machines",
            Catalog::Items => "items",
        }
    }

    /// Descriptive columns beyond the unique `name`.
    pub fn extra_columns(self) -> &'static [&'static str] {
        match self {
            Catalog::Operators | Catalog::Parties => &["mobile", "address"],
            Catalog::Machines => &["remarks"],
            Catalog::Items => &["type"],
        }
    }

    /// Singular label for user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Catalog::Operators => "Operator",
            Catalog::Parties => "Party",
            Catalog::Machines => "Machine",
            Catalog::Items => "Item",
        }
    }
}

impl core::fmt::Display for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.table())
    }
}

/// List a catalog, newest id first. Rows come back as loose JSON objects so
/// the four schemas share one listing path.
pub async fn list(pool: &SqlitePool, catalog: Catalog) -> StoreResult<Vec<Value>> {
    let sql = format!("SELECT * FROM {} ORDER BY id DESC", catalog.table());
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.into_iter()
        .map(|row| {
            let mut obj = Map::new();
            obj.insert("id".into(), Value::from(row.try_get::<i64, _>("id")?));
            obj.insert(
                "name".into(),
                row.try_get::<Option<String>, _>("name")?
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            );
            for col in catalog.extra_columns() {
                obj.insert(
                    (*col).into(),
                    row.try_get::<Option<String>, _>(*col)?
                        .map(Value::from)
                        .unwrap_or(Value::Null),
                );
            }
            obj.insert(
                "created_at".into(),
                row.try_get::<Option<String>, _>("created_at")?
                    .map(Value::from)
                    .unwrap_or(Value::Null),
            );
            Ok(Value::Object(obj))
        })
        .collect()
}

/// Insert a catalog entry with a server-assigned creation timestamp.
///
/// Fails with [`DomainError::DuplicateName`] when the name already exists in
/// this catalog; no other validation is applied.
pub async fn add(pool: &SqlitePool, catalog: Catalog, fields: &Map<String, Value>) -> StoreResult<()> {
    let extras = catalog.extra_columns();

    let mut columns = vec!["name"];
    columns.extend_from_slice(extras);
    columns.push("created_at");

    let placeholders = (1..=columns.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        catalog.table(),
        columns.join(", "),
        placeholders
    );

    let mut query = sqlx::query(&sql).bind(text_field(fields, "name"));
    for col in extras {
        query = query.bind(text_field(fields, col));
    }
    query = query.bind(Utc::now().to_rfc3339());

    match query.execute(pool).await {
        Ok(_) => Ok(()),
        Err(err) if is_unique_violation(&err) => {
            Err(DomainError::duplicate_name(catalog.label()).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Delete by id. Succeeds silently when the id is absent, and performs no
/// referential check against documents (dangling references are allowed).
pub async fn delete(pool: &SqlitePool, catalog: Catalog, id: i64) -> StoreResult<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", catalog.table());
    sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(())
}

/// Pull a field out of the loose payload as text. Non-string scalars are
/// stored via their JSON rendering; absent or null fields stay NULL.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
