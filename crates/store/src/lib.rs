//! `milldesk-store` — SQLite persistence.
//!
//! Thin single-table CRUD over sqlx: user records, the four reference
//! catalogs, the two transactional document tables, document-number reads and
//! the full-scan aggregations. There is deliberately no relational integrity
//! beyond name uniqueness; see DESIGN.md for the flagged consequences.

pub mod db;
pub mod documents;
pub mod error;
pub mod masters;
pub mod schema;
pub mod totals;
pub mod users;

pub use db::Db;
pub use error::{StoreError, StoreResult};
pub use masters::Catalog;
