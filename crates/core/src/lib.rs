//! `milldesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the line-item blob codec, document-number sequencing, aggregate totals and
//! the domain error model.

pub mod error;
pub mod items;
pub mod number;
pub mod totals;

pub use error::DomainError;
pub use items::{decode_line_items, encode_line_items, numeric_field, LineItem};
pub use number::DocKind;
pub use totals::{ProductionTotals, SalesTotals};
