//! Store error model.

use milldesk_core::DomainError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer error.
///
/// `Domain` failures (duplicate names/usernames) are converted to structured
/// results at the API boundary; `Db` is the one class permitted to propagate
/// as fatal, since no retry or recovery is defined for an unavailable store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Whether a sqlx error is a uniqueness-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.kind() == sqlx::error::ErrorKind::UniqueViolation
    )
}
