//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures the caller can branch
/// on. Infrastructure concerns (database connectivity etc.) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A catalog insert collided with an existing name. Carries the catalog
    /// label so the message reads e.g. "Operator name must be unique".
    #[error("{0} name must be unique")]
    DuplicateName(String),

    /// A user insert collided with an existing username.
    #[error("Username already exists")]
    DuplicateUsername,
}

impl DomainError {
    pub fn duplicate_name(label: impl Into<String>) -> Self {
        Self::DuplicateName(label.into())
    }
}
