//! User records and credential validation.

use sqlx::{Row, SqlitePool};

use milldesk_auth::{verify_password, Role};
use milldesk_core::DomainError;

use crate::error::{is_unique_violation, StoreResult};

/// An authenticated identity, as returned by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// A user row for listing (no secret material).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Look up `username` (case-sensitive exact match) and compare password
/// digests. `None` means bad credentials; the caller decides how to surface
/// that.
pub async fn validate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> StoreResult<Option<AuthUser>> {
    let row = sqlx::query("SELECT id, username, password_hash, role FROM users WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let stored: String = row.try_get("password_hash")?;
    if !verify_password(&stored, password) {
        return Ok(None);
    }

    let role: String = row.try_get("role")?;
    Ok(Some(AuthUser {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        role: Role::from_db(&role),
    }))
}

/// Insert a user. Fails with [`DomainError::DuplicateUsername`] when the name
/// is taken.
pub async fn add(pool: &SqlitePool, username: &str, password: &str, role: Role) -> StoreResult<()> {
    let result = sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)")
        .bind(username)
        .bind(milldesk_auth::hash_password(password))
        .bind(role.as_str())
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(err) if is_unique_violation(&err) => Err(DomainError::DuplicateUsername.into()),
        Err(err) => Err(err.into()),
    }
}

/// List users, newest id first.
pub async fn list(pool: &SqlitePool) -> StoreResult<Vec<UserRecord>> {
    let rows = sqlx::query("SELECT id, username, role FROM users ORDER BY id DESC")
        .fetch_all(pool)
        .await?;

    rows.into_iter()
        .map(|row| {
            let role: String = row.try_get("role")?;
            Ok(UserRecord {
                id: row.try_get("id")?,
                username: row.try_get("username")?,
                role: Role::from_db(&role),
            })
        })
        .collect()
}

/// Delete a user unconditionally. An absent id succeeds silently; nothing
/// stops an admin deleting themselves or the last admin.
pub async fn delete(pool: &SqlitePool, id: i64) -> StoreResult<()> {
    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
