//! User administration endpoints (admin-only via the route policy).

use std::sync::Arc;

use axum::{extract::Extension, response::Response, Json};

use milldesk_auth::Role;
use milldesk_store::{users, StoreError};

use crate::app::{dto, errors, AppState};

/// POST `/api/add_user`.
pub async fn add_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::AddUserRequest>,
) -> Response {
    let role = Role::from_db(body.role.as_deref().unwrap_or("user"));

    match users::add(state.pool(), &body.username, &body.password, role).await {
        Ok(()) => errors::api_ok("User added successfully"),
        Err(StoreError::Domain(err)) => errors::api_fail(err.to_string()),
        Err(err) => errors::store_error_response(err),
    }
}

/// POST `/api/delete_user` — unconditional, even for the caller's own account.
pub async fn delete_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::DeleteUserRequest>,
) -> Response {
    match users::delete(state.pool(), body.id).await {
        Ok(()) => errors::api_ok("User deleted successfully"),
        Err(err) => errors::store_error_response(err),
    }
}
