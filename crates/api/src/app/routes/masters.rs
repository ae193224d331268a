//! Reference-catalog management endpoints.

use std::sync::Arc;

use axum::{extract::Extension, response::Response, Json};

use milldesk_store::{masters, Catalog, StoreError};

use crate::app::{dto, errors, AppState};

/// POST `/api/add_master` — insert into one of the four catalogs.
pub async fn add_master(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::AddMasterRequest>,
) -> Response {
    let Some(catalog) = Catalog::from_key(&body.table) else {
        return errors::api_fail(format!("Unknown master table '{}'", body.table));
    };

    match masters::add(state.pool(), catalog, &body.data).await {
        Ok(()) => errors::api_ok(format!("{} added successfully", catalog.label())),
        Err(StoreError::Domain(err)) => errors::api_fail(err.to_string()),
        Err(err) => errors::store_error_response(err),
    }
}

/// POST `/api/delete_master` — unconditional delete by id.
pub async fn delete_master(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::DeleteMasterRequest>,
) -> Response {
    let Some(catalog) = Catalog::from_key(&body.table) else {
        return errors::api_fail(format!("Unknown master table '{}'", body.table));
    };

    match masters::delete(state.pool(), catalog, body.id).await {
        Ok(()) => errors::api_ok("Record deleted successfully"),
        Err(err) => errors::store_error_response(err),
    }
}
