//! Document save endpoints.
//!
//! Any failure — an unreadable body, a missing field, a storage error — is
//! returned as a structured `{success: false, message}` result; these
//! endpoints never answer with an error status. The body is therefore taken
//! as loose JSON and decoded by hand rather than through the typed extractor,
//! whose rejection would short-circuit with a 4xx.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{extract::Extension, response::Response, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

use milldesk_store::documents::{self, NewProduction, NewSale};

use crate::app::{dto, errors, AppState};

/// POST `/api/save_production`.
pub async fn save_production(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body: dto::SaveProductionRequest = match decode_body(body) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let doc = NewProduction {
        number: body.number,
        date: body.date,
        shift: body.shift,
        operator_id: body.operator_id,
        items: body.items,
    };

    match documents::save_production(state.pool(), &doc).await {
        Ok(id) => errors::api_ok_with_id(id, "Production saved successfully"),
        Err(err) => {
            tracing::warn!("production save failed: {err}");
            errors::api_fail(format!("Error: {err}"))
        }
    }
}

/// POST `/api/save_sale`.
pub async fn save_sale(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body: dto::SaveSaleRequest = match decode_body(body) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let doc = NewSale {
        order_no: body.order_no,
        date: body.date,
        party_id: body.party_id,
        items: body.items,
    };

    match documents::save_sale(state.pool(), &doc).await {
        Ok(id) => errors::api_ok_with_id(id, "Sale saved successfully"),
        Err(err) => {
            tracing::warn!("sale save failed: {err}");
            errors::api_fail(format!("Error: {err}"))
        }
    }
}

/// Decode a save request body, mapping both extractor rejections (not JSON,
/// wrong content type) and shape mismatches (missing or mistyped fields)
/// into the structured failure result.
fn decode_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<T, Response> {
    let Json(value) = body.map_err(|rejection| errors::api_fail(format!("Error: {rejection}")))?;
    serde_json::from_value(value).map_err(|err| errors::api_fail(format!("Error: {err}")))
}
