use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use milldesk_store::StoreError;

/// Structured `{success: true, message}` result for the JSON APIs.
pub fn api_ok(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({ "success": true, "message": message.into() })),
    )
        .into_response()
}

/// Like [`api_ok`] but carrying the id of a newly stored document.
pub fn api_ok_with_id(id: i64, message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({ "success": true, "id": id, "message": message.into() })),
    )
        .into_response()
}

/// Structured `{success: false, message}` result. Domain failures are always
/// surfaced this way, never as an error status.
pub fn api_fail(message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({ "success": false, "message": message.into() })),
    )
        .into_response()
}

/// Map a store failure on a view/API path that has no structured-result
/// contract: persistence failures are the one class allowed to surface as a
/// server error.
pub fn store_error_response(err: StoreError) -> axum::response::Response {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
