//! Protected view endpoints.
//!
//! Each handler assembles the data a rendering layer needs for one screen and
//! returns it as JSON; rendering itself is an external collaborator.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use milldesk_core::DocKind;
use milldesk_store::{documents, masters, totals, users, Catalog, StoreResult};

use crate::app::{dto, errors, AppState};
use crate::context::SessionContext;

/// GET `/dashboard` — operator/party lists plus both aggregate totals, and
/// the caller's name for the page chrome.
pub async fn dashboard(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<SessionContext>,
    Query(params): Query<dto::NoticeParams>,
) -> Response {
    match dashboard_payload(state.pool(), &ctx, params.notice).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => errors::store_error_response(err),
    }
}

async fn dashboard_payload(
    pool: &SqlitePool,
    ctx: &SessionContext,
    notice: Option<String>,
) -> StoreResult<Value> {
    Ok(json!({
        "view": "dashboard",
        "notice": notice,
        "username": ctx.username(),
        "operators": masters::list(pool, Catalog::Operators).await?,
        "parties": masters::list(pool, Catalog::Parties).await?,
        "production_totals": totals::production_totals(pool).await?,
        "sales_totals": totals::sales_totals(pool).await?,
    }))
}

/// GET `/masters` — all four reference catalogs.
pub async fn masters(Extension(state): Extension<Arc<AppState>>) -> Response {
    match masters_payload(state.pool()).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => errors::store_error_response(err),
    }
}

async fn masters_payload(pool: &SqlitePool) -> StoreResult<Value> {
    Ok(json!({
        "view": "masters",
        "operators": masters::list(pool, Catalog::Operators).await?,
        "parties": masters::list(pool, Catalog::Parties).await?,
        "machines": masters::list(pool, Catalog::Machines).await?,
        "items": masters::list(pool, Catalog::Items).await?,
    }))
}

/// GET `/entries` — catalogs, advisory next document numbers, today's date
/// and the caller's role (the entry screens adapt to it).
pub async fn entries(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<SessionContext>,
) -> Response {
    match entries_payload(state.pool(), &ctx).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => errors::store_error_response(err),
    }
}

async fn entries_payload(pool: &SqlitePool, ctx: &SessionContext) -> StoreResult<Value> {
    Ok(json!({
        "view": "entries",
        "operators": masters::list(pool, Catalog::Operators).await?,
        "parties": masters::list(pool, Catalog::Parties).await?,
        "machines": masters::list(pool, Catalog::Machines).await?,
        "items": masters::list(pool, Catalog::Items).await?,
        "next_prod": documents::next_number(pool, DocKind::Production).await?,
        "next_sale": documents::next_number(pool, DocKind::Sale).await?,
        "today": chrono::Utc::now().format("%Y-%m-%d").to_string(),
        "user_role": ctx.role(),
    }))
}

/// GET `/reports` — full document listings plus both totals. Admin-only via
/// the route policy.
pub async fn reports(Extension(state): Extension<Arc<AppState>>) -> Response {
    match reports_payload(state.pool()).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => errors::store_error_response(err),
    }
}

async fn reports_payload(pool: &SqlitePool) -> StoreResult<Value> {
    Ok(json!({
        "view": "reports",
        "productions": documents::list_productions(pool).await?,
        "sales": documents::list_sales(pool).await?,
        "production_totals": totals::production_totals(pool).await?,
        "sales_totals": totals::sales_totals(pool).await?,
    }))
}

/// GET `/help` — user administration data for admins, empty otherwise.
pub async fn help(
    Extension(state): Extension<Arc<AppState>>,
    Extension(ctx): Extension<SessionContext>,
) -> Response {
    let user_list = if ctx.role().is_admin() {
        match users::list(state.pool()).await {
            Ok(list) => list,
            Err(err) => return errors::store_error_response(err),
        }
    } else {
        Vec::new()
    };

    (
        StatusCode::OK,
        Json(json!({
            "view": "help",
            "users": user_list,
        })),
    )
        .into_response()
}
