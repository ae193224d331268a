//! Login, logout and the root redirect.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};

use milldesk_auth::{Session, SessionToken};
use milldesk_store::users;

use crate::app::{dto, errors, AppState};
use crate::middleware::{self, SESSION_COOKIE};

/// GET `/` — dashboard when a live session is presented, login otherwise.
pub async fn index(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    match middleware::resolve_session(&headers, &state.sessions) {
        Some(_) => Redirect::to("/dashboard").into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

/// GET `/login` — login view model; already-authenticated callers are sent
/// back to the dashboard.
pub async fn login_view(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<dto::NoticeParams>,
    headers: HeaderMap,
) -> Response {
    if middleware::resolve_session(&headers, &state.sessions).is_some() {
        return Redirect::to("/dashboard").into_response();
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "view": "login",
            "notice": params.notice,
        })),
    )
        .into_response()
}

/// POST `/login` — validate credentials and establish a session.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Form(form): Form<dto::LoginForm>,
) -> Response {
    let user = match users::validate(state.pool(), &form.username, &form.password).await {
        Ok(user) => user,
        Err(err) => return errors::store_error_response(err),
    };

    let Some(user) = user else {
        return middleware::redirect_with_notice("/login", "invalid_credentials");
    };

    let token = state.sessions.create(Session {
        user_id: user.id,
        username: user.username.clone(),
        role: user.role,
    });
    tracing::info!(username = %user.username, role = %user.role, "login");

    let mut response = Redirect::to("/dashboard").into_response();
    set_cookie(&mut response, session_cookie(token));
    response
}

/// GET `/logout` — destroy the session, if any, and clear the cookie. Public:
/// an anonymous caller still gets the cleared cookie and the notice.
pub async fn logout(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    if let Some((token, session)) = middleware::resolve_session(&headers, &state.sessions) {
        state.sessions.destroy(&token);
        tracing::info!(username = %session.username, "logout");
    }

    let mut response = middleware::redirect_with_notice("/login", "logged_out");
    set_cookie(&mut response, clear_cookie());
    response
}

fn session_cookie(token: SessionToken) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly")
}

fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}

fn set_cookie(response: &mut Response, cookie: String) {
    match HeaderValue::try_from(cookie) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(err) => tracing::error!("failed to encode session cookie: {err}"),
    }
}
