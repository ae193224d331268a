//! Session middleware.
//!
//! Resolves the session cookie against the server-side store and enforces the
//! per-role route policy. Violations never hard-fail: an unauthenticated
//! request is redirected to the login view, an under-privileged one to the
//! dashboard, each with a user-visible notice.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use milldesk_auth::{route_allowed, Session, SessionStore, SessionToken};

use crate::context::SessionContext;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "milldesk_session";

#[derive(Clone)]
pub struct SessionState {
    pub sessions: Arc<SessionStore>,
}

pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some((_, session)) = resolve_session(req.headers(), &state.sessions) else {
        return redirect_with_notice("/login", "login_required");
    };

    if !route_allowed(session.role, req.uri().path()) {
        return redirect_with_notice("/dashboard", "access_denied");
    }

    req.extensions_mut().insert(SessionContext::new(session));

    next.run(req).await
}

/// Look up the live session referenced by the request's cookie, if any.
pub fn resolve_session(
    headers: &HeaderMap,
    sessions: &SessionStore,
) -> Option<(SessionToken, Session)> {
    let token = extract_session_token(headers)?;
    let session = sessions.get(&token)?;
    Some((token, session))
}

/// Redirect to a safe view with a notice the rendering layer can surface.
pub fn redirect_with_notice(path: &str, notice: &str) -> Response {
    Redirect::to(&format!("{path}?notice={notice}")).into_response()
}

fn extract_session_token(headers: &HeaderMap) -> Option<SessionToken> {
    for header in headers.get_all(header::COOKIE) {
        let Ok(raw) = header.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            if let Some(value) = pair.trim().strip_prefix(SESSION_COOKIE) {
                if let Some(value) = value.strip_prefix('=') {
                    if let Ok(token) = value.trim().parse() {
                        return Some(token);
                    }
                }
            }
        }
    }
    None
}
