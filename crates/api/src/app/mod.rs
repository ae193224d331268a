//! HTTP application wiring (Axum router + shared state).
//!
//! Layout:
//! - `state.rs`: shared application state (database pool + session store)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent JSON responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(state: Arc<AppState>) -> Router {
    let session_state = middleware::SessionState {
        sessions: state.sessions.clone(),
    };

    // Protected routes: require a live session + route policy.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        session_state,
        middleware::session_middleware,
    ));

    Router::new()
        .route("/", get(routes::auth::index))
        .route(
            "/login",
            get(routes::auth::login_view).post(routes::auth::login),
        )
        .route("/logout", get(routes::auth::logout))
        .merge(protected)
        .layer(Extension(state))
        .layer(ServiceBuilder::new())
}
