use axum::{
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod documents;
pub mod masters;
pub mod pages;
pub mod users;

/// Router for all session-protected endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route("/masters", get(pages::masters))
        .route("/entries", get(pages::entries))
        .route("/reports", get(pages::reports))
        .route("/help", get(pages::help))
        .route("/api/add_master", post(masters::add_master))
        .route("/api/delete_master", post(masters::delete_master))
        .route("/api/save_production", post(documents::save_production))
        .route("/api/save_sale", post(documents::save_sale))
        .route("/api/add_user", post(users::add_user))
        .route("/api/delete_user", post(users::delete_user))
}
