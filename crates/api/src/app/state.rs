//! Shared application state.

use std::sync::Arc;

use sqlx::SqlitePool;

use milldesk_auth::SessionStore;
use milldesk_store::Db;

/// State shared by every handler: the database pool and the session store.
#[derive(Debug, Clone)]
pub struct AppState {
    pool: SqlitePool,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(db: &Db) -> Self {
        Self {
            pool: db.pool().clone(),
            sessions: Arc::new(SessionStore::new()),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
