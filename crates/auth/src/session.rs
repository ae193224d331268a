//! In-process session store.
//!
//! A session is created at login and destroyed at logout; the token travels
//! in a cookie and keys a server-side map. The store is owned by the
//! application state, passed explicitly where needed — no process-global
//! mutable state.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::RwLock;

use uuid::Uuid;

use crate::Role;

/// Opaque session token carried by the client cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Authenticated identity bound to one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Server-side session map keyed by token.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<SessionToken, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and hand back its token.
    pub fn create(&self, session: Session) -> SessionToken {
        let token = SessionToken::new();
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(token, session);
        token
    }

    pub fn get(&self, token: &SessionToken) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(token)
            .cloned()
    }

    /// Drop a session. Succeeds whether or not the token was live.
    pub fn destroy(&self, token: &SessionToken) {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(token);
    }
}
