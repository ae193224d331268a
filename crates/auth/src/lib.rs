//! `milldesk-auth` — identity, credentials and session state.
//!
//! Everything here is infrastructure-free: password digests, the role model,
//! the in-process session store and the per-role route policy. Persistence of
//! user records lives in `milldesk-store`; HTTP wiring in `milldesk-api`.

pub mod password;
pub mod policy;
pub mod role;
pub mod session;

pub use password::{hash_password, verify_password};
pub use policy::route_allowed;
pub use role::Role;
pub use session::{Session, SessionStore, SessionToken};
