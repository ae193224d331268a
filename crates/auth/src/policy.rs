//! Per-role route policy.
//!
//! Administrators may reach every protected route. Standard users are held to
//! a fixed allow-list: the dashboard, reference-data view, entry screens,
//! production save, help and logout. Everything else (reports, sale save,
//! master and user management) requires the admin role.

use crate::Role;

/// Protected paths a standard user may reach.
const USER_ALLOWED_PATHS: &[&str] = &[
    "/dashboard",
    "/masters",
    "/entries",
    "/help",
    "/logout",
    "/api/save_production",
];

/// Whether `role` may access the protected route at `path`.
pub fn route_allowed(role: Role, path: &str) -> bool {
    if role.is_admin() {
        return true;
    }
    USER_ALLOWED_PATHS.contains(&path)
}
