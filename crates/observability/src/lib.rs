//! `milldesk-observability` — structured logging for the binary and tests.

pub mod tracing;

/// Set up logging for the process. Idempotent.
pub fn init() {
    tracing::init();
}
