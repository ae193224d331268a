//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: JSON lines on stdout, level taken
/// from `RUST_LOG` with `info` as the floor when unset.
///
/// A second call finds the global subscriber already taken and does nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .try_init();
}
