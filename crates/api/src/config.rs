//! Process configuration from the environment.

use std::path::PathBuf;

/// Runtime configuration.
///
/// Two knobs only: where the SQLite data directory lives and what address to
/// bind. Everything else is fixed by design.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("MILLDESK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let bind_addr =
            std::env::var("MILLDESK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self { data_dir, bind_addr }
    }
}
