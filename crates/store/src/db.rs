//! Database handle.

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Name of the SQLite file inside the data directory.
const DB_FILE: &str = "milldesk.db";

/// Handle to the application database (a shared SQLite pool).
#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Open (creating on first run) the database under `data_dir`.
    ///
    /// The data directory is created if absent; this is the only on-disk
    /// state the application owns.
    pub async fn open(data_dir: &Path) -> anyhow::Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory at {data_dir:?}"))?;

        let db_path = data_dir.join(DB_FILE);
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("failed to open SQLite database at {db_path:?}"))?;

        Ok(Self { pool })
    }

    /// Open an in-memory database (tests).
    ///
    /// Pinned to a single never-expiring connection: each SQLite `:memory:`
    /// connection is its own database, so the pool must not rotate it.
    pub async fn open_in_memory() -> anyhow::Result<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").context("invalid sqlite url")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("failed to open in-memory SQLite database")?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
