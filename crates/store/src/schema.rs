//! Schema creation and first-run seeding.

use anyhow::Context;
use sqlx::{Row, SqlitePool};

use milldesk_auth::{hash_password, Role};

/// Username/password seeded on a fresh database.
///
/// Well-known by design: a deployment is expected to rotate this credential
/// out-of-band immediately after first run.
pub const DEFAULT_ADMIN_USERNAME: &str = "Admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin";

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        username      TEXT UNIQUE,
        password_hash TEXT,
        role          TEXT DEFAULT 'user'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS operators (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT UNIQUE,
        mobile     TEXT,
        address    TEXT,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS parties (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT UNIQUE,
        mobile     TEXT,
        address    TEXT,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS machines (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT UNIQUE,
        remarks    TEXT,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT UNIQUE,
        type       TEXT,
        created_at TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS productions (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        number      TEXT,
        date        TEXT,
        shift       TEXT,
        operator_id INTEGER,
        data        TEXT,
        created_at  TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        order_no   TEXT,
        date       TEXT,
        party_id   INTEGER,
        data       TEXT,
        created_at TEXT
    )
    "#,
];

/// Create all tables (idempotent) and seed the default administrator when the
/// users table is empty.
pub async fn init(pool: &SqlitePool) -> anyhow::Result<()> {
    for ddl in TABLES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .context("failed to create table")?;
    }

    seed_default_admin(pool).await
}

async fn seed_default_admin(pool: &SqlitePool) -> anyhow::Result<()> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM users")
        .fetch_one(pool)
        .await
        .context("failed to count users")?;
    let count: i64 = row.try_get("n")?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)")
        .bind(DEFAULT_ADMIN_USERNAME)
        .bind(hash_password(DEFAULT_ADMIN_PASSWORD))
        .bind(Role::Admin.as_str())
        .execute(pool)
        .await
        .context("failed to seed default administrator")?;

    tracing::warn!(
        username = DEFAULT_ADMIN_USERNAME,
        "seeded default administrator with well-known credentials; change them before exposing the service"
    );

    Ok(())
}
