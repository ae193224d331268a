use std::sync::Arc;

use anyhow::Context;

use milldesk_api::app::{build_app, AppState};
use milldesk_api::config::Config;
use milldesk_store::{schema, Db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    milldesk_observability::init();

    let config = Config::from_env();
    let db = Db::open(&config.data_dir).await?;
    schema::init(db.pool()).await?;

    let state = Arc::new(AppState::new(&db));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
