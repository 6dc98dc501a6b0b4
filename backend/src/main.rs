use anyhow::Context;
use backend::{api, config::Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = api::router(api::AppState::new(config.search_settings()));

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(
        addr = %config.addr,
        depth = config.depth,
        perspective = %config.perspective,
        "best-move API listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
