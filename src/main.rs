use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use countries_api::app::{app, AppState};
use countries_api::config::AppConfig;
use countries_api::database::manager;
use countries_api::database::repository::CountryRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SECRET_KEY, DB_* etc.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env().context("loading configuration")?;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // An unreachable database at startup is fatal; do not serve traffic.
    let pool = manager::connect(&config.database_url, config.db_max_connections)
        .await
        .context("connecting to database")?;

    let port = config.port;
    let state = AppState {
        store: Arc::new(CountryRepository::new(pool)),
        config: Arc::new(config),
    };

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;

    tracing::info!("countries API listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
