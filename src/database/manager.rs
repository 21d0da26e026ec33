use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the connection pool and verify connectivity with a ping.
///
/// A failure here is fatal: the caller must not serve traffic.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    info!("database pool ready ({} connections max)", max_connections);
    Ok(pool)
}
