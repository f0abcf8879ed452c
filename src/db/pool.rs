use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

/// Create a connection pool for the given database URL
///
/// Accepts any URL scheme the installed drivers understand (`postgres://`,
/// `postgresql://`, `sqlite://`).
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<AnyPool, sqlx::Error> {
    tracing::info!("Creating database connection pool...");

    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}
