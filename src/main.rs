use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cafe_board::{create_pool, routes, AppError, AppState, CafeStore, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafe_board=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cafe Board...");

    // Load configuration
    let config = Config::from_env().map_err(AppError::Config)?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;

    // Create the cafe table on first run
    let store = CafeStore::new(pool);
    store.ensure_table().await?;

    let addr: SocketAddr = config.server_address().parse()?;
    let state = AppState::new(store, config)?;
    let app = routes::router(state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
