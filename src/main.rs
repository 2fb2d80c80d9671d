//! LabSync - Application Entry Point
//!
//! This is the main entry point for the LabSync verification server.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labsync::{
    config::Config,
    db::{self, PgLabStore},
    hackerrank::HackerRankClient,
    handlers,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LabSync server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // HackerRank client
    let feed = HackerRankClient::new(&config.hackerrank)?;
    tracing::info!(
        base_url = %config.hackerrank.base_url,
        recent_limit = config.hackerrank.recent_limit,
        "HackerRank client ready"
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    // Create application state
    let state = AppState::new(Arc::new(PgLabStore::new(db_pool)), Arc::new(feed), config);

    // Start the server
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, handlers::app(state)).await?;

    Ok(())
}
