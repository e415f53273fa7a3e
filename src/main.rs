//! lodge-server — hotel booking backend
//!
//! Long-running service that:
//! - Lists available rooms (capacity / category filters, cheapest first)
//! - Creates bookings atomically (customer resolution, room acquisition,
//!   occupancy flip) with no double booking under concurrency
//! - Records payments against bookings
//! - Releases rooms at checkout

mod api;
mod config;
mod db;
mod error;
mod models;
mod state;
mod util;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lodge_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting lodge-server (env: {})", config.environment);

    // Connect to Postgres and run migrations
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("lodge-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
