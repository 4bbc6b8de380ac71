//! waitlist-gateway server entry point.
//!
//! Starts the Axum HTTP server with the waitlist REST endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use waitlist_gateway::api;
use waitlist_gateway::app_state::AppState;
use waitlist_gateway::config::{LogFormat, WaitlistConfig};
use waitlist_gateway::persistence::{InMemoryStore, PostgresStore, WaitlistStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = WaitlistConfig::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting waitlist-gateway");

    // Build persistence layer
    let store = build_store(&config).await?;

    // Build application state and router
    let app = api::build_app(AppState::new(store));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn build_store(
    config: &WaitlistConfig,
) -> Result<Arc<dyn WaitlistStore>, Box<dyn std::error::Error>> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled; entries are kept in memory only");
        return Ok(Arc::new(InMemoryStore::new()));
    }

    let store = PostgresStore::connect(config).await?;
    if config.run_migrations {
        store.migrate().await?;
        tracing::info!("database migrations applied");
    }
    Ok(Arc::new(store))
}
