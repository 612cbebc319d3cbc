// Initialize configuration
// Set up logging
// Build the dashboard service (live or mock)
// Start HTTP server with graceful shutdown

use merchant_feed_service::{api, config::Config, state::AppState};

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting merchant-feed-service");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let shutdown = CancellationToken::new();
    let addr = format!("{}:{}", config.server_host, config.server_port);

    // Create shared state
    let app_state = Arc::new(AppState::new(config, shutdown.clone()));
    tracing::info!("Dashboard service ready in {:?} mode", app_state.dashboard.data_mode());

    // Start HTTP server
    let app = api::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down, abandoning in-flight dashboard loads");
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
