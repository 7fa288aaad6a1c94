//! Notification relay server binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use relay_common::config::AppConfig;
use relay_notifier::ResendTransport;

use relay_api::routes::create_router;
use relay_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("relay_api=debug,relay_notifier=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting notification relay...");

    // Load configuration
    let config = AppConfig::from_env()?;
    if config.resend_api_key.is_none() {
        tracing::warn!("RESEND_API_KEY is not set; deliveries will be rejected by the provider");
    }

    let transport = ResendTransport::from_config(&config);
    tracing::info!(endpoint = %config.resend_api_url, "Resend transport configured");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    // Build application state
    let state = AppState::new(Arc::new(transport), config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    tracing::info!("Notification relay stopped.");
    Ok(())
}
