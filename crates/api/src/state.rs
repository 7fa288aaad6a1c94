//! Shared application state for the Axum server.

use std::sync::Arc;

use relay_common::config::AppConfig;
use relay_notifier::EmailTransport;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn EmailTransport>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(transport: Arc<dyn EmailTransport>, config: AppConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }
}
