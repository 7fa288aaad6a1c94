//! Health check endpoint.
//!
//! Reports which email transport the relay delivers through and whether
//! interpolated fields are escaped, without contacting the provider.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "notify-relay",
        "version": env!("CARGO_PKG_VERSION"),
        "transport": state.transport.name(),
        "escape_html": state.config.escape_html,
        "provider_key_configured": state.config.resend_api_key.is_some()
    }))
}
