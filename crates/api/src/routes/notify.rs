//! Notification relay route.
//!
//! One invocation is one straight pass: preflight short-circuit, parse,
//! validate, render, a single delivery attempt, then translation of the
//! outcome into a JSON response. Every failure becomes a response here.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use tracing::Instrument;
use uuid::Uuid;

use relay_common::error::RelayError;
use relay_common::types::{NotificationRequest, SendSuccess};
use relay_notifier::{OutboundEmail, render_email};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(send_notification))
        .route("/send_email_notification", any(send_notification))
}

/// ANY /send_email_notification — relay one notification email.
///
/// `OPTIONS` answers the CORS preflight with an empty 200 without touching
/// the body. Any other method reads the body as JSON regardless of its
/// `Content-Type`. The body is buffered here rather than by an extractor, so
/// no size limit applies and read failures go through the JSON error path.
async fn send_notification(State(state): State<AppState>, request: Request) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let span = tracing::info_span!(
        "notification",
        request_id = %Uuid::new_v4(),
        kind = tracing::field::Empty,
    );

    let result = async {
        let result = relay(&state, request.into_body()).await;
        match &result {
            Ok(success) => tracing::debug!(message_id = ?success.message_id, "Notification relayed"),
            Err(RelayError::MissingFields) => {
                tracing::warn!("Rejected notification with missing required fields")
            }
            // Provider detail was already logged by the transport.
            Err(RelayError::Delivery { status }) => {
                tracing::warn!(status, "Provider rejected notification")
            }
            Err(RelayError::Unexpected(msg)) => tracing::error!(error = %msg, "Error"),
        }
        result
    }
    .instrument(span)
    .await;

    match result {
        Ok(success) => Json(success).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn relay(state: &AppState, body: Body) -> Result<SendSuccess, RelayError> {
    let body = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| RelayError::Unexpected(e.to_string()))?;
    let notification = NotificationRequest::from_slice(&body)?.validate()?;
    tracing::Span::current().record("kind", notification.kind.as_str());

    let html = render_email(&notification, state.config.escape_html)
        .map_err(|e| RelayError::Unexpected(e.to_string()))?;
    let email = OutboundEmail {
        to: notification.to,
        subject: notification.subject,
        html,
    };

    tracing::debug!(
        transport = state.transport.name(),
        to = %email.to,
        "Delivering notification"
    );

    let message_id = state.transport.send(&email).await?.into_result()?;
    Ok(SendSuccess::new(message_id))
}
