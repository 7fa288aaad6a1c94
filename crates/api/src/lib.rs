//! HTTP surface of the notification relay.
//!
//! Endpoints:
//! - ANY /send_email_notification (and /) — validate, render and deliver one notification
//! - GET /health — liveness probe

pub mod routes;
pub mod state;
