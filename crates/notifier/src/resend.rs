//! Resend HTTP API transport.
//!
//! POSTs `{ from, to, subject, html }` to the emails endpoint with a bearer
//! key. A single attempt is made and no client-side timeout is applied.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use relay_common::config::AppConfig;

use crate::transport::{DeliveryOutcome, EmailTransport, OutboundEmail, TransportError};

/// Request body for `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Success reply from `POST /emails`.
#[derive(Debug, Deserialize)]
struct SendEmailReply {
    #[serde(default)]
    id: Option<String>,
}

/// [`EmailTransport`] backed by the Resend API.
#[derive(Clone)]
pub struct ResendTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl ResendTransport {
    /// Create a transport for `endpoint`.
    ///
    /// The key is not checked here; an empty key is still sent and left for
    /// the provider to reject.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.unwrap_or_default(),
            from: from.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.resend_api_url.clone(),
            config.resend_api_key.clone(),
            config.email_from.clone(),
        )
    }
}

#[async_trait]
impl EmailTransport for ResendTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryOutcome, TransportError> {
        let body = SendEmailBody {
            from: &self.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await?;
            tracing::error!(
                status = status.as_u16(),
                detail = %detail,
                "Email send failed"
            );
            return Ok(DeliveryOutcome::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let bytes = response.bytes().await?;
        let reply: SendEmailReply = serde_json::from_slice(&bytes)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            message_id = reply.id.as_deref().unwrap_or("-"),
            to = %email.to,
            "Email accepted by Resend"
        );

        Ok(DeliveryOutcome::Delivered {
            message_id: reply.id,
        })
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
