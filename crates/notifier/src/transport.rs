//! Email transport capability.
//!
//! The handler only knows about [`EmailTransport`]; the concrete provider is
//! chosen at startup and injected through application state.

use async_trait::async_trait;
use thiserror::Error;

use relay_common::error::RelayError;

/// One delivery attempt's payload. The sender identity belongs to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// What the provider said about a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Accepted. The provider's id, if its reply carried one.
    Delivered { message_id: Option<String> },
    /// Non-success status, with the provider's raw body.
    Rejected { status: u16, detail: String },
}

/// Failures that prevented a provider verdict from being obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

impl From<TransportError> for RelayError {
    fn from(err: TransportError) -> Self {
        RelayError::Unexpected(err.to_string())
    }
}

impl DeliveryOutcome {
    /// Collapse into the provider id, or a [`RelayError::Delivery`] on rejection.
    pub fn into_result(self) -> Result<Option<String>, RelayError> {
        match self {
            DeliveryOutcome::Delivered { message_id } => Ok(message_id),
            DeliveryOutcome::Rejected { status, .. } => Err(RelayError::Delivery { status }),
        }
    }
}

/// Sends a single email. Implementations make exactly one attempt.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryOutcome, TransportError>;

    /// Short provider name used in logs.
    fn name(&self) -> &'static str;
}
