use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Every way a notification request can end short of a delivered email.
///
/// All variants are turned into a JSON response; none escape the handler.
#[derive(Debug, Error)]
pub enum RelayError {
    /// `to`, `subject` or `message` was missing, null or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The email provider answered with a non-success status.
    ///
    /// The provider's body is logged by the transport and never returned.
    #[error("Failed to send email")]
    Delivery { status: u16 },

    /// Parse failures, network failures, malformed provider replies.
    #[error("{0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingFields => StatusCode::BAD_REQUEST,
            RelayError::Delivery { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Unexpected(err.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_hides_provider_detail() {
        let err = RelayError::Delivery { status: 422 };
        assert_eq!(err.to_string(), "Failed to send email");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unexpected_error_echoes_message() {
        let err = RelayError::Unexpected("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_fields_is_bad_request() {
        let err = RelayError::MissingFields;
        assert_eq!(err.to_string(), "Missing required fields");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_json_error_becomes_unexpected() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = parse_err.to_string();
        let err = RelayError::from(parse_err);
        assert!(matches!(err, RelayError::Unexpected(ref msg) if *msg == expected));
    }
}
