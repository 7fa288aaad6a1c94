use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RelayError;

/// Inbound notification payload, exactly as the caller sent it.
///
/// Every field is optional at the wire level so that "missing", `null` and
/// `""` can all be treated the same way by [`NotificationRequest::validate`].
/// The required fields also read `false` and `0` as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationRequest {
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub subject: Option<String>,
    #[serde(default, alias = "fromUser")]
    pub from_user: Option<String>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub message: Option<String>,
    /// Notification category tag. Carried through for logging only.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A notification whose required fields are known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNotification {
    pub to: String,
    pub subject: String,
    pub from_user: String,
    pub message: String,
    pub kind: String,
}

impl NotificationRequest {
    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Check that `to`, `subject` and `message` are present and non-empty.
    ///
    /// `from_user` and `kind` are never checked; absent values become `""`.
    pub fn validate(self) -> Result<ValidatedNotification, RelayError> {
        let (Some(to), Some(subject), Some(message)) = (
            non_empty(self.to),
            non_empty(self.subject),
            non_empty(self.message),
        ) else {
            return Err(RelayError::MissingFields);
        };

        Ok(ValidatedNotification {
            to,
            subject,
            from_user: self.from_user.unwrap_or_default(),
            message,
            kind: self.kind.unwrap_or_default(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Read a string field, mapping `null`, `false` and `0` to `None`.
///
/// Any other non-string value is still a type error.
fn falsy_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(de::Error::custom(format!(
            "invalid type: {}, expected a string",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Success body returned to the caller once the provider accepted the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendSuccess {
    pub success: bool,
    /// Provider-assigned id. Omitted when the provider reply had none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl SendSuccess {
    pub fn new(message_id: Option<String>) -> Self {
        Self {
            success: true,
            message_id,
        }
    }
}
