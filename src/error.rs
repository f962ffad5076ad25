//! Application-level errors reported by the Torn API.
//!
//! Torn answers failed calls with a 200 status and a body shaped like
//! `{"error": {"error": "Incorrect key", "code": 2}}`, so the transport
//! sees a success. [`TornApiError::from_payload`] recognises that envelope.

use serde_json::Value;

/// An error envelope returned by the Torn API.
///
/// `Display` renders only the message, so callers see exactly what Torn
/// sent. The numeric code is kept and available through [`TornApiError::code`];
/// reach it from an `anyhow::Error` with `downcast_ref::<TornApiError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TornApiError {
    message: String,
    code: Option<i64>,
}

impl TornApiError {
    pub fn new(message: impl Into<String>, code: Option<i64>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// Match a response payload against the error envelope.
    ///
    /// Only an object whose `error` member is itself an object carrying an
    /// `error` key qualifies. `{"error": "text"}`, `{"errors": []}` and
    /// `{"error": {"code": 1}}` are ordinary data and yield `None`.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let envelope = payload.as_object()?.get("error")?.as_object()?;
        let message = message_text(envelope.get("error")?);
        let code = envelope.get("code").and_then(Value::as_i64);

        Some(Self { message, code })
    }
}

/// Render a non-string message: arrays comma-joined, anything else as JSON.
fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => message_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

impl std::fmt::Display for TornApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TornApiError {}
