use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body surfaced to the UI after a failed backend call.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Checks if this error response has details.
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.details.is_some()
    }

    /// Normalizes the error bodies the hosted backend emits.
    ///
    /// The row API answers `{"message", "details", "hint"}`, the auth API
    /// answers `{"error", "error_description"}` or `{"msg"}`. Anything that is
    /// not JSON is kept verbatim; an empty body falls back to `fallback`.
    #[must_use]
    pub fn from_backend_body(body: &str, fallback: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::new(fallback);
        }

        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) else {
            return Self::new(trimmed);
        };

        let text = |key: &str| {
            map.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let message = text("message")
            .or_else(|| text("error_description"))
            .or_else(|| text("msg"))
            .or_else(|| text("error"))
            .unwrap_or_else(|| fallback.to_string());
        let details = text("details").or_else(|| text("hint"));

        Self { message, details }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}
