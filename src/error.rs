//! Error types for the Fortnite-API client.

use serde_json::Value;
use thiserror::Error;

/// Fallback message used when the server does not send one.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error message not provided!";

/// Error type shared by the async and blocking clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API key missing or rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Still rate limited after every allowed attempt (429)
    #[error("Rate limited after {attempts} attempts: {message}")]
    RateLimited { attempts: u32, message: String },

    /// Service unavailable (503)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// The caller left out a parameter the endpoint needs
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Endpoint requires an API key but the client has none
    #[error("An API key is required for this endpoint")]
    MissingApiKey,

    /// A successful response lacked a required field or had the wrong shape
    #[error("Malformed payload: {entity}.{field}: {reason}")]
    MalformedPayload {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Beta endpoint called without opting in
    #[error("Beta access is not enabled on this client")]
    BetaAccessNotEnabled,

    /// Asset resize request that the asset cannot honor
    #[error("Invalid resize: {0}")]
    InvalidResize(String),

    /// Response body could not be decoded as JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The client was closed and its connection pool released
    #[error("Client is closed")]
    ClientClosed,
}

impl ApiError {
    /// Build a malformed-payload error for `entity.field`.
    pub(crate) fn malformed(
        entity: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ApiError::MalformedPayload {
            entity,
            field,
            reason: reason.into(),
        }
    }

    /// HTTP status this error came from, if it came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::NotFound(_) => Some(404),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::ServiceUnavailable(_) => Some(503),
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body format from the API.
///
/// The message is either top level (`{"status": 404, "error": "..."}`) or
/// nested under `data`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorResponse {
    /// Status echoed by the server
    #[serde(default)]
    pub status: Option<u16>,
    /// Human-readable error message
    #[serde(default, alias = "message")]
    pub error: Option<String>,
    /// Envelope payload, which may carry its own `error`
    #[serde(default)]
    pub data: Option<Value>,
}

impl ErrorResponse {
    /// Build an error response from a parsed JSON body.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Get the error message, preferring `data.error` over `error`.
    pub fn get_message(&self) -> String {
        self.data
            .as_ref()
            .and_then(|data| data.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_top_level() {
        let body = ErrorResponse::from_value(json!({"status": 404, "error": "the requested cosmetic was not found"}));
        assert_eq!(body.get_message(), "the requested cosmetic was not found");
    }

    #[test]
    fn test_message_nested_in_data() {
        let body = ErrorResponse::from_value(json!({"status": 400, "data": {"error": "name is required"}}));
        assert_eq!(body.get_message(), "name is required");
    }

    #[test]
    fn test_message_missing() {
        let body = ErrorResponse::from_value(json!("not an object"));
        assert_eq!(body.get_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_status_of_errors() {
        assert_eq!(ApiError::NotFound("x".into()).status(), Some(404));
        assert_eq!(
            ApiError::Server { status: 418, message: "teapot".into() }.status(),
            Some(418)
        );
        assert_eq!(ApiError::BetaAccessNotEnabled.status(), None);
    }
}
