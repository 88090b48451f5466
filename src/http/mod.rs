//! HTTP layer: one GET per call, status mapping, rate-limit retry.
//!
//! [`HttpClient`] (async) and [`SyncHttpClient`] (blocking) share the route
//! building, error mapping and envelope handling in this module, so both
//! behave identically for the same response.

pub mod blocking;
pub mod client;
pub mod codec;
pub mod retry;
pub mod route;

pub use blocking::SyncHttpClient;
pub use client::HttpClient;
pub use codec::{CodecError, JsonCodec, SerdeJsonCodec};
pub use retry::RateLimitRetry;
pub use route::{QueryValue, Route};

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ApiError, ErrorResponse};
use crate::shared::{GameLanguage, ResponseFlags};

/// Settings shared by a client and every object it hands out.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) default_language: GameLanguage,
    pub(crate) response_flags: ResponseFlags,
    pub(crate) beta: bool,
    pub(crate) rate_limit: RateLimitRetry,
    pub(crate) codec: Arc<dyn JsonCodec>,
}

impl ClientSettings {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn default_language(&self) -> &GameLanguage {
        &self.default_language
    }

    pub fn response_flags(&self) -> ResponseFlags {
        self.response_flags
    }

    pub fn beta(&self) -> bool {
        self.beta
    }

    pub fn rate_limit(&self) -> &RateLimitRetry {
        &self.rate_limit
    }

    /// Language for a call: the override if given, else the client default.
    pub(crate) fn language(&self, language: Option<GameLanguage>) -> GameLanguage {
        language.unwrap_or_else(|| self.default_language.clone())
    }

    /// Flags for a call: the override if given, else the client default.
    pub(crate) fn flags(&self, flags: Option<ResponseFlags>) -> ResponseFlags {
        flags.unwrap_or(self.response_flags)
    }

    pub(crate) fn require_api_key(&self) -> Result<(), ApiError> {
        if self.api_key.is_none() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(())
    }

    pub(crate) fn require_beta(&self) -> Result<(), ApiError> {
        if !self.beta {
            return Err(ApiError::BetaAccessNotEnabled);
        }
        Ok(())
    }
}

/// Map a non-success status and its body to an [`ApiError`].
pub(crate) fn error_for_status(
    status: StatusCode,
    body: &[u8],
    codec: &dyn JsonCodec,
    attempts: u32,
) -> ApiError {
    let response = match codec.decode(body) {
        Ok(value) => ErrorResponse::from_value(value),
        Err(_) => ErrorResponse::default(),
    };
    let message = response.get_message();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited { attempts, message },
        StatusCode::SERVICE_UNAVAILABLE => ApiError::ServiceUnavailable(message),
        _ => ApiError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

/// Decode a success body and strip the `data` envelope when present.
pub(crate) fn decode_success(body: &[u8], codec: &dyn JsonCodec) -> Result<Value, ApiError> {
    let value = codec
        .decode(body)
        .map_err(|e| ApiError::Decode(format!("Failed to decode response: {}", e)))?;
    Ok(unwrap_envelope(value))
}

fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}
