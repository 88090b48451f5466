//! Blocking transport handle.
//!
//! Mirrors [`HttpClient`](crate::http::HttpClient) call for call. The
//! underlying `reqwest::blocking` client runs its own runtime, so it must not
//! be created, used or dropped from inside an async task.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::{decode_success, error_for_status, ClientSettings, Route};

/// Blocking transport for the Fortnite-API.
#[derive(Debug, Clone)]
pub struct SyncHttpClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    pool: RwLock<Option<Client>>,
    settings: ClientSettings,
}

impl SyncHttpClient {
    pub(crate) fn new(pool: Client, settings: ClientSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                pool: RwLock::new(Some(pool)),
                settings,
            }),
        }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.inner.settings
    }

    /// Whether the connection pool has been released.
    pub fn is_closed(&self) -> bool {
        self.inner
            .pool
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Release the connection pool. Later requests fail with `ClientClosed`.
    pub(crate) fn close(&self) {
        let released = self
            .inner
            .pool
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            tracing::debug!("HTTP connection pool released");
        }
    }

    fn pool(&self) -> ApiResult<Client> {
        self.inner
            .pool
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ApiError::ClientClosed)
    }

    /// GET a route and return the payload with the `data` envelope removed.
    pub fn request(&self, route: &Route) -> ApiResult<Value> {
        let url = route.url(&self.inner.settings.base_url);
        let body = self.execute(&url)?;
        decode_success(&body, self.inner.settings.codec.as_ref())
    }

    /// GET an absolute URL and return the raw body.
    pub fn request_bytes(&self, url: &str) -> ApiResult<Vec<u8>> {
        self.execute(url)
    }

    /// Issue the request, retrying only on 429.
    fn execute(&self, url: &str) -> ApiResult<Vec<u8>> {
        let pool = self.pool()?;
        let settings = &self.inner.settings;
        let max_attempts = settings.rate_limit.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let response = pool.get(url).send()?;
            let status = response.status();
            tracing::debug!(method = "GET", url = %url, status = %status, attempt, "Request completed");

            if status.is_success() {
                return Ok(response.bytes()?.to_vec());
            }

            let headers = response.headers().clone();
            let body = match response.bytes() {
                Ok(body) => body.to_vec(),
                Err(e) => {
                    tracing::warn!("Failed to read error response body: {}", e);
                    Vec::new()
                }
            };

            if status == StatusCode::TOO_MANY_REQUESTS && attempt < max_attempts {
                let delay = settings.rate_limit.wait_for(&headers, chrono::Utc::now());
                tracing::debug!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "Rate limited, retrying request"
                );
                std::thread::sleep(delay);
                continue;
            }

            return Err(error_for_status(status, &body, settings.codec.as_ref(), attempt));
        }
    }
}
