//! Rate-limit retry policy.
//!
//! Only 429 responses are retried; every other status fails on the first
//! response.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

use crate::network::RATELIMIT_RESET_HEADER;
use crate::shared::parse_time;

/// Default number of requests made for one call before giving up on a 429.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// How a client behaves when the server answers 429.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitRetry {
    /// Total requests per call, including the first one (minimum 1)
    pub max_attempts: u32,
    /// Wait between attempts when the server sends no reset time
    pub delay: Duration,
    /// Upper bound on a wait derived from the reset header
    pub max_wait: Duration,
}

impl Default for RateLimitRetry {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::from_secs(1),
            max_wait: Duration::from_secs(60),
        }
    }
}

impl RateLimitRetry {
    /// Create a policy making `max_attempts` requests per call.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// Set the fallback delay between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the cap on header-derived waits.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self::new(1)
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Wait before the next attempt, from the reset header if usable.
    pub(crate) fn wait_for(&self, headers: &HeaderMap, now: DateTime<Utc>) -> Duration {
        let reset = headers
            .get(RATELIMIT_RESET_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_reset);

        match reset {
            Some(reset) => (reset - now)
                .to_std()
                .unwrap_or(Duration::ZERO)
                .min(self.max_wait),
            None => self.delay,
        }
    }
}

/// The reset header is either an API timestamp or epoch seconds.
fn parse_reset(raw: &str) -> Option<DateTime<Utc>> {
    parse_time(raw).or_else(|| {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    })
}
