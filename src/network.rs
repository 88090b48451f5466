//! Network constants for the Fortnite-API service.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://fortnite-api.com";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("fortnite-api-rust/", env!("CARGO_PKG_VERSION"));

/// Header carrying the rate-limit reset instant on 429 responses.
pub const RATELIMIT_RESET_HEADER: &str = "X-Ratelimit-Reset";

/// Showcase video links are this prefix followed by the video id.
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";
