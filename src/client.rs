//! Client construction and the two client variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use fortnite_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let client = Client::builder()
//!         .api_key("your-key")
//!         .default_language(GameLanguage::German)
//!         .build()?;
//!
//!     let shop = client.shop().fetch(FetchOptions::new()).await?;
//!     println!("{} entries", shop.entries.as_ref().map_or(0, |e| e.len()));
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::domain::aes::{AesKeys, SyncAesKeys};
use crate::domain::banner::{Banners, SyncBanners};
use crate::domain::cosmetics::{Cosmetics, SyncCosmetics};
use crate::domain::creator_code::{CreatorCodes, SyncCreatorCodes};
use crate::domain::display_asset::{Beta, SyncBeta};
use crate::domain::map::{MapClient, SyncMapClient};
use crate::domain::news::{NewsClient, SyncNewsClient};
use crate::domain::playlist::{Playlists, SyncPlaylists};
use crate::domain::shop::{ShopClient, SyncShopClient};
use crate::domain::stats::{Stats, SyncStats};
use crate::error::{ApiError, ApiResult};
use crate::http::{ClientSettings, HttpClient, JsonCodec, RateLimitRetry, SerdeJsonCodec, SyncHttpClient};
use crate::network::{DEFAULT_API_URL, USER_AGENT as USER_AGENT_VALUE};
use crate::parity::Operation;
use crate::shared::{GameLanguage, ResponseFlags};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Client`] and [`SyncClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    default_language: GameLanguage,
    response_flags: ResponseFlags,
    beta: bool,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    rate_limit: RateLimitRetry,
    codec: Arc<dyn JsonCodec>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            default_language: GameLanguage::default(),
            response_flags: ResponseFlags::none(),
            beta: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            rate_limit: RateLimitRetry::default(),
            codec: Arc::new(SerdeJsonCodec),
        }
    }

    /// Point the client at another deployment, e.g. a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// API key sent as `Authorization`. Required for stats.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Language used when a call does not pass one.
    pub fn default_language(mut self, language: GameLanguage) -> Self {
        self.default_language = language;
        self
    }

    /// Response flags used when a call does not pass any.
    pub fn response_flags(mut self, flags: ResponseFlags) -> Self {
        self.response_flags = flags;
        self
    }

    /// Opt in to the `/beta` endpoints.
    pub fn beta(mut self, enabled: bool) -> Self {
        self.beta = enabled;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Retry policy for 429 responses.
    pub fn rate_limit(mut self, rate_limit: RateLimitRetry) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Decoder for response bodies.
    pub fn json_codec(mut self, codec: impl JsonCodec + 'static) -> Self {
        self.codec = Arc::new(codec);
        self
    }

    fn headers(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| ApiError::MalformedRequest(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::MalformedRequest(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::MalformedRequest(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    fn settings(self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url,
            api_key: self.api_key,
            default_language: self.default_language,
            response_flags: self.response_flags,
            beta: self.beta,
            rate_limit: self.rate_limit,
            codec: self.codec,
        }
    }

    /// Build the async client.
    pub fn build(self) -> ApiResult<Client> {
        let pool = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(self.headers()?)
            .build()?;
        tracing::debug!(base_url = %self.base_url, beta = self.beta, "Built async client");
        Ok(Client {
            http: HttpClient::new(pool, self.settings()),
        })
    }

    /// Build the blocking client.
    ///
    /// Must not be called from inside an async runtime.
    pub fn build_blocking(self) -> ApiResult<SyncClient> {
        let pool = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(self.headers()?)
            .build()?;
        tracing::debug!(base_url = %self.base_url, beta = self.beta, "Built blocking client");
        Ok(SyncClient {
            http: SyncHttpClient::new(pool, self.settings()),
        })
    }
}

// ============================================================================
// Async client
// ============================================================================

/// Async Fortnite-API client.
///
/// Owns the connection pool. [`close`](Client::close) releases it, as does
/// dropping the client; objects fetched earlier then fail with
/// `ClientClosed` when they try to download an asset.
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Client with default settings and no API key.
    pub fn new() -> ApiResult<Self> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn settings(&self) -> &ClientSettings {
        self.http.settings()
    }

    pub fn cosmetics(&self) -> Cosmetics<'_> {
        Cosmetics::new(&self.http)
    }

    pub fn aes(&self) -> AesKeys<'_> {
        AesKeys::new(&self.http)
    }

    pub fn banners(&self) -> Banners<'_> {
        Banners::new(&self.http)
    }

    pub fn creator_codes(&self) -> CreatorCodes<'_> {
        CreatorCodes::new(&self.http)
    }

    pub fn map(&self) -> MapClient<'_> {
        MapClient::new(&self.http)
    }

    pub fn news(&self) -> NewsClient<'_> {
        NewsClient::new(&self.http)
    }

    pub fn playlists(&self) -> Playlists<'_> {
        Playlists::new(&self.http)
    }

    pub fn shop(&self) -> ShopClient<'_> {
        ShopClient::new(&self.http)
    }

    pub fn stats(&self) -> Stats<'_> {
        Stats::new(&self.http)
    }

    pub fn beta(&self) -> Beta<'_> {
        Beta::new(&self.http)
    }

    /// Every operation of every facade, tagged with the facade name.
    pub fn operations() -> Vec<(&'static str, Operation)> {
        tag_operations(&[
            ("cosmetics", Cosmetics::OPERATIONS),
            ("aes", AesKeys::OPERATIONS),
            ("banners", Banners::OPERATIONS),
            ("creator_codes", CreatorCodes::OPERATIONS),
            ("map", MapClient::OPERATIONS),
            ("news", NewsClient::OPERATIONS),
            ("playlists", Playlists::OPERATIONS),
            ("shop", ShopClient::OPERATIONS),
            ("stats", Stats::OPERATIONS),
            ("beta", Beta::OPERATIONS),
        ])
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_closed()
    }

    /// Release the connection pool.
    pub fn close(self) {
        self.http.close();
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.http.close();
    }
}

// ============================================================================
// Blocking client
// ============================================================================

/// Blocking Fortnite-API client, call-for-call identical to [`Client`].
#[derive(Debug)]
pub struct SyncClient {
    http: SyncHttpClient,
}

impl SyncClient {
    /// Client with default settings and no API key.
    pub fn new() -> ApiResult<Self> {
        ClientBuilder::new().build_blocking()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn http(&self) -> &SyncHttpClient {
        &self.http
    }

    pub fn settings(&self) -> &ClientSettings {
        self.http.settings()
    }

    pub fn cosmetics(&self) -> SyncCosmetics<'_> {
        SyncCosmetics::new(&self.http)
    }

    pub fn aes(&self) -> SyncAesKeys<'_> {
        SyncAesKeys::new(&self.http)
    }

    pub fn banners(&self) -> SyncBanners<'_> {
        SyncBanners::new(&self.http)
    }

    pub fn creator_codes(&self) -> SyncCreatorCodes<'_> {
        SyncCreatorCodes::new(&self.http)
    }

    pub fn map(&self) -> SyncMapClient<'_> {
        SyncMapClient::new(&self.http)
    }

    pub fn news(&self) -> SyncNewsClient<'_> {
        SyncNewsClient::new(&self.http)
    }

    pub fn playlists(&self) -> SyncPlaylists<'_> {
        SyncPlaylists::new(&self.http)
    }

    pub fn shop(&self) -> SyncShopClient<'_> {
        SyncShopClient::new(&self.http)
    }

    pub fn stats(&self) -> SyncStats<'_> {
        SyncStats::new(&self.http)
    }

    pub fn beta(&self) -> SyncBeta<'_> {
        SyncBeta::new(&self.http)
    }

    /// Every operation of every facade, tagged with the facade name.
    pub fn operations() -> Vec<(&'static str, Operation)> {
        tag_operations(&[
            ("cosmetics", SyncCosmetics::OPERATIONS),
            ("aes", SyncAesKeys::OPERATIONS),
            ("banners", SyncBanners::OPERATIONS),
            ("creator_codes", SyncCreatorCodes::OPERATIONS),
            ("map", SyncMapClient::OPERATIONS),
            ("news", SyncNewsClient::OPERATIONS),
            ("playlists", SyncPlaylists::OPERATIONS),
            ("shop", SyncShopClient::OPERATIONS),
            ("stats", SyncStats::OPERATIONS),
            ("beta", SyncBeta::OPERATIONS),
        ])
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_closed()
    }

    /// Release the connection pool.
    pub fn close(self) {
        self.http.close();
    }
}

impl Drop for SyncClient {
    fn drop(&mut self) {
        self.http.close();
    }
}

fn tag_operations(facades: &[(&'static str, &'static [Operation])]) -> Vec<(&'static str, Operation)> {
    facades
        .iter()
        .flat_map(|(facade, operations)| operations.iter().map(move |op| (*facade, *op)))
        .collect()
}
