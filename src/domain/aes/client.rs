//! AES sub-clients.

use crate::domain::aes::Aes;
use crate::error::ApiResult;
use crate::http::{HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;
use crate::shared::KeyFormat;

fn aes_route(key_format: &KeyFormat) -> Route {
    Route::new("/v2/aes").param("keyFormat", key_format)
}

/// AES key endpoint.
#[derive(Debug, Clone, Copy)]
pub struct AesKeys<'a> {
    http: &'a HttpClient,
}

impl<'a> AesKeys<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl AesKeys {
        /// Current keys in the requested encoding.
        pub async fn fetch(&self, key_format: KeyFormat) -> ApiResult<Aes> {
            let raw = self.http.request(&aes_route(&key_format)).await?;
            Aes::from_raw(raw, self.http)
        }
    }
}

/// AES key endpoint, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncAesKeys<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncAesKeys<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncAesKeys {
        /// Current keys in the requested encoding.
        pub fn fetch(&self, key_format: KeyFormat) -> ApiResult<Aes> {
            let raw = self.http.request(&aes_route(&key_format))?;
            Aes::from_raw(raw, self.http)
        }
    }
}
