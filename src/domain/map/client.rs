//! Map sub-clients.

use crate::domain::map::Map;
use crate::error::ApiResult;
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;
use crate::shared::GameLanguage;

fn map_route(language: Option<GameLanguage>, settings: &ClientSettings) -> Route {
    Route::new("/v1/map").param("language", settings.language(language))
}

/// Map endpoint.
#[derive(Debug, Clone, Copy)]
pub struct MapClient<'a> {
    http: &'a HttpClient,
}

impl<'a> MapClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl MapClient {
        pub async fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<Map<HttpClient>> {
            let raw = self.http.request(&map_route(language, self.http.settings())).await?;
            Map::from_raw(raw, self.http)
        }
    }
}

/// Map endpoint, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncMapClient<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncMapClient<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncMapClient {
        pub fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<Map<SyncHttpClient>> {
            let raw = self.http.request(&map_route(language, self.http.settings()))?;
            Map::from_raw(raw, self.http)
        }
    }
}
