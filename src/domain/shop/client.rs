//! Shop sub-clients.

use crate::domain::shop::Shop;
use crate::error::ApiResult;
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;
use crate::shared::FetchOptions;

fn shop_route(options: &FetchOptions, settings: &ClientSettings) -> Route {
    options.apply(Route::new("/v2/shop"), settings)
}

/// Shop endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ShopClient<'a> {
    http: &'a HttpClient,
}

impl<'a> ShopClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl ShopClient {
        /// The current shop; entries are built lazily.
        pub async fn fetch(&self, options: FetchOptions) -> ApiResult<Shop<HttpClient>> {
            let raw = self.http.request(&shop_route(&options, self.http.settings())).await?;
            Shop::from_raw(raw, self.http)
        }
    }
}

/// Shop endpoint, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncShopClient<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncShopClient<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncShopClient {
        /// The current shop; entries are built lazily.
        pub fn fetch(&self, options: FetchOptions) -> ApiResult<Shop<SyncHttpClient>> {
            let raw = self.http.request(&shop_route(&options, self.http.settings()))?;
            Shop::from_raw(raw, self.http)
        }
    }
}
