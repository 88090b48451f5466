//! Banner sub-clients.

use crate::domain::banner::{Banner, BannerColor};
use crate::domain::raw::list;
use crate::error::ApiResult;
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::shared::GameLanguage;

const BANNERS: &str = "/v1/banners";
const COLORS: &str = "/v1/banners/colors";

fn banners_route(language: Option<GameLanguage>, settings: &ClientSettings) -> Route {
    Route::new(BANNERS).param("language", settings.language(language))
}

/// Banner endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Banners<'a> {
    http: &'a HttpClient,
}

impl<'a> Banners<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl Banners {
        pub async fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Banner<HttpClient>>> {
            let raw = self.http.request(&banners_route(language, self.http.settings())).await?;
            list("Banner", raw, self.http)
        }

        pub async fn fetch_colors(&self) -> ApiResult<Vec<BannerColor>> {
            let raw = self.http.request(&Route::new(COLORS)).await?;
            list("BannerColor", raw, self.http)
        }
    }
}

/// Banner endpoints, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncBanners<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncBanners<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncBanners {
        pub fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Banner<SyncHttpClient>>> {
            let raw = self.http.request(&banners_route(language, self.http.settings()))?;
            list("Banner", raw, self.http)
        }

        pub fn fetch_colors(&self) -> ApiResult<Vec<BannerColor>> {
            let raw = self.http.request(&Route::new(COLORS))?;
            list("BannerColor", raw, self.http)
        }
    }
}
