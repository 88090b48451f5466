//! News sub-clients.

use crate::domain::news::{GameModeNews, News};
use crate::error::ApiResult;
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;
use crate::shared::{GameLanguage, NewsType};

fn news_route(news_type: Option<NewsType>, language: Option<GameLanguage>, settings: &ClientSettings) -> Route {
    let path = match news_type {
        Some(news_type) => format!("/v2/news/{}", news_type),
        None => "/v2/news".to_string(),
    };
    Route::new(path).param("language", settings.language(language))
}

/// News endpoints.
#[derive(Debug, Clone, Copy)]
pub struct NewsClient<'a> {
    http: &'a HttpClient,
}

impl<'a> NewsClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl NewsClient {
        /// News of every game mode.
        pub async fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<News<HttpClient>> {
            let raw = self.http.request(&news_route(None, language, self.http.settings())).await?;
            News::from_raw(raw, self.http)
        }

        pub async fn fetch_br(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews<HttpClient>> {
            let route = news_route(Some(NewsType::BattleRoyale), language, self.http.settings());
            let raw = self.http.request(&route).await?;
            GameModeNews::from_raw(raw, self.http)
        }

        pub async fn fetch_stw(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews<HttpClient>> {
            let route = news_route(Some(NewsType::SaveTheWorld), language, self.http.settings());
            let raw = self.http.request(&route).await?;
            GameModeNews::from_raw(raw, self.http)
        }
    }
}

/// News endpoints, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncNewsClient<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncNewsClient<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncNewsClient {
        /// News of every game mode.
        pub fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<News<SyncHttpClient>> {
            let raw = self.http.request(&news_route(None, language, self.http.settings()))?;
            News::from_raw(raw, self.http)
        }

        pub fn fetch_br(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews<SyncHttpClient>> {
            let route = news_route(Some(NewsType::BattleRoyale), language, self.http.settings());
            let raw = self.http.request(&route)?;
            GameModeNews::from_raw(raw, self.http)
        }

        pub fn fetch_stw(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews<SyncHttpClient>> {
            let route = news_route(Some(NewsType::SaveTheWorld), language, self.http.settings());
            let raw = self.http.request(&route)?;
            GameModeNews::from_raw(raw, self.http)
        }
    }
}
