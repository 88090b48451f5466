//! Playlist sub-clients.

use crate::domain::playlist::Playlist;
use crate::domain::raw::list;
use crate::error::{ApiError, ApiResult};
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;
use crate::shared::GameLanguage;

const PLAYLISTS: &str = "/v1/playlists";

fn playlists_route(language: Option<GameLanguage>, settings: &ClientSettings) -> Route {
    Route::new(PLAYLISTS).param("language", settings.language(language))
}

fn playlist_route(id: &str, language: Option<GameLanguage>, settings: &ClientSettings) -> ApiResult<Route> {
    if id.trim().is_empty() {
        return Err(ApiError::MalformedRequest("A playlist id is required.".into()));
    }
    Ok(Route::with_segment(PLAYLISTS, id).param("language", settings.language(language)))
}

/// Playlist endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Playlists<'a> {
    http: &'a HttpClient,
}

impl<'a> Playlists<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl Playlists {
        pub async fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Playlist<HttpClient>>> {
            let raw = self.http.request(&playlists_route(language, self.http.settings())).await?;
            list("Playlist", raw, self.http)
        }

        /// A single playlist. Unknown ids fail with `NotFound`.
        pub async fn fetch_by_id(&self, id: &str, language: Option<GameLanguage>) -> ApiResult<Playlist<HttpClient>> {
            let raw = self.http.request(&playlist_route(id, language, self.http.settings())?).await?;
            Playlist::from_raw(raw, self.http)
        }
    }
}

/// Playlist endpoints, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncPlaylists<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncPlaylists<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncPlaylists {
        pub fn fetch(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Playlist<SyncHttpClient>>> {
            let raw = self.http.request(&playlists_route(language, self.http.settings()))?;
            list("Playlist", raw, self.http)
        }

        /// A single playlist. Unknown ids fail with `NotFound`.
        pub fn fetch_by_id(&self, id: &str, language: Option<GameLanguage>) -> ApiResult<Playlist<SyncHttpClient>> {
            let raw = self.http.request(&playlist_route(id, language, self.http.settings())?)?;
            Playlist::from_raw(raw, self.http)
        }
    }
}
