//! Creator code sub-clients.

use crate::domain::creator_code::CreatorCode;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;

fn creator_code_route(name: &str) -> ApiResult<Route> {
    if name.trim().is_empty() {
        return Err(ApiError::MalformedRequest("A creator code name is required.".into()));
    }
    Ok(Route::new("/v2/creatorcode").param("name", name))
}

/// Creator code endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CreatorCodes<'a> {
    http: &'a HttpClient,
}

impl<'a> CreatorCodes<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl CreatorCodes {
        /// Look up a code by exact name. Unknown codes fail with `NotFound`.
        pub async fn fetch(&self, name: &str) -> ApiResult<CreatorCode> {
            let raw = self.http.request(&creator_code_route(name)?).await?;
            CreatorCode::from_raw(raw, self.http)
        }
    }
}

/// Creator code endpoint, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncCreatorCodes<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncCreatorCodes<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncCreatorCodes {
        /// Look up a code by exact name. Unknown codes fail with `NotFound`.
        pub fn fetch(&self, name: &str) -> ApiResult<CreatorCode> {
            let raw = self.http.request(&creator_code_route(name)?)?;
            CreatorCode::from_raw(raw, self.http)
        }
    }
}
