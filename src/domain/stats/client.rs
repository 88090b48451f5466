//! Stats sub-clients. Every call checks for an API key before any request.

use crate::domain::stats::{BrPlayerStats, BrStatsParams};
use crate::error::{ApiError, ApiResult};
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::reconstruct::Reconstruct;

const BR_STATS: &str = "/v2/stats/br/v2";

fn by_name_route(name: &str, params: &BrStatsParams, settings: &ClientSettings) -> ApiResult<Route> {
    settings.require_api_key()?;
    if name.trim().is_empty() {
        return Err(ApiError::MalformedRequest("An account name is required.".into()));
    }
    Ok(Route::new(BR_STATS)
        .param("name", name)
        .param("accountType", &params.account_type)
        .param("timeWindow", &params.time_window)
        .param("image", &params.image))
}

fn by_id_route(account_id: &str, params: &BrStatsParams, settings: &ClientSettings) -> ApiResult<Route> {
    settings.require_api_key()?;
    if account_id.trim().is_empty() {
        return Err(ApiError::MalformedRequest("An account id is required.".into()));
    }
    Ok(Route::with_segment(BR_STATS, account_id)
        .param("timeWindow", &params.time_window)
        .param("image", &params.image))
}

/// Stats endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Stats<'a> {
    http: &'a HttpClient,
}

impl<'a> Stats<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl Stats {
        /// Stats of the account with this display name.
        pub async fn fetch_br(&self, name: &str, params: BrStatsParams) -> ApiResult<BrPlayerStats<HttpClient>> {
            let route = by_name_route(name, &params, self.http.settings())?;
            let raw = self.http.request(&route).await?;
            BrPlayerStats::from_raw(raw, self.http)
        }

        /// Stats of the account with this id.
        pub async fn fetch_br_by_id(&self, account_id: &str, params: BrStatsParams) -> ApiResult<BrPlayerStats<HttpClient>> {
            let route = by_id_route(account_id, &params, self.http.settings())?;
            let raw = self.http.request(&route).await?;
            BrPlayerStats::from_raw(raw, self.http)
        }
    }
}

/// Stats endpoints, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncStats<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncStats<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncStats {
        /// Stats of the account with this display name.
        pub fn fetch_br(&self, name: &str, params: BrStatsParams) -> ApiResult<BrPlayerStats<SyncHttpClient>> {
            let route = by_name_route(name, &params, self.http.settings())?;
            let raw = self.http.request(&route)?;
            BrPlayerStats::from_raw(raw, self.http)
        }

        /// Stats of the account with this id.
        pub fn fetch_br_by_id(&self, account_id: &str, params: BrStatsParams) -> ApiResult<BrPlayerStats<SyncHttpClient>> {
            let route = by_id_route(account_id, &params, self.http.settings())?;
            let raw = self.http.request(&route)?;
            BrPlayerStats::from_raw(raw, self.http)
        }
    }
}
