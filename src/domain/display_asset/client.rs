//! Beta sub-clients. Every call checks the beta opt-in before any request.

use crate::domain::display_asset::{MaterialInstance, NewDisplayAsset};
use crate::domain::raw::list;
use crate::error::ApiResult;
use crate::http::{HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};

const NEW_DISPLAY_ASSETS: &str = "/beta/newdisplayassets";
const MATERIAL_INSTANCES: &str = "/beta/materialinstances";

/// Beta endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Beta<'a> {
    http: &'a HttpClient,
}

impl<'a> Beta<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }
}

async_operations! {
    impl Beta {
        pub async fn fetch_new_display_assets(&self) -> ApiResult<Vec<NewDisplayAsset<HttpClient>>> {
            self.http.settings().require_beta()?;
            let raw = self.http.request(&Route::new(NEW_DISPLAY_ASSETS)).await?;
            list("NewDisplayAsset", raw, self.http)
        }

        pub async fn fetch_material_instances(&self) -> ApiResult<Vec<MaterialInstance<HttpClient>>> {
            self.http.settings().require_beta()?;
            let raw = self.http.request(&Route::new(MATERIAL_INSTANCES)).await?;
            list("MaterialInstance", raw, self.http)
        }
    }
}

/// Beta endpoints, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncBeta<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncBeta<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }
}

blocking_operations! {
    impl SyncBeta {
        pub fn fetch_new_display_assets(&self) -> ApiResult<Vec<NewDisplayAsset<SyncHttpClient>>> {
            self.http.settings().require_beta()?;
            let raw = self.http.request(&Route::new(NEW_DISPLAY_ASSETS))?;
            list("NewDisplayAsset", raw, self.http)
        }

        pub fn fetch_material_instances(&self) -> ApiResult<Vec<MaterialInstance<SyncHttpClient>>> {
            self.http.settings().require_beta()?;
            let raw = self.http.request(&Route::new(MATERIAL_INSTANCES))?;
            list("MaterialInstance", raw, self.http)
        }
    }
}
