//! Small/regular icon pair used by banners.

use serde_json::Value;

use crate::asset::Asset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{Reconstruct, ToRaw};

/// Icon pair attached to banners and other simple entities.
#[derive(Debug, Clone)]
pub struct Images<H = HttpClient> {
    /// Smaller version of the main icon
    pub small_icon: Option<Asset<H>>,
    /// Main icon
    pub icon: Option<Asset<H>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for Images<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Images", &raw)?;
        Ok(Self {
            small_icon: data.optional_asset("smallIcon", http),
            icon: data.optional_asset("icon", http),
            raw,
        })
    }
}

impl<H> ToRaw for Images<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
