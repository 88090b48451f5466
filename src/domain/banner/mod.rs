//! Banners and banner colors (`/v1/banners`, `/v1/banners/colors`).

pub mod client;

pub use client::{Banners, SyncBanners};

use serde_json::Value;

use crate::domain::images::Images;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// A player banner.
#[derive(Debug, Clone)]
pub struct Banner<H = HttpClient> {
    pub id: String,
    pub name: String,
    pub dev_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub full_usage_rights: bool,
    /// Icons, read from the banner object itself
    pub images: Images<H>,
    raw: Value,
}

impl_id_eq!(generic: Banner);

impl<H: Clone> Reconstruct<H> for Banner<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Banner", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.required("name")?,
            dev_name: data.required("devName")?,
            description: data.optional("description"),
            category: data.optional("category"),
            full_usage_rights: data.required("fullUsageRights")?,
            images: Images::from_raw(raw.clone(), http)?,
            raw,
        })
    }
}

impl<H> ToRaw for Banner<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A banner background color.
#[derive(Debug, Clone)]
pub struct BannerColor {
    pub id: String,
    /// Hex color without `#`
    pub color: String,
    pub category: String,
    pub sub_category_group: i64,
    raw: Value,
}

impl_id_eq!(BannerColor);

impl<H> Reconstruct<H> for BannerColor {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("BannerColor", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            color: data.required("color")?,
            category: data.required("category")?,
            sub_category_group: data.integer("subCategoryGroup")?,
            raw,
        })
    }
}

impl ToRaw for BannerColor {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
