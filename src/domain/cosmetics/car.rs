//! Rocket Racing car cosmetics (`/v2/cosmetics/cars`).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::cosmetics::common::{
    showcase_video_url, CosmeticImages, CosmeticRarityInfo, CosmeticSeriesInfo, CosmeticTypeInfo,
    ShopHistory,
};
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// A car body, wheel, booster, trail or skin.
#[derive(Debug, Clone)]
pub struct CosmeticCar<H = HttpClient> {
    pub id: String,
    /// Vehicle the cosmetic applies to
    pub vehicle_id: String,
    pub name: String,
    pub description: String,
    pub cosmetic_type: Option<CosmeticTypeInfo>,
    pub rarity: Option<CosmeticRarityInfo>,
    pub images: Option<CosmeticImages<H>>,
    pub series: Option<CosmeticSeriesInfo<H>>,
    pub gameplay_tags: Option<Vec<String>>,
    pub path: Option<String>,
    pub showcase_video: Option<String>,
    pub added: Option<DateTime<Utc>>,
    pub shop_history: Option<Vec<DateTime<Utc>>>,
    raw: Value,
}

impl_id_eq!(generic: CosmeticCar);

impl<H> CosmeticCar<H> {
    pub fn showcase_video_url(&self) -> Option<String> {
        showcase_video_url(self.showcase_video.as_deref())
    }
}

impl<H> ShopHistory for CosmeticCar<H> {
    fn shop_history(&self) -> Option<&[DateTime<Utc>]> {
        self.shop_history.as_deref()
    }
}

impl<H: Clone> Reconstruct<H> for CosmeticCar<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticCar", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            vehicle_id: data.required("vehicleId")?,
            name: data.required("name")?,
            description: data.required("description")?,
            cosmetic_type: data.optional_object("type", http)?,
            rarity: data.optional_object("rarity", http)?,
            images: data.optional_object("images", http)?,
            series: data.optional_object("series", http)?,
            gameplay_tags: data.optional("gameplayTags"),
            path: data.optional("path"),
            showcase_video: data.optional("showcaseVideo"),
            added: data.timestamp("added")?,
            shop_history: data.timestamps("shopHistory"),
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticCar<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
