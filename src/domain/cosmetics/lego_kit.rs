//! LEGO kit cosmetics (`/v2/cosmetics/lego/kits`).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::cosmetics::common::{
    CosmeticImages, CosmeticSeriesInfo, CosmeticTypeInfo, ShopHistory,
};
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// A LEGO building kit.
#[derive(Debug, Clone)]
pub struct CosmeticLegoKit<H = HttpClient> {
    pub id: String,
    pub name: String,
    pub cosmetic_type: Option<CosmeticTypeInfo>,
    pub series: Option<CosmeticSeriesInfo<H>>,
    pub gameplay_tags: Option<Vec<String>>,
    pub images: Option<CosmeticImages<H>>,
    pub path: Option<String>,
    pub added: Option<DateTime<Utc>>,
    pub shop_history: Option<Vec<DateTime<Utc>>>,
    raw: Value,
}

impl_id_eq!(generic: CosmeticLegoKit);

impl<H> ShopHistory for CosmeticLegoKit<H> {
    fn shop_history(&self) -> Option<&[DateTime<Utc>]> {
        self.shop_history.as_deref()
    }
}

impl<H: Clone> Reconstruct<H> for CosmeticLegoKit<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticLegoKit", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.required("name")?,
            cosmetic_type: data.optional_object("type", http)?,
            series: data.optional_object("series", http)?,
            gameplay_tags: data.optional("gameplayTags"),
            images: data.optional_object("images", http)?,
            path: data.optional("path"),
            added: data.timestamp("added")?,
            shop_history: data.timestamps("shopHistory"),
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticLegoKit<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
