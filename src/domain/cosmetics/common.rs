//! Pieces shared by every cosmetic kind.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::network::YOUTUBE_WATCH_URL;
use crate::reconstruct::{Reconstruct, ToRaw};
use crate::shared::{CosmeticRarity, CosmeticType};

// ============================================================================
// Type / rarity / series
// ============================================================================

/// `type` block of a cosmetic.
#[derive(Debug, Clone)]
pub struct CosmeticTypeInfo {
    pub value: CosmeticType,
    /// Localized name, e.g. "Outfit"
    pub display_value: String,
    /// Internal type, e.g. "AthenaCharacter"
    pub backend_value: String,
    raw: Value,
}

impl<H> Reconstruct<H> for CosmeticTypeInfo {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticTypeInfo", &raw)?;
        Ok(Self {
            value: data.required("value")?,
            display_value: data.required("displayValue")?,
            backend_value: data.required("backendValue")?,
            raw,
        })
    }
}

impl ToRaw for CosmeticTypeInfo {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// `rarity` block of a cosmetic.
#[derive(Debug, Clone)]
pub struct CosmeticRarityInfo {
    pub value: CosmeticRarity,
    pub display_value: String,
    pub backend_value: String,
    raw: Value,
}

impl<H> Reconstruct<H> for CosmeticRarityInfo {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticRarityInfo", &raw)?;
        Ok(Self {
            value: data.required("value")?,
            display_value: data.required("displayValue")?,
            backend_value: data.required("backendValue")?,
            raw,
        })
    }
}

impl ToRaw for CosmeticRarityInfo {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// `series` block of a cosmetic (Marvel, Icon Series, ...).
#[derive(Debug, Clone)]
pub struct CosmeticSeriesInfo<H = HttpClient> {
    pub value: String,
    pub backend_value: String,
    /// Series background image
    pub image: Option<Asset<H>>,
    /// Hex colors of the series gradient
    pub colors: Option<Vec<String>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for CosmeticSeriesInfo<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticSeriesInfo", &raw)?;
        Ok(Self {
            value: data.required("value")?,
            backend_value: data.required("backendValue")?,
            image: data.optional_asset("image", http),
            colors: data.optional("colors"),
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticSeriesInfo<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

// ============================================================================
// Images
// ============================================================================

/// Images of a cosmetic.
///
/// Named fields cover the keys the API documents; anything under `other`
/// lands in [`other`](CosmeticImages::other) keyed by its raw name.
#[derive(Debug, Clone)]
pub struct CosmeticImages<H = HttpClient> {
    pub small_icon: Option<Asset<H>>,
    pub icon: Option<Asset<H>>,
    pub featured: Option<Asset<H>>,
    pub lego: Option<Asset<H>>,
    pub bean: Option<Asset<H>>,
    pub small: Option<Asset<H>>,
    pub large: Option<Asset<H>>,
    pub wide: Option<Asset<H>>,
    /// Ad hoc images from the `other` object
    pub other: BTreeMap<String, Asset<H>>,
    raw: Value,
}

impl<H> CosmeticImages<H> {
    pub fn background(&self) -> Option<&Asset<H>> {
        self.other.get("background")
    }

    pub fn coverart(&self) -> Option<&Asset<H>> {
        self.other.get("coverart")
    }

    pub fn decal(&self) -> Option<&Asset<H>> {
        self.other.get("decal")
    }
}

impl<H: Clone> Reconstruct<H> for CosmeticImages<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticImages", &raw)?;
        let other = data
            .optional::<BTreeMap<String, Value>>("other")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(url) if !url.is_empty() => Some((key, Asset::new(http.clone(), url))),
                _ => None,
            })
            .collect();

        Ok(Self {
            small_icon: data.optional_asset("smallIcon", http),
            icon: data.optional_asset("icon", http),
            featured: data.optional_asset("featured", http),
            lego: data.optional_asset("lego", http),
            bean: data.optional_asset("bean", http),
            small: data.optional_asset("small", http),
            large: data.optional_asset("large", http),
            wide: data.optional_asset("wide", http),
            other,
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticImages<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

// ============================================================================
// Derived attributes
// ============================================================================

/// Cosmetics that carry a `shopHistory` list (oldest first).
pub trait ShopHistory {
    /// Dates the item was in the shop; `None` unless requested via response flags.
    fn shop_history(&self) -> Option<&[DateTime<Utc>]>;

    fn first_appearance(&self) -> Option<&DateTime<Utc>> {
        self.shop_history().and_then(<[_]>::first)
    }

    fn last_appearance(&self) -> Option<&DateTime<Utc>> {
        self.shop_history().and_then(<[_]>::last)
    }

    /// Whole days between `now` and the last appearance.
    fn days_since_last_seen_at(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_appearance().map(|last| (now - *last).num_days())
    }

    fn days_since_last_seen(&self) -> Option<i64> {
        self.days_since_last_seen_at(Utc::now())
    }
}

/// Watch URL for a showcase video id.
pub(crate) fn showcase_video_url(video_id: Option<&str>) -> Option<String> {
    video_id.map(|id| format!("{}{}", YOUTUBE_WATCH_URL, id))
}
