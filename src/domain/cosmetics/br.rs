//! Battle Royale cosmetics (`/v2/cosmetics/br`).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::cosmetics::common::{
    showcase_video_url, CosmeticImages, CosmeticRarityInfo, CosmeticSeriesInfo, CosmeticTypeInfo,
    ShopHistory,
};
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// Set a cosmetic belongs to, e.g. "Wild Card".
#[derive(Debug, Clone)]
pub struct CosmeticBrSet {
    pub value: String,
    /// Display text, e.g. "Part of the Wild Card set."
    pub text: String,
    pub backend_value: String,
    raw: Value,
}

impl<H> Reconstruct<H> for CosmeticBrSet {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticBrSet", &raw)?;
        Ok(Self {
            value: data.required("value")?,
            text: data.required("text")?,
            backend_value: data.required("backendValue")?,
            raw,
        })
    }
}

impl ToRaw for CosmeticBrSet {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Chapter and season a cosmetic was introduced in.
#[derive(Debug, Clone)]
pub struct CosmeticBrIntroduction {
    pub chapter: i64,
    pub season: i64,
    /// Display text, e.g. "Introduced in Chapter 1, Season 2."
    pub text: String,
    pub backend_value: i64,
    raw: Value,
}

impl<H> Reconstruct<H> for CosmeticBrIntroduction {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticBrIntroduction", &raw)?;
        Ok(Self {
            chapter: data.integer("chapter")?,
            season: data.integer("season")?,
            text: data.required("text")?,
            backend_value: data.integer("backendValue")?,
            raw,
        })
    }
}

impl ToRaw for CosmeticBrIntroduction {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// One selectable option of a variant channel.
#[derive(Debug, Clone)]
pub struct CosmeticBrVariantOption<H = HttpClient> {
    pub tag: String,
    pub name: Option<String>,
    pub unlock_requirements: Option<String>,
    pub image: Asset<H>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for CosmeticBrVariantOption<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticBrVariantOption", &raw)?;
        Ok(Self {
            tag: data.required("tag")?,
            name: data.optional("name"),
            unlock_requirements: data.optional("unlockRequirements"),
            image: data.asset("image", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticBrVariantOption<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A variant channel (style, parts, progressive) and its options.
#[derive(Debug, Clone)]
pub struct CosmeticBrVariant<H = HttpClient> {
    pub channel: String,
    /// Display name of the channel, e.g. "Style"
    pub variant_type: Option<String>,
    pub options: Vec<CosmeticBrVariantOption<H>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for CosmeticBrVariant<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticBrVariant", &raw)?;
        Ok(Self {
            channel: data.required("channel")?,
            variant_type: data.optional("type"),
            options: data.optional_objects("options", http)?.unwrap_or_default(),
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticBrVariant<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A Battle Royale cosmetic: outfit, pickaxe, emote, wrap and so on.
///
/// `gameplay_tags`, `path` fields and `shop_history` are only sent when
/// the matching response flags are set.
#[derive(Debug, Clone)]
pub struct CosmeticBr<H = HttpClient> {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cosmetic_type: Option<CosmeticTypeInfo>,
    pub rarity: Option<CosmeticRarityInfo>,
    pub series: Option<CosmeticSeriesInfo<H>>,
    pub set: Option<CosmeticBrSet>,
    pub introduction: Option<CosmeticBrIntroduction>,
    pub images: Option<CosmeticImages<H>>,
    pub variants: Option<Vec<CosmeticBrVariant<H>>>,
    pub built_in_emote_ids: Option<Vec<String>>,
    pub search_tags: Option<Vec<String>>,
    pub gameplay_tags: Option<Vec<String>>,
    pub meta_tags: Option<Vec<String>>,
    /// YouTube video id; see [`showcase_video_url`](CosmeticBr::showcase_video_url)
    pub showcase_video: Option<String>,
    pub dynamic_pak_id: Option<String>,
    pub item_preview_hero_path: Option<String>,
    pub display_asset_path: Option<String>,
    pub definition_path: Option<String>,
    pub path: Option<String>,
    /// When the cosmetic was added to the API; `None` if the value did not parse
    pub added: Option<DateTime<Utc>>,
    pub shop_history: Option<Vec<DateTime<Utc>>>,
    raw: Value,
}

impl_id_eq!(generic: CosmeticBr);

impl<H> CosmeticBr<H> {
    pub fn showcase_video_url(&self) -> Option<String> {
        showcase_video_url(self.showcase_video.as_deref())
    }
}

impl<H> ShopHistory for CosmeticBr<H> {
    fn shop_history(&self) -> Option<&[DateTime<Utc>]> {
        self.shop_history.as_deref()
    }
}

impl<H: Clone> Reconstruct<H> for CosmeticBr<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticBr", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.required("name")?,
            description: data.required("description")?,
            cosmetic_type: data.optional_object("type", http)?,
            rarity: data.optional_object("rarity", http)?,
            series: data.optional_object("series", http)?,
            set: data.optional_object("set", http)?,
            introduction: data.optional_object("introduction", http)?,
            images: data.optional_object("images", http)?,
            variants: data.optional_objects("variants", http)?,
            built_in_emote_ids: data.optional("builtInEmoteIds"),
            search_tags: data.optional("searchTags"),
            gameplay_tags: data.optional("gameplayTags"),
            meta_tags: data.optional("metaTags"),
            showcase_video: data.optional("showcaseVideo"),
            dynamic_pak_id: data.optional("dynamicPakId"),
            item_preview_hero_path: data.optional("itemPreviewHeroPath"),
            display_asset_path: data.optional("displayAssetPath"),
            definition_path: data.optional("definitionPath"),
            path: data.optional("path"),
            added: data.timestamp("added")?,
            shop_history: data.timestamps("shopHistory"),
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticBr<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
