//! Shop display assets: new display assets, material instances and renders.
//!
//! The list endpoints are beta and need `ClientBuilder::beta(true)`; the
//! types also appear inside shop entries.

pub mod client;

pub use client::{Beta, SyncBeta};

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::asset::Asset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};
use crate::shared::{CosmeticCompatibleMode, ProductTag};

/// A rendered image of an offer for one product.
#[derive(Debug, Clone)]
pub struct RenderImage<H = HttpClient> {
    pub product_tag: ProductTag,
    pub file_name: String,
    pub image: Asset<H>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for RenderImage<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("RenderImage", &raw)?;
        Ok(Self {
            product_tag: data.required("productTag")?,
            file_name: data.required("fileName")?,
            image: data.asset("image", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for RenderImage<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Texture parameters of a material instance.
#[derive(Debug, Clone)]
pub struct MaterialInstanceImages<H = HttpClient> {
    pub offer_image: Option<Asset<H>>,
    pub background: Option<Asset<H>>,
    /// Remaining texture parameters by name
    pub other: BTreeMap<String, Asset<H>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for MaterialInstanceImages<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("MaterialInstanceImages", &raw)?;
        let other = data
            .extra(&["OfferImage", "Background"])
            .filter_map(|(key, value)| {
                value
                    .as_str()
                    .filter(|url| !url.is_empty())
                    .map(|url| (key.clone(), Asset::new(http.clone(), url)))
            })
            .collect();

        Ok(Self {
            offer_image: data.optional_asset("OfferImage", http),
            background: data.optional_asset("Background", http),
            other,
            raw,
        })
    }
}

impl<H> ToRaw for MaterialInstanceImages<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Color parameters of a material instance, as hex strings.
#[derive(Debug, Clone)]
pub struct MaterialInstanceColors {
    pub background_color_a: Option<String>,
    pub background_color_b: Option<String>,
    pub fall_off_color: Option<String>,
    pub other: BTreeMap<String, String>,
    raw: Value,
}

impl<H> Reconstruct<H> for MaterialInstanceColors {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("MaterialInstanceColors", &raw)?;
        let other = data
            .extra(&["Background_Color_A", "Background_Color_B", "FallOff_Color"])
            .filter_map(|(key, value)| value.as_str().map(|color| (key.clone(), color.to_string())))
            .collect();

        Ok(Self {
            background_color_a: data.optional("Background_Color_A"),
            background_color_b: data.optional("Background_Color_B"),
            fall_off_color: data.optional("FallOff_Color"),
            other,
            raw,
        })
    }
}

impl ToRaw for MaterialInstanceColors {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Material used to present an offer in the shop.
#[derive(Debug, Clone)]
pub struct MaterialInstance<H = HttpClient> {
    pub id: String,
    pub primary_mode: CosmeticCompatibleMode,
    pub product_tag: ProductTag,
    pub images: MaterialInstanceImages<H>,
    pub colors: Option<MaterialInstanceColors>,
    pub scalings: Option<Map<String, Value>>,
    pub flags: Option<Map<String, Value>>,
    raw: Value,
}

impl_id_eq!(generic: MaterialInstance);

impl<H: Clone> Reconstruct<H> for MaterialInstance<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("MaterialInstance", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            primary_mode: data.required("primaryMode")?,
            product_tag: data.required("productTag")?,
            images: data.object("images", http)?,
            colors: data.optional_object("colors", http)?,
            scalings: data.optional("scalings"),
            flags: data.optional("flags"),
            raw,
        })
    }
}

impl<H> ToRaw for MaterialInstance<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Display asset of a shop offer.
#[derive(Debug, Clone)]
pub struct NewDisplayAsset<H = HttpClient> {
    pub id: String,
    pub cosmetic_id: Option<String>,
    pub material_instances: Vec<MaterialInstance<H>>,
    pub render_images: Vec<RenderImage<H>>,
    raw: Value,
}

impl_id_eq!(generic: NewDisplayAsset);

impl<H: Clone> Reconstruct<H> for NewDisplayAsset<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("NewDisplayAsset", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            cosmetic_id: data.optional("cosmeticId"),
            material_instances: data.optional_objects("materialInstances", http)?.unwrap_or_default(),
            render_images: data.optional_objects("renderImages", http)?.unwrap_or_default(),
            raw,
        })
    }
}

impl<H> ToRaw for NewDisplayAsset<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
