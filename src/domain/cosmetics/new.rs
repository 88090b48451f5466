//! Cosmetics added in the latest build (`/v2/cosmetics/new`).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::cosmetics::{
    CosmeticBr, CosmeticCar, CosmeticInstrument, CosmeticLegoKit, CosmeticTrack, VariantBean,
    VariantLego,
};
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::proxy::TransformerList;
use crate::reconstruct::{Reconstruct, ToRaw};
use crate::shared::CosmeticCategory;

/// New items of one category.
#[derive(Debug)]
pub struct NewCosmetic<T> {
    pub category: CosmeticCategory,
    pub hash: Option<String>,
    pub last_addition: Option<DateTime<Utc>>,
    pub items: Option<TransformerList<T>>,
}

/// New cosmetics of every category for the current build.
#[derive(Debug)]
pub struct NewCosmetics<H = HttpClient> {
    pub build: String,
    pub previous_build: String,
    pub date: Option<DateTime<Utc>>,
    /// Hash over all categories; changes whenever any category changes
    pub global_hash: String,
    pub global_last_addition: Option<DateTime<Utc>>,
    pub br: NewCosmetic<CosmeticBr<H>>,
    pub tracks: NewCosmetic<CosmeticTrack<H>>,
    pub instruments: NewCosmetic<CosmeticInstrument<H>>,
    pub cars: NewCosmetic<CosmeticCar<H>>,
    pub lego: NewCosmetic<VariantLego<H>>,
    pub lego_kits: NewCosmetic<CosmeticLegoKit<H>>,
    pub beans: NewCosmetic<VariantBean<H>>,
    raw: Value,
}

struct Sections<'a> {
    hashes: RawObject<'a>,
    last_additions: RawObject<'a>,
    items: RawObject<'a>,
}

impl Sections<'_> {
    fn category<T, H>(
        &self,
        category: CosmeticCategory,
        key: &'static str,
        http: &H,
    ) -> ApiResult<NewCosmetic<T>>
    where
        T: Reconstruct<H> + 'static,
        H: Clone + Send + Sync + 'static,
    {
        Ok(NewCosmetic {
            category,
            hash: self.hashes.optional(key),
            last_addition: self.last_additions.optional_timestamp(key),
            items: self.items.optional_lazy_objects(key, http)?,
        })
    }
}

impl<H: Clone + Send + Sync + 'static> Reconstruct<H> for NewCosmetics<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("NewCosmetics", &raw)?;
        let sections = Sections {
            hashes: data.nested("hashes")?,
            last_additions: data.nested("lastAdditions")?,
            items: data.nested("items")?,
        };

        Ok(Self {
            build: data.required("build")?,
            previous_build: data.required("previousBuild")?,
            date: data.timestamp("date")?,
            global_hash: sections.hashes.required("all")?,
            global_last_addition: sections.last_additions.timestamp("all")?,
            br: sections.category(CosmeticCategory::Br, "br", http)?,
            tracks: sections.category(CosmeticCategory::Tracks, "tracks", http)?,
            instruments: sections.category(CosmeticCategory::Instruments, "instruments", http)?,
            cars: sections.category(CosmeticCategory::Cars, "cars", http)?,
            lego: sections.category(CosmeticCategory::Lego, "lego", http)?,
            lego_kits: sections.category(CosmeticCategory::LegoKits, "legoKits", http)?,
            beans: sections.category(CosmeticCategory::Beans, "beans", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for NewCosmetics<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
