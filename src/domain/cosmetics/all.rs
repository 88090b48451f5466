//! Every cosmetic of every category (`/v2/cosmetics`).

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

/// All cosmetics, one lazily built list per category.
///
/// A category missing from the payload is `None`.
#[derive(Debug)]
pub struct CosmeticsAll<H = HttpClient> {
    pub br: Option<TransformerList<CosmeticBr<H>>>,
    pub tracks: Option<TransformerList<CosmeticTrack<H>>>,
    pub instruments: Option<TransformerList<CosmeticInstrument<H>>>,
    pub cars: Option<TransformerList<CosmeticCar<H>>>,
    pub lego: Option<TransformerList<VariantLego<H>>>,
    pub lego_kits: Option<TransformerList<CosmeticLegoKit<H>>>,
    pub beans: Option<TransformerList<VariantBean<H>>>,
    raw: Value,
}

/// Borrowed cosmetic of any category.
#[derive(Debug)]
pub enum CosmeticRef<'a, H = HttpClient> {
    Br(&'a CosmeticBr<H>),
    Track(&'a CosmeticTrack<H>),
    Instrument(&'a CosmeticInstrument<H>),
    Car(&'a CosmeticCar<H>),
    Lego(&'a VariantLego<H>),
    LegoKit(&'a CosmeticLegoKit<H>),
    Bean(&'a VariantBean<H>),
}

impl<H> Clone for CosmeticRef<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for CosmeticRef<'_, H> {}

impl<H> CosmeticRef<'_, H> {
    pub fn id(&self) -> &str {
        match self {
            Self::Br(c) => &c.id,
            Self::Track(c) => &c.id,
            Self::Instrument(c) => &c.id,
            Self::Car(c) => &c.id,
            Self::Lego(c) => &c.id,
            Self::LegoKit(c) => &c.id,
            Self::Bean(c) => &c.id,
        }
    }

    pub fn category(&self) -> CosmeticCategory {
        match self {
            Self::Br(_) => CosmeticCategory::Br,
            Self::Track(_) => CosmeticCategory::Tracks,
            Self::Instrument(_) => CosmeticCategory::Instruments,
            Self::Car(_) => CosmeticCategory::Cars,
            Self::Lego(_) => CosmeticCategory::Lego,
            Self::LegoKit(_) => CosmeticCategory::LegoKits,
            Self::Bean(_) => CosmeticCategory::Beans,
        }
    }
}

impl<H> CosmeticsAll<H> {
    /// Total number of cosmetics across categories.
    pub fn len(&self) -> usize {
        fn count<T>(list: &Option<TransformerList<T>>) -> usize {
            list.as_ref().map_or(0, TransformerList::len)
        }
        count(&self.br)
            + count(&self.tracks)
            + count(&self.instruments)
            + count(&self.cars)
            + count(&self.lego)
            + count(&self.lego_kits)
            + count(&self.beans)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every cosmetic, category by category, building each on the way.
    pub fn iter(&self) -> impl Iterator<Item = ApiResult<CosmeticRef<'_, H>>> + '_ {
        fn each<'a, T: 'a, R: 'a>(
            list: &'a Option<TransformerList<T>>,
            wrap: fn(&'a T) -> R,
        ) -> impl Iterator<Item = ApiResult<R>> + 'a {
            list.iter()
                .flat_map(|list| list.iter())
                .map(move |item| item.map(wrap))
        }

        each(&self.br, CosmeticRef::Br)
            .chain(each(&self.tracks, CosmeticRef::Track))
            .chain(each(&self.instruments, CosmeticRef::Instrument))
            .chain(each(&self.cars, CosmeticRef::Car))
            .chain(each(&self.lego, CosmeticRef::Lego))
            .chain(each(&self.lego_kits, CosmeticRef::LegoKit))
            .chain(each(&self.beans, CosmeticRef::Bean))
    }
}

impl<H: Clone + Send + Sync + 'static> Reconstruct<H> for CosmeticsAll<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticsAll", &raw)?;
        Ok(Self {
            br: data.optional_lazy_objects("br", http)?,
            tracks: data.optional_lazy_objects("tracks", http)?,
            instruments: data.optional_lazy_objects("instruments", http)?,
            cars: data.optional_lazy_objects("cars", http)?,
            lego: data.optional_lazy_objects("lego", http)?,
            lego_kits: data.optional_lazy_objects("legoKits", http)?,
            beans: data.optional_lazy_objects("beans", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticsAll<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
