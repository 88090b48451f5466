//! Cosmetics of every category, their variants and search.

pub mod all;
pub mod br;
pub mod car;
pub mod client;
pub mod common;
pub mod instrument;
pub mod lego_kit;
pub mod new;
pub mod search;
pub mod track;
pub mod variants;

pub use all::{CosmeticRef, CosmeticsAll};
pub use br::{
    CosmeticBr, CosmeticBrIntroduction, CosmeticBrSet, CosmeticBrVariant, CosmeticBrVariantOption,
};
pub use car::CosmeticCar;
pub use client::{Cosmetics, SyncCosmetics};
pub use common::{
    CosmeticImages, CosmeticRarityInfo, CosmeticSeriesInfo, CosmeticTypeInfo, ShopHistory,
};
pub use instrument::CosmeticInstrument;
pub use lego_kit::CosmeticLegoKit;
pub use new::{NewCosmetic, NewCosmetics};
pub use search::CosmeticSearchParams;
pub use track::{CosmeticTrack, CosmeticTrackDifficulty};
pub use variants::{VariantBean, VariantLego};
