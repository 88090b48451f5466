//! Typed domain model and the per-resource sub-clients.
//!
//! Every entity is built from the raw JSON object the API returned, keeps a
//! private copy of it for [`ToRaw::to_raw`](crate::ToRaw::to_raw)
//! and, where it carries images, a transport handle `H` for downloading them.

pub(crate) mod raw;

pub mod account;
pub mod aes;
pub mod banner;
pub mod cosmetics;
pub mod creator_code;
pub mod display_asset;
pub mod images;
pub mod map;
pub mod news;
pub mod playlist;
pub mod shop;
pub mod stats;

pub use account::Account;
pub use aes::{Aes, DynamicKey, Version};
pub use banner::{Banner, BannerColor};
pub use cosmetics::{
    CosmeticBr, CosmeticBrIntroduction, CosmeticBrSet, CosmeticBrVariant, CosmeticBrVariantOption,
    CosmeticCar, CosmeticImages, CosmeticInstrument, CosmeticLegoKit, CosmeticRarityInfo,
    CosmeticRef, CosmeticSearchParams, CosmeticSeriesInfo, CosmeticTrack, CosmeticTrackDifficulty,
    CosmeticTypeInfo, CosmeticsAll, NewCosmetic, NewCosmetics, ShopHistory, VariantBean,
    VariantLego,
};
pub use creator_code::CreatorCode;
pub use display_asset::{
    MaterialInstance, MaterialInstanceColors, MaterialInstanceImages, NewDisplayAsset, RenderImage,
};
pub use images::Images;
pub use map::{Map, MapImages, Poi, PoiLocation};
pub use news::{GameModeNews, News, NewsMessage, NewsMotd};
pub use playlist::{Playlist, PlaylistImages};
pub use shop::{
    Shop, ShopEntry, ShopEntryBanner, ShopEntryBundle, ShopEntryColors, ShopEntryLayout,
    ShopEntryOfferTag, TileSize,
};
pub use stats::{BrBattlePass, BrGameModeStats, BrInputStats, BrInputs, BrPlayerStats, BrStatsParams};
