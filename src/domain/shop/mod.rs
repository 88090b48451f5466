//! Item shop (`/v2/shop`).

pub mod client;

pub use client::{ShopClient, SyncShopClient};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::cosmetics::{
    CosmeticBr, CosmeticCar, CosmeticInstrument, CosmeticLegoKit, CosmeticTrack,
};
use crate::domain::display_asset::NewDisplayAsset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::proxy::TransformerList;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};
use crate::shared::BannerIntensity;

/// Largest size the V-Bucks icon can be resized to.
const VBUCK_ICON_MAX_SIZE: u32 = 256;

// ============================================================================
// Entry parts
// ============================================================================

/// Tile size of an entry in the shop grid, from values like `Size_1_x_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for TileSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid tile size {:?}", s);
        let dims = s.strip_prefix("Size_").ok_or_else(invalid)?;
        let (width, height) = dims.split_once("_x_").ok_or_else(invalid)?;
        Ok(Self {
            width: width.parse().map_err(|_| invalid())?,
            height: height.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size_{}_x_{}", self.width, self.height)
    }
}

/// Bundle info of an entry sold as a bundle.
#[derive(Debug, Clone)]
pub struct ShopEntryBundle<H = HttpClient> {
    pub name: String,
    pub info: String,
    pub image: Asset<H>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for ShopEntryBundle<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("ShopEntryBundle", &raw)?;
        Ok(Self {
            name: data.required("name")?,
            info: data.required("info")?,
            image: data.asset("image", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for ShopEntryBundle<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Banner shown on an entry, e.g. "New!".
#[derive(Debug, Clone)]
pub struct ShopEntryBanner {
    pub value: String,
    pub intensity: BannerIntensity,
    pub backend_value: String,
    raw: Value,
}

impl<H> Reconstruct<H> for ShopEntryBanner {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("ShopEntryBanner", &raw)?;
        Ok(Self {
            value: data.required("value")?,
            intensity: data.required("intensity")?,
            backend_value: data.required("backendValue")?,
            raw,
        })
    }
}

impl ToRaw for ShopEntryBanner {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Offer tag such as "Includes bonus V-Bucks".
#[derive(Debug, Clone)]
pub struct ShopEntryOfferTag {
    pub id: String,
    pub text: String,
    raw: Value,
}

impl_id_eq!(ShopEntryOfferTag);

impl<H> Reconstruct<H> for ShopEntryOfferTag {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("ShopEntryOfferTag", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            text: data.required("text")?,
            raw,
        })
    }
}

impl ToRaw for ShopEntryOfferTag {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Shop section an entry is displayed in.
#[derive(Debug, Clone)]
pub struct ShopEntryLayout<H = HttpClient> {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub index: i64,
    pub rank: Option<i64>,
    pub show_ineligible_offers: Option<String>,
    pub background: Option<Asset<H>>,
    pub use_wide_preview: Option<bool>,
    pub display_type: Option<String>,
    raw: Value,
}

impl_id_eq!(generic: ShopEntryLayout);

impl<H: Clone> Reconstruct<H> for ShopEntryLayout<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("ShopEntryLayout", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.required("name")?,
            category: data.optional("category"),
            index: data.integer("index")?,
            rank: data.optional("rank"),
            show_ineligible_offers: data.optional("showIneligibleOffers"),
            background: data.optional_asset("background", http),
            use_wide_preview: data.optional("useWidePreview"),
            display_type: data.optional("displayType"),
            raw,
        })
    }
}

impl<H> ToRaw for ShopEntryLayout<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Tile colors of an entry, as hex strings.
#[derive(Debug, Clone)]
pub struct ShopEntryColors {
    pub color1: String,
    pub color2: Option<String>,
    pub color3: String,
    pub text_background_color: Option<String>,
    raw: Value,
}

impl<H> Reconstruct<H> for ShopEntryColors {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("ShopEntryColors", &raw)?;
        Ok(Self {
            color1: data.required("color1")?,
            color2: data.optional("color2"),
            color3: data.required("color3")?,
            text_background_color: data.optional("textBackgroundColor"),
            raw,
        })
    }
}

impl ToRaw for ShopEntryColors {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One offer in the shop.
#[derive(Debug, Clone)]
pub struct ShopEntry<H = HttpClient> {
    pub regular_price: i64,
    pub final_price: i64,
    pub in_date: Option<DateTime<Utc>>,
    pub out_date: Option<DateTime<Utc>>,
    pub dev_name: Option<String>,
    pub offer_id: String,
    pub bundle: Option<ShopEntryBundle<H>>,
    pub banner: Option<ShopEntryBanner>,
    pub offer_tag: Option<ShopEntryOfferTag>,
    pub layout_id: Option<String>,
    pub layout: Option<ShopEntryLayout<H>>,
    pub colors: Option<ShopEntryColors>,
    pub giftable: bool,
    pub refundable: bool,
    pub sort_priority: i64,
    /// `None` when absent or not of the form `Size_W_x_H`
    pub tile_size: Option<TileSize>,
    pub display_asset_path: Option<String>,
    pub new_display_asset_path: Option<String>,
    pub new_display_asset: Option<NewDisplayAsset<H>>,
    pub br_items: Option<Vec<CosmeticBr<H>>>,
    pub tracks: Option<Vec<CosmeticTrack<H>>>,
    pub instruments: Option<Vec<CosmeticInstrument<H>>>,
    pub cars: Option<Vec<CosmeticCar<H>>>,
    pub lego_kits: Option<Vec<CosmeticLegoKit<H>>>,
    raw: Value,
}

impl<H> ShopEntry<H> {
    /// V-Bucks saved compared to the regular price.
    pub fn discount(&self) -> i64 {
        self.regular_price - self.final_price
    }
}

impl<H: Clone> Reconstruct<H> for ShopEntry<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("ShopEntry", &raw)?;
        let tile_size = data.optional::<String>("tileSize").and_then(|size| match size.parse() {
            Ok(size) => Some(size),
            Err(reason) => {
                tracing::debug!(entity = "ShopEntry", field = "tileSize", %reason, "Treating optional field as absent");
                None
            }
        });

        Ok(Self {
            regular_price: data.integer("regularPrice")?,
            final_price: data.integer("finalPrice")?,
            in_date: data.optional_timestamp("inDate"),
            out_date: data.optional_timestamp("outDate"),
            dev_name: data.optional("devName"),
            offer_id: data.required("offerId")?,
            bundle: data.optional_object("bundle", http)?,
            banner: data.optional_object("banner", http)?,
            offer_tag: data.optional_object("offerTag", http)?,
            layout_id: data.optional("layoutId"),
            layout: data.optional_object("layout", http)?,
            colors: data.optional_object("colors", http)?,
            giftable: data.required("giftable")?,
            refundable: data.required("refundable")?,
            sort_priority: data.integer("sortPriority")?,
            tile_size,
            display_asset_path: data.optional("displayAssetPath"),
            new_display_asset_path: data.optional("newDisplayAssetPath"),
            new_display_asset: data.optional_object("newDisplayAsset", http)?,
            br_items: data.optional_objects("brItems", http)?,
            tracks: data.optional_objects("tracks", http)?,
            instruments: data.optional_objects("instruments", http)?,
            cars: data.optional_objects("cars", http)?,
            lego_kits: data.optional_objects("legoKits", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for ShopEntry<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// The current item shop.
#[derive(Debug)]
pub struct Shop<H = HttpClient> {
    pub hash: String,
    pub date: Option<DateTime<Utc>>,
    /// Resizable up to 256 pixels
    pub vbuck_icon: Asset<H>,
    /// `None` when the shop is empty
    pub entries: Option<TransformerList<ShopEntry<H>>>,
    raw: Value,
}

impl<H: Clone + Send + Sync + 'static> Reconstruct<H> for Shop<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Shop", &raw)?;
        let vbuck_icon: String = data.required("vbuckIcon")?;
        Ok(Self {
            hash: data.required("hash")?,
            date: data.timestamp("date")?,
            vbuck_icon: Asset::resizable(http.clone(), vbuck_icon, Some(VBUCK_ICON_MAX_SIZE)),
            entries: data.optional_lazy_objects("entries", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for Shop<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shop() -> Value {
        json!({
            "hash": "a9c5e1f0",
            "date": "2024-11-03T00:00:00Z",
            "vbuckIcon": "https://fortnite-api.com/images/vbuck.png",
            "entries": [{
                "regularPrice": 1500,
                "finalPrice": 1200,
                "inDate": "2024-11-03T00:00:00Z",
                "outDate": "2024-11-04T00:00:00Z",
                "offerId": "v2:/a1b2c3",
                "devName": "[VIRTUAL]1 x Renegade Raider for 1200 MtxCurrency",
                "bundle": {"name": "Raider Bundle", "info": "2 items", "image": "https://fortnite-api.com/images/bundle.png"},
                "banner": {"value": "New!", "intensity": "Low", "backendValue": "New"},
                "layoutId": "Raiders.99",
                "layout": {"id": "Raiders.99", "name": "Raiders", "index": 1, "showIneligibleOffers": "always"},
                "colors": {"color1": "ff0000", "color3": "0000ff"},
                "giftable": true,
                "refundable": false,
                "sortPriority": "-1",
                "tileSize": "Size_1_x_2",
                "brItems": [{"id": "CID_028_Athena_Commando_F", "name": "Renegade Raider", "description": "", "added": "2017-09-22T00:00:00Z"}]
            }, {
                "regularPrice": 500,
                "finalPrice": 500,
                "offerId": "v2:/d4e5f6",
                "giftable": false,
                "refundable": true,
                "sortPriority": 0,
                "tileSize": "DoubleWide"
            }]
        })
    }

    #[test]
    fn test_parse_shop() {
        let shop = Shop::from_raw(shop(), &()).unwrap();
        let entries = shop.entries.as_ref().unwrap();
        assert_eq!(entries.len(), 2);

        let first = entries.get(0).unwrap().unwrap();
        assert_eq!(first.discount(), 300);
        assert_eq!(first.sort_priority, -1);
        assert_eq!(first.tile_size, Some(TileSize { width: 1, height: 2 }));
        assert_eq!(first.banner.as_ref().unwrap().intensity, BannerIntensity::Low);
        assert_eq!(first.br_items.as_ref().unwrap()[0].name, "Renegade Raider");
        assert!(first.tracks.is_none());

        let second = entries.get(1).unwrap().unwrap();
        assert!(second.tile_size.is_none());
        assert!(second.in_date.is_none());
        assert_eq!(shop.to_raw(), self::shop());
    }

    #[test]
    fn test_vbuck_icon_resizes() {
        let shop = Shop::from_raw(shop(), &()).unwrap();
        assert_eq!(shop.vbuck_icon.max_size(), Some(256));
        assert_eq!(shop.vbuck_icon.resize(8).unwrap().url(), "https://fortnite-api.com/images/vbuck_8.png");
        assert!(shop.vbuck_icon.resize(512).is_err());
    }

    #[test]
    fn test_layouts_compare_by_id() {
        let layout = json!({"id": "Raiders.99", "name": "Raiders", "index": 1});
        let moved = json!({"id": "Raiders.99", "name": "Raiders", "index": 4, "rank": 2});
        let other = json!({"id": "Legends.12", "name": "Legends", "index": 1});

        let a = ShopEntryLayout::from_raw(layout, &()).unwrap();
        let b = ShopEntryLayout::from_raw(moved, &()).unwrap();
        let c = ShopEntryLayout::from_raw(other, &()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(ShopEntryLayout::from_raw(a.to_raw(), &()).unwrap(), a);

        let set: std::collections::HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_offer_tags_compare_by_id() {
        let tag = ShopEntryOfferTag::from_raw(json!({"id": "sparkletag", "text": "Includes bonus V-Bucks"}), &()).unwrap();
        let reworded = ShopEntryOfferTag::from_raw(json!({"id": "sparkletag", "text": "Bonus V-Bucks"}), &()).unwrap();
        assert_eq!(tag, reworded);
        assert_eq!(<ShopEntryOfferTag as Reconstruct<()>>::from_raw(tag.to_raw(), &()).unwrap(), tag);
    }

    #[test]
    fn test_tile_size_round_trip() {
        let size: TileSize = "Size_3_x_2".parse().unwrap();
        assert_eq!(size.to_string(), "Size_3_x_2");
        assert!("Size_a_x_2".parse::<TileSize>().is_err());
        assert!("Normal".parse::<TileSize>().is_err());
    }
}
