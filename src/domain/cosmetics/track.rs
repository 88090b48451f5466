//! Jam track cosmetics (`/v2/cosmetics/tracks`).

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::cosmetics::common::ShopHistory;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// Per-part difficulty of a jam track, 0 to 6.
#[derive(Debug, Clone)]
pub struct CosmeticTrackDifficulty {
    pub vocals: i64,
    pub guitar: i64,
    pub bass: i64,
    pub plastic_bass: i64,
    pub drums: i64,
    pub plastic_drums: i64,
    raw: Value,
}

impl<H> Reconstruct<H> for CosmeticTrackDifficulty {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticTrackDifficulty", &raw)?;
        Ok(Self {
            vocals: data.integer("vocals")?,
            guitar: data.integer("guitar")?,
            bass: data.integer("bass")?,
            plastic_bass: data.integer("plasticBass")?,
            drums: data.integer("drums")?,
            plastic_drums: data.integer("plasticDrums")?,
            raw,
        })
    }
}

impl ToRaw for CosmeticTrackDifficulty {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A jam track.
#[derive(Debug, Clone)]
pub struct CosmeticTrack<H = HttpClient> {
    pub id: String,
    pub dev_name: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub release_year: i64,
    pub bpm: i64,
    /// Length in seconds
    pub duration: i64,
    pub difficulty: CosmeticTrackDifficulty,
    pub gameplay_tags: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub album_art: Asset<H>,
    pub added: Option<DateTime<Utc>>,
    pub shop_history: Option<Vec<DateTime<Utc>>>,
    raw: Value,
}

impl_id_eq!(generic: CosmeticTrack);

impl<H> ShopHistory for CosmeticTrack<H> {
    fn shop_history(&self) -> Option<&[DateTime<Utc>]> {
        self.shop_history.as_deref()
    }
}

impl<H: Clone> Reconstruct<H> for CosmeticTrack<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CosmeticTrack", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            dev_name: data.required("devName")?,
            title: data.required("title")?,
            artist: data.required("artist")?,
            album: data.optional("album"),
            release_year: data.integer("releaseYear")?,
            bpm: data.integer("bpm")?,
            duration: data.integer("duration")?,
            difficulty: data.object("difficulty", http)?,
            gameplay_tags: data.optional("gameplayTags"),
            genres: data.optional("genres"),
            album_art: data.asset("albumArt", http)?,
            added: data.timestamp("added")?,
            shop_history: data.timestamps("shopHistory"),
            raw,
        })
    }
}

impl<H> ToRaw for CosmeticTrack<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
