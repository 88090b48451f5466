//! Battle Royale island map (`/v1/map`).

pub mod client;

pub use client::{MapClient, SyncMapClient};

use serde_json::Value;

use crate::asset::Asset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::proxy::TransformerList;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// Map renders with and without POI labels.
#[derive(Debug, Clone)]
pub struct MapImages<H = HttpClient> {
    pub blank: Asset<H>,
    pub pois: Asset<H>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for MapImages<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("MapImages", &raw)?;
        Ok(Self {
            blank: data.asset("blank", http)?,
            pois: data.asset("pois", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for MapImages<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// World position of a POI.
#[derive(Debug, Clone)]
pub struct PoiLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    raw: Value,
}

impl PartialEq for PoiLocation {
    fn eq(&self, other: &Self) -> bool {
        (self.x, self.y, self.z) == (other.x, other.y, other.z)
    }
}

impl<H> Reconstruct<H> for PoiLocation {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("PoiLocation", &raw)?;
        Ok(Self {
            x: data.required("x")?,
            y: data.required("y")?,
            z: data.required("z")?,
            raw,
        })
    }
}

impl ToRaw for PoiLocation {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A named point of interest.
#[derive(Debug, Clone)]
pub struct Poi {
    pub id: String,
    /// Unnamed landmarks have no name
    pub name: Option<String>,
    pub location: PoiLocation,
    raw: Value,
}

impl_id_eq!(Poi);

impl<H> Reconstruct<H> for Poi {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Poi", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.optional("name"),
            location: data.object("location", http)?,
            raw,
        })
    }
}

impl ToRaw for Poi {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// The current map and its POIs.
#[derive(Debug)]
pub struct Map<H = HttpClient> {
    pub images: MapImages<H>,
    pub pois: TransformerList<Poi>,
    raw: Value,
}

impl<H: Clone + Send + Sync + 'static> Reconstruct<H> for Map<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Map", &raw)?;
        Ok(Self {
            images: data.object("images", http)?,
            pois: data.lazy_objects("pois", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for Map<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
