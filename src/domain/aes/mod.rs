//! AES keys of the current build (`/v2/aes`).

pub mod client;

pub use client::{AesKeys, SyncAesKeys};

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;

use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::reconstruct::{Reconstruct, ToRaw};

lazy_static::lazy_static! {
    static ref BUILD_VERSION: Regex = Regex::new(r"([0-9]{2})\.([0-9]{2})").unwrap();
}

/// Game version extracted from a build string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    /// First `NN.NN` in `build`, e.g. `30.10` in `++Fortnite+Release-30.10-CL-33878389`.
    pub fn from_build(build: &str) -> Option<Self> {
        let captures = BUILD_VERSION.captures(build)?;
        Some(Self {
            major: captures[1].parse().ok()?,
            minor: captures[2].parse().ok()?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Key for one dynamically loaded pak file.
#[derive(Debug, Clone)]
pub struct DynamicKey {
    pub pak_filename: String,
    pub pak_guid: String,
    pub key: String,
    raw: Value,
}

impl PartialEq for DynamicKey {
    fn eq(&self, other: &Self) -> bool {
        self.pak_filename == other.pak_filename && self.pak_guid == other.pak_guid && self.key == other.key
    }
}

impl Eq for DynamicKey {}

impl Hash for DynamicKey {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.pak_filename.hash(state);
        self.pak_guid.hash(state);
        self.key.hash(state);
    }
}

impl<H> Reconstruct<H> for DynamicKey {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("DynamicKey", &raw)?;
        Ok(Self {
            pak_filename: data.required("pakFilename")?,
            pak_guid: data.required("pakGuid")?,
            key: data.required("key")?,
            raw,
        })
    }
}

impl ToRaw for DynamicKey {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Main and dynamic AES keys of a build.
///
/// Equal when build, main key and dynamic keys match.
#[derive(Debug, Clone)]
pub struct Aes {
    /// `None` for builds without an encrypted main pak
    pub main_key: Option<String>,
    pub build: String,
    /// `None` when `build` carries no `NN.NN` version
    pub version: Option<Version>,
    pub dynamic_keys: Vec<DynamicKey>,
    pub updated: Option<DateTime<Utc>>,
    raw: Value,
}

impl PartialEq for Aes {
    fn eq(&self, other: &Self) -> bool {
        self.build == other.build && self.main_key == other.main_key && self.dynamic_keys == other.dynamic_keys
    }
}

impl Eq for Aes {}

impl Hash for Aes {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.build.hash(state);
        self.main_key.hash(state);
    }
}

impl<H> Reconstruct<H> for Aes {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Aes", &raw)?;
        let build: String = data.required("build")?;
        Ok(Self {
            main_key: data.optional("mainKey"),
            version: Version::from_build(&build),
            build,
            dynamic_keys: data.optional_objects("dynamicKeys", http)?.unwrap_or_default(),
            updated: data.timestamp("updated")?,
            raw,
        })
    }
}

impl ToRaw for Aes {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
