//! Support-a-Creator codes (`/v2/creatorcode`).

pub mod client;

pub use client::{CreatorCodes, SyncCreatorCodes};

use serde_json::Value;

use crate::domain::account::Account;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::reconstruct::{Reconstruct, ToRaw};
use crate::shared::CreatorCodeStatus;

/// A creator code and the account owning it.
#[derive(Debug, Clone)]
pub struct CreatorCode {
    pub code: String,
    pub account: Account,
    pub status: Option<CreatorCodeStatus>,
    pub verified: Option<bool>,
    raw: Value,
}

impl CreatorCode {
    /// Whether the code is known to be disabled.
    pub fn disabled(&self) -> bool {
        self.status == Some(CreatorCodeStatus::Disabled)
    }
}

impl PartialEq for CreatorCode {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for CreatorCode {}

impl std::hash::Hash for CreatorCode {
    fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
        self.code.to_ascii_lowercase().hash(state);
    }
}

impl<H> Reconstruct<H> for CreatorCode {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("CreatorCode", &raw)?;
        Ok(Self {
            code: data.required("code")?,
            account: data.object("account", http)?,
            status: data.optional("status"),
            verified: data.optional("verified"),
            raw,
        })
    }
}

impl ToRaw for CreatorCode {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
