//! Epic Games account reference.

use serde_json::Value;

use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// An Epic Games account as embedded in stats and creator codes.
#[derive(Debug, Clone)]
pub struct Account {
    /// Account id
    pub id: String,
    /// Display name
    pub name: String,
    raw: Value,
}

impl_id_eq!(Account);

impl<H> Reconstruct<H> for Account {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Account", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.required("name")?,
            raw,
        })
    }
}

impl ToRaw for Account {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
