//! LEGO and bean variants of BR cosmetics (`/v2/cosmetics/lego`, `/v2/cosmetics/beans`).
//!
//! Each variant points at the BR cosmetic it is derived from and can fetch it.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::cosmetics::br::CosmeticBr;
use crate::domain::cosmetics::client::{Cosmetics, SyncCosmetics};
use crate::domain::cosmetics::common::CosmeticImages;
use crate::domain::raw::RawObject;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpClient, SyncHttpClient};
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};
use crate::shared::{CustomGender, FetchOptions};

/// LEGO style of a BR cosmetic.
#[derive(Debug, Clone)]
pub struct VariantLego<H = HttpClient> {
    pub id: String,
    /// Id of the BR cosmetic this is a variant of
    pub cosmetic_id: String,
    pub sound_library_tags: Option<Vec<String>>,
    pub images: Option<CosmeticImages<H>>,
    pub path: Option<String>,
    pub added: Option<DateTime<Utc>>,
    http: H,
    raw: Value,
}

impl_id_eq!(generic: VariantLego);

impl<H: Clone> Reconstruct<H> for VariantLego<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("VariantLego", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            cosmetic_id: data.required("cosmeticId")?,
            sound_library_tags: data.optional("soundLibraryTags"),
            images: data.optional_object("images", http)?,
            path: data.optional("path"),
            added: data.timestamp("added")?,
            http: http.clone(),
            raw,
        })
    }
}

impl<H> ToRaw for VariantLego<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

impl VariantLego<HttpClient> {
    /// Fetch the BR cosmetic this variant belongs to.
    pub async fn fetch_cosmetic_br(&self, options: FetchOptions) -> ApiResult<CosmeticBr<HttpClient>> {
        Cosmetics::new(&self.http)
            .fetch_br_by_id(&self.cosmetic_id, options)
            .await
    }
}

impl VariantLego<SyncHttpClient> {
    /// Fetch the BR cosmetic this variant belongs to.
    pub fn fetch_cosmetic_br(&self, options: FetchOptions) -> ApiResult<CosmeticBr<SyncHttpClient>> {
        SyncCosmetics::new(&self.http).fetch_br_by_id(&self.cosmetic_id, options)
    }
}

/// Bean (Fall Guys) style of a BR cosmetic.
#[derive(Debug, Clone)]
pub struct VariantBean<H = HttpClient> {
    pub id: String,
    /// Id of the BR cosmetic, absent for beans with no BR counterpart
    pub cosmetic_id: Option<String>,
    pub name: String,
    pub gender: CustomGender,
    pub gameplay_tags: Option<Vec<String>>,
    pub images: Option<CosmeticImages<H>>,
    pub path: Option<String>,
    pub added: Option<DateTime<Utc>>,
    http: H,
    raw: Value,
}

impl_id_eq!(generic: VariantBean);

impl<H> VariantBean<H> {
    fn require_cosmetic_id(&self) -> ApiResult<&str> {
        self.cosmetic_id.as_deref().ok_or_else(|| {
            ApiError::MalformedRequest(format!("Bean {} has no BR cosmetic to fetch.", self.id))
        })
    }
}

impl<H: Clone> Reconstruct<H> for VariantBean<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("VariantBean", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            cosmetic_id: data.optional("cosmeticId"),
            name: data.required("name")?,
            gender: data.required("gender")?,
            gameplay_tags: data.optional("gameplayTags"),
            images: data.optional_object("images", http)?,
            path: data.optional("path"),
            added: data.timestamp("added")?,
            http: http.clone(),
            raw,
        })
    }
}

impl<H> ToRaw for VariantBean<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

impl VariantBean<HttpClient> {
    /// Fetch the BR cosmetic this bean belongs to.
    ///
    /// Fails with `MalformedRequest` when the bean has no `cosmetic_id`.
    pub async fn fetch_cosmetic_br(&self, options: FetchOptions) -> ApiResult<CosmeticBr<HttpClient>> {
        let id = self.require_cosmetic_id()?;
        Cosmetics::new(&self.http).fetch_br_by_id(id, options).await
    }
}

impl VariantBean<SyncHttpClient> {
    /// Fetch the BR cosmetic this bean belongs to.
    pub fn fetch_cosmetic_br(&self, options: FetchOptions) -> ApiResult<CosmeticBr<SyncHttpClient>> {
        let id = self.require_cosmetic_id()?;
        SyncCosmetics::new(&self.http).fetch_br_by_id(id, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_lego_variant() {
        let raw = json!({
            "id": "Character_Renegade_Lego",
            "cosmeticId": "CID_028_Athena_Commando_F",
            "soundLibraryTags": [],
            "images": {"small": "https://fortnite-api.com/images/small.png", "large": "https://fortnite-api.com/images/large.png"},
            "added": "2023-12-07T00:00:00Z"
        });
        let lego = VariantLego::from_raw(raw, &()).unwrap();
        assert_eq!(lego.cosmetic_id, "CID_028_Athena_Commando_F");
        assert_eq!(lego.sound_library_tags, Some(vec![]));
    }

    #[test]
    fn test_bean_without_cosmetic() {
        let raw = json!({
            "id": "Bean_Default",
            "name": "Default Bean",
            "gender": "EFortCustomGender::Female",
            "added": "2024-05-01T00:00:00Z"
        });
        let bean = VariantBean::from_raw(raw, &()).unwrap();
        assert_eq!(bean.gender, CustomGender::Female);
        assert!(matches!(bean.require_cosmetic_id(), Err(ApiError::MalformedRequest(_))));
    }
}
