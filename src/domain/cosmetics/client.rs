//! Cosmetics sub-clients.

use crate::domain::cosmetics::{
    CosmeticBr, CosmeticCar, CosmeticInstrument, CosmeticLegoKit, CosmeticSearchParams,
    CosmeticTrack, CosmeticsAll, NewCosmetics, VariantBean, VariantLego,
};
use crate::domain::raw::lazy_list;
use crate::error::{ApiError, ApiResult};
use crate::http::{ClientSettings, HttpClient, Route, SyncHttpClient};
use crate::parity::{async_operations, blocking_operations};
use crate::proxy::TransformerList;
use crate::reconstruct::Reconstruct;
use crate::shared::FetchOptions;

const ALL: &str = "/v2/cosmetics";
const BR: &str = "/v2/cosmetics/br";
const CARS: &str = "/v2/cosmetics/cars";
const INSTRUMENTS: &str = "/v2/cosmetics/instruments";
const LEGO_KITS: &str = "/v2/cosmetics/lego/kits";
const TRACKS: &str = "/v2/cosmetics/tracks";
const VARIANTS_LEGO: &str = "/v2/cosmetics/lego";
const VARIANTS_BEANS: &str = "/v2/cosmetics/beans";
const NEW: &str = "/v2/cosmetics/new";
const SEARCH: &str = "/v2/cosmetics/br/search";
const SEARCH_ALL: &str = "/v2/cosmetics/br/search/all";

// ============================================================================
// Route builders (shared by both variants)
// ============================================================================

fn listing(path: &str, options: &FetchOptions, settings: &ClientSettings) -> Route {
    options.apply(Route::new(path), settings)
}

fn br_by_id(id: &str, options: &FetchOptions, settings: &ClientSettings) -> ApiResult<Route> {
    if id.trim().is_empty() {
        return Err(ApiError::MalformedRequest("A cosmetic id is required.".into()));
    }
    Ok(options.apply(Route::with_segment(BR, id), settings))
}

// ============================================================================
// Async
// ============================================================================

/// Cosmetics endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Cosmetics<'a> {
    http: &'a HttpClient,
}

impl<'a> Cosmetics<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    async fn list<T>(&self, path: &str, entity: &'static str, options: &FetchOptions) -> ApiResult<TransformerList<T>>
    where
        T: Reconstruct<HttpClient> + 'static,
    {
        let raw = self.http.request(&listing(path, options, self.http.settings())).await?;
        lazy_list(entity, raw, self.http)
    }
}

async_operations! {
    impl Cosmetics {
        /// Every cosmetic of every category.
        pub async fn fetch_all(&self, options: FetchOptions) -> ApiResult<CosmeticsAll<HttpClient>> {
            let raw = self.http.request(&listing(ALL, &options, self.http.settings())).await?;
            CosmeticsAll::from_raw(raw, self.http)
        }

        pub async fn fetch_br(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticBr<HttpClient>>> {
            self.list(BR, "CosmeticBr", &options).await
        }

        /// A single BR cosmetic by id. Unknown ids fail with `NotFound`.
        pub async fn fetch_br_by_id(&self, id: &str, options: FetchOptions) -> ApiResult<CosmeticBr<HttpClient>> {
            let raw = self.http.request(&br_by_id(id, &options, self.http.settings())?).await?;
            CosmeticBr::from_raw(raw, self.http)
        }

        pub async fn fetch_cars(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticCar<HttpClient>>> {
            self.list(CARS, "CosmeticCar", &options).await
        }

        pub async fn fetch_instruments(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticInstrument<HttpClient>>> {
            self.list(INSTRUMENTS, "CosmeticInstrument", &options).await
        }

        pub async fn fetch_lego_kits(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticLegoKit<HttpClient>>> {
            self.list(LEGO_KITS, "CosmeticLegoKit", &options).await
        }

        pub async fn fetch_tracks(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticTrack<HttpClient>>> {
            self.list(TRACKS, "CosmeticTrack", &options).await
        }

        pub async fn fetch_variants_lego(&self, options: FetchOptions) -> ApiResult<TransformerList<VariantLego<HttpClient>>> {
            self.list(VARIANTS_LEGO, "VariantLego", &options).await
        }

        pub async fn fetch_variants_beans(&self, options: FetchOptions) -> ApiResult<TransformerList<VariantBean<HttpClient>>> {
            self.list(VARIANTS_BEANS, "VariantBean", &options).await
        }

        /// Cosmetics added in the latest build.
        pub async fn fetch_new(&self, options: FetchOptions) -> ApiResult<NewCosmetics<HttpClient>> {
            let raw = self.http.request(&listing(NEW, &options, self.http.settings())).await?;
            NewCosmetics::from_raw(raw, self.http)
        }

        /// First BR cosmetic matching the criteria.
        pub async fn search_br(&self, params: &CosmeticSearchParams) -> ApiResult<CosmeticBr<HttpClient>> {
            let route = params.route(SEARCH, self.http.settings())?;
            let raw = self.http.request(&route).await?;
            CosmeticBr::from_raw(raw, self.http)
        }

        /// Every BR cosmetic matching the criteria.
        pub async fn search_br_all(&self, params: &CosmeticSearchParams) -> ApiResult<TransformerList<CosmeticBr<HttpClient>>> {
            let route = params.route(SEARCH_ALL, self.http.settings())?;
            let raw = self.http.request(&route).await?;
            lazy_list("CosmeticBr", raw, self.http)
        }
    }
}

// ============================================================================
// Blocking
// ============================================================================

/// Cosmetics endpoints, blocking.
#[derive(Debug, Clone, Copy)]
pub struct SyncCosmetics<'a> {
    http: &'a SyncHttpClient,
}

impl<'a> SyncCosmetics<'a> {
    pub(crate) fn new(http: &'a SyncHttpClient) -> Self {
        Self { http }
    }

    fn list<T>(&self, path: &str, entity: &'static str, options: &FetchOptions) -> ApiResult<TransformerList<T>>
    where
        T: Reconstruct<SyncHttpClient> + 'static,
    {
        let raw = self.http.request(&listing(path, options, self.http.settings()))?;
        lazy_list(entity, raw, self.http)
    }
}

blocking_operations! {
    impl SyncCosmetics {
        /// Every cosmetic of every category.
        pub fn fetch_all(&self, options: FetchOptions) -> ApiResult<CosmeticsAll<SyncHttpClient>> {
            let raw = self.http.request(&listing(ALL, &options, self.http.settings()))?;
            CosmeticsAll::from_raw(raw, self.http)
        }

        pub fn fetch_br(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticBr<SyncHttpClient>>> {
            self.list(BR, "CosmeticBr", &options)
        }

        /// A single BR cosmetic by id. Unknown ids fail with `NotFound`.
        pub fn fetch_br_by_id(&self, id: &str, options: FetchOptions) -> ApiResult<CosmeticBr<SyncHttpClient>> {
            let raw = self.http.request(&br_by_id(id, &options, self.http.settings())?)?;
            CosmeticBr::from_raw(raw, self.http)
        }

        pub fn fetch_cars(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticCar<SyncHttpClient>>> {
            self.list(CARS, "CosmeticCar", &options)
        }

        pub fn fetch_instruments(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticInstrument<SyncHttpClient>>> {
            self.list(INSTRUMENTS, "CosmeticInstrument", &options)
        }

        pub fn fetch_lego_kits(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticLegoKit<SyncHttpClient>>> {
            self.list(LEGO_KITS, "CosmeticLegoKit", &options)
        }

        pub fn fetch_tracks(&self, options: FetchOptions) -> ApiResult<TransformerList<CosmeticTrack<SyncHttpClient>>> {
            self.list(TRACKS, "CosmeticTrack", &options)
        }

        pub fn fetch_variants_lego(&self, options: FetchOptions) -> ApiResult<TransformerList<VariantLego<SyncHttpClient>>> {
            self.list(VARIANTS_LEGO, "VariantLego", &options)
        }

        pub fn fetch_variants_beans(&self, options: FetchOptions) -> ApiResult<TransformerList<VariantBean<SyncHttpClient>>> {
            self.list(VARIANTS_BEANS, "VariantBean", &options)
        }

        /// Cosmetics added in the latest build.
        pub fn fetch_new(&self, options: FetchOptions) -> ApiResult<NewCosmetics<SyncHttpClient>> {
            let raw = self.http.request(&listing(NEW, &options, self.http.settings()))?;
            NewCosmetics::from_raw(raw, self.http)
        }

        /// First BR cosmetic matching the criteria.
        pub fn search_br(&self, params: &CosmeticSearchParams) -> ApiResult<CosmeticBr<SyncHttpClient>> {
            let route = params.route(SEARCH, self.http.settings())?;
            let raw = self.http.request(&route)?;
            CosmeticBr::from_raw(raw, self.http)
        }

        /// Every BR cosmetic matching the criteria.
        pub fn search_br_all(&self, params: &CosmeticSearchParams) -> ApiResult<TransformerList<CosmeticBr<SyncHttpClient>>> {
            let route = params.route(SEARCH_ALL, self.http.settings())?;
            let raw = self.http.request(&route)?;
            lazy_list("CosmeticBr", raw, self.http)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{RateLimitRetry, SerdeJsonCodec};
    use crate::shared::{GameLanguage, ResponseFlags};
    use std::sync::Arc;

    fn settings() -> ClientSettings {
        ClientSettings {
            base_url: "https://fortnite-api.com".into(),
            api_key: None,
            default_language: GameLanguage::French,
            response_flags: ResponseFlags::INCLUDE_PATHS,
            beta: false,
            rate_limit: RateLimitRetry::default(),
            codec: Arc::new(SerdeJsonCodec),
        }
    }

    #[test]
    fn test_defaults_apply_to_listing() {
        let route = listing(BR, &FetchOptions::new(), &settings());
        assert_eq!(route.url("https://fortnite-api.com"), "https://fortnite-api.com/v2/cosmetics/br?language=fr&responseFlags=1");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let options = FetchOptions::new()
            .language(GameLanguage::Japanese)
            .response_flags(ResponseFlags::all());
        let route = br_by_id("CID_028_Athena_Commando_F", &options, &settings()).unwrap();
        assert_eq!(route.path(), "/v2/cosmetics/br/CID_028_Athena_Commando_F");
        assert_eq!(route.query_value("language"), Some("ja"));
        assert_eq!(route.query_value("responseFlags"), Some("7"));
    }

    #[test]
    fn test_id_is_percent_encoded() {
        let route = br_by_id("a/b c", &FetchOptions::new(), &settings()).unwrap();
        assert_eq!(route.path(), "/v2/cosmetics/br/a%2Fb%20c");
    }

    #[test]
    fn test_blank_id_is_rejected() {
        for id in ["", "   "] {
            let result = br_by_id(id, &FetchOptions::new(), &settings());
            assert!(matches!(result, Err(ApiError::MalformedRequest(_))));
        }
    }

    #[test]
    fn test_operation_tables_match() {
        assert_eq!(Cosmetics::OPERATIONS, SyncCosmetics::OPERATIONS);
        assert_eq!(Cosmetics::OPERATIONS.len(), 12);
        assert_eq!(Cosmetics::OPERATIONS[3].name, "fetch_cars");
    }
}
