//! Criteria for `/v2/cosmetics/br/search` and `/v2/cosmetics/br/search/all`.

use chrono::{DateTime, Utc};

use crate::error::{ApiError, ApiResult};
use crate::http::{ClientSettings, QueryValue, Route};
use crate::shared::{FetchOptions, GameLanguage, MatchMethod, ResponseFlags};

/// Search criteria for BR cosmetics.
///
/// At least one criterion must be set; an empty search fails with
/// `MalformedRequest` before any request is made.
///
/// ```ignore
/// let params = CosmeticSearchParams::new()
///     .name("Renegade Raider")
///     .match_method(MatchMethod::Full);
/// let cosmetic = client.cosmetics().search_br(&params).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CosmeticSearchParams {
    options: FetchOptions,
    search_language: Option<GameLanguage>,
    match_method: Option<MatchMethod>,
    criteria: Vec<(&'static str, String)>,
}

macro_rules! criteria {
    ($($(#[$meta:meta])* $method:ident($ty:ty) => $key:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $method(self, value: $ty) -> Self {
                self.criterion($key, value)
            }
        )*
    };
}

impl CosmeticSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language of the returned strings.
    pub fn language(mut self, language: GameLanguage) -> Self {
        self.options.language = Some(language);
        self
    }

    /// Language the string criteria are matched in.
    pub fn search_language(mut self, language: GameLanguage) -> Self {
        self.search_language = Some(language);
        self
    }

    pub fn match_method(mut self, method: MatchMethod) -> Self {
        self.match_method = Some(method);
        self
    }

    pub fn response_flags(mut self, flags: ResponseFlags) -> Self {
        self.options.response_flags = Some(flags);
        self
    }

    fn criterion(mut self, key: &'static str, value: impl QueryValue) -> Self {
        self.criteria.retain(|(k, _)| *k != key);
        self.criteria.push((key, value.to_query_value()));
        self
    }

    criteria! {
        id(&str) => "id";
        name(&str) => "name";
        description(&str) => "description";
        /// Type value, e.g. "outfit"
        cosmetic_type(&str) => "type";
        display_type(&str) => "displayType";
        backend_type(&str) => "backendType";
        rarity(&str) => "rarity";
        display_rarity(&str) => "displayRarity";
        backend_rarity(&str) => "backendRarity";
        has_series(bool) => "hasSeries";
        series(&str) => "series";
        backend_series(&str) => "backendSeries";
        has_set(bool) => "hasSet";
        set(&str) => "set";
        set_text(&str) => "setText";
        backend_set(&str) => "backendSet";
        has_introduction(bool) => "hasIntroduction";
        backend_introduction(i64) => "backendIntroduction";
        introduction_chapter(&str) => "introductionChapter";
        introduction_season(&str) => "introductionSeason";
        has_featured_image(bool) => "hasFeaturedImage";
        has_variants(bool) => "hasVariants";
        has_gameplay_tags(bool) => "hasGameplayTags";
        gameplay_tag(&str) => "gameplayTag";
        has_meta_tags(bool) => "hasMetaTags";
        meta_tag(&str) => "metaTag";
        has_dynamic_pak_id(bool) => "hasDynamicPakId";
        dynamic_pak_id(&str) => "dynamicPakId";
        added(DateTime<Utc>) => "added";
        added_since(DateTime<Utc>) => "addedSince";
        /// Not in the shop for at least this many days
        unseen_for(i64) => "unseenFor";
        last_appearance(DateTime<Utc>) => "lastAppearance";
    }

    /// Whether no search criterion has been set.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub(crate) fn route(&self, path: &str, settings: &ClientSettings) -> ApiResult<Route> {
        if self.is_empty() {
            return Err(ApiError::MalformedRequest(
                "At least one search parameter is required.".into(),
            ));
        }
        let route = self
            .options
            .apply(Route::new(path), settings)
            .opt_param("searchLanguage", self.search_language.as_ref())
            .opt_param("matchMethod", self.match_method.as_ref());
        Ok(self
            .criteria
            .iter()
            .fold(route, |route, (key, value)| route.param(*key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{RateLimitRetry, SerdeJsonCodec};
    use std::sync::Arc;

    fn settings() -> ClientSettings {
        ClientSettings {
            base_url: "https://fortnite-api.com".into(),
            api_key: None,
            default_language: GameLanguage::English,
            response_flags: ResponseFlags::none(),
            beta: false,
            rate_limit: RateLimitRetry::default(),
            codec: Arc::new(SerdeJsonCodec),
        }
    }

    #[test]
    fn test_empty_search_is_rejected() {
        let params = CosmeticSearchParams::new().language(GameLanguage::German);
        assert!(params.is_empty());
        assert!(matches!(
            params.route("/v2/cosmetics/br/search", &settings()),
            Err(ApiError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_search_route() {
        let route = CosmeticSearchParams::new()
            .name("Renegade Raider")
            .match_method(MatchMethod::Full)
            .has_variants(true)
            .route("/v2/cosmetics/br/search", &settings())
            .unwrap();

        assert_eq!(route.query_value("language"), Some("en"));
        assert_eq!(route.query_value("responseFlags"), Some("0"));
        assert_eq!(route.query_value("matchMethod"), Some("full"));
        assert_eq!(route.query_value("name"), Some("Renegade Raider"));
        assert_eq!(route.query_value("hasVariants"), Some("true"));
    }

    #[test]
    fn test_criterion_overrides_previous_value() {
        let params = CosmeticSearchParams::new().rarity("rare").rarity("epic");
        let route = params.route("/v2/cosmetics/br/search/all", &settings()).unwrap();
        assert_eq!(route.query_value("rarity"), Some("epic"));
        assert_eq!(route.query().iter().filter(|(k, _)| *k == "rarity").count(), 1);
    }
}
