//! Per-call overrides of the client defaults.

use crate::http::{ClientSettings, Route};
use crate::shared::{GameLanguage, ResponseFlags};

/// Language and response flags for one call.
///
/// Fields left unset fall back to the client's configured defaults.
///
/// ```ignore
/// let options = FetchOptions::new()
///     .language(GameLanguage::German)
///     .response_flags(ResponseFlags::INCLUDE_SHOP_HISTORY);
/// let cosmetics = client.cosmetics().fetch_br(options).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub language: Option<GameLanguage>,
    pub response_flags: Option<ResponseFlags>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: GameLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn response_flags(mut self, flags: ResponseFlags) -> Self {
        self.response_flags = Some(flags);
        self
    }

    /// Add `language` and `responseFlags` to a route, resolving defaults.
    pub(crate) fn apply(&self, route: Route, settings: &ClientSettings) -> Route {
        route
            .param("language", settings.language(self.language.clone()))
            .param("responseFlags", settings.flags(self.response_flags))
    }
}

impl From<GameLanguage> for FetchOptions {
    fn from(language: GameLanguage) -> Self {
        Self::new().language(language)
    }
}

impl From<ResponseFlags> for FetchOptions {
    fn from(flags: ResponseFlags) -> Self {
        Self::new().response_flags(flags)
    }
}
