//! # Fortnite-API Rust client
//!
//! A typed client for the [Fortnite-API](https://fortnite-api.com) game data
//! service, offered as an async [`Client`] and a blocking [`SyncClient`] with
//! identical operations.
//!
//! ## Modules
//!
//! - [`client`]: builder and the two client variants
//! - [`domain`]: typed entities and per-resource sub-clients
//! - [`http`]: transport, routes, status mapping and rate-limit retry
//! - [`shared`]: enums, response flags, fetch options and timestamps
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fortnite_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let client = Client::builder().api_key("your-key").build()?;
//!
//!     let cosmetics = client.cosmetics().fetch_br(FetchOptions::new()).await?;
//!     if let Some(first) = cosmetics.first() {
//!         println!("{}", first?.name);
//!     }
//!
//!     let stats = client
//!         .stats()
//!         .fetch_br("Ninja", BrStatsParams::default())
//!         .await?;
//!     println!("{}", stats.account.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Blocking
//!
//! ```rust,ignore
//! use fortnite_api::prelude::*;
//!
//! fn main() -> Result<(), ApiError> {
//!     let client = SyncClient::builder().build_blocking()?;
//!     let aes = client.aes().fetch(KeyFormat::Hex)?;
//!     println!("{} dynamic keys", aes.dynamic_keys.len());
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Lazily downloaded images.
pub mod asset;

/// Client builder and the async/blocking clients.
pub mod client;

/// Typed entities and sub-clients.
pub mod domain;

pub mod error;

/// Transport layer shared by both clients.
pub mod http;

/// Base URL and other network constants.
pub mod network;

/// Operation tables for async/blocking parity.
pub mod parity;

/// Lazily materialized lists.
pub mod proxy;

pub mod reconstruct;

/// Enums, flags, options and timestamps.
pub mod shared;

pub use asset::Asset;
pub use client::{Client, ClientBuilder, SyncClient};
pub use error::{ApiError, ApiResult};
pub use parity::Operation;
pub use proxy::TransformerList;
pub use reconstruct::{IdComparable, Reconstruct, ToRaw};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fortnite_api::prelude::*;
/// ```
pub mod prelude {
    // Clients
    pub use crate::client::{Client, ClientBuilder, SyncClient};
    pub use crate::http::{HttpClient, RateLimitRetry, SyncHttpClient};

    // Errors
    pub use crate::error::{ApiError, ApiResult};

    // Contracts
    pub use crate::asset::Asset;
    pub use crate::proxy::TransformerList;
    pub use crate::reconstruct::{IdComparable, Reconstruct, ToRaw};

    // Parameters
    pub use crate::domain::{BrStatsParams, CosmeticSearchParams};
    pub use crate::shared::{
        AccountType, FetchOptions, GameLanguage, KeyFormat, MatchMethod, ResponseFlags,
        StatsImageType, TimeWindow,
    };

    // Entities
    pub use crate::domain::{
        Aes, Banner, BannerColor, CosmeticBr, CosmeticCar, CosmeticInstrument, CosmeticLegoKit,
        CosmeticTrack, CosmeticsAll, CreatorCode, Map, MaterialInstance, NewCosmetics,
        NewDisplayAsset, News, Playlist, Shop, ShopEntry, ShopHistory, BrPlayerStats, VariantBean,
        VariantLego,
    };
}
