//! Shared fixtures for the integration tests.
//!
//! Every test runs against a local wiremock server. The blocking client owns a
//! runtime of its own, so it is built, used and dropped inside
//! `spawn_blocking` or `block_in_place`.

#![allow(dead_code)]

use std::time::Duration;

use fortnite_api::domain::GameModeNews;
use fortnite_api::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_ACCOUNT_ID: &str = "4735ce9132924caf8a5b17789b40f79c";
pub const TEST_ACCOUNT_NAME: &str = "Ninja";
pub const TEST_COSMETIC_ID: &str = "CID_028_Athena_Commando_F";
pub const TEST_PLAYLIST_ID: &str = "Playlist_DefaultSolo";

/// Wrap a payload the way the API does.
pub fn envelope(data: Value) -> Value {
    json!({ "status": 200, "data": data })
}

/// Serve `data` inside the envelope for GET `route`.
pub async fn mount(server: &MockServer, route: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(data)))
        .mount(server)
        .await;
}

/// Builder pointed at the mock server, with a key, beta access and short retries.
pub fn builder(server: &MockServer) -> ClientBuilder {
    Client::builder()
        .base_url(server.uri())
        .api_key(TEST_API_KEY)
        .beta(true)
        .rate_limit(RateLimitRetry::default().with_delay(Duration::from_millis(10)))
}

/// Run `f` against a blocking client built from `builder`.
pub async fn blocking<F, R>(builder: ClientBuilder, f: F) -> R
where
    F: FnOnce(&SyncClient) -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let client = builder.build_blocking().expect("blocking client");
        f(&client)
    })
    .await
    .expect("blocking task panicked")
}

// =============================================================================
// Hybrid client
// =============================================================================

/// Holds an async and a blocking client over the same backend and forwards
/// every operation to both, asserting they agree before returning the async
/// result. Needs a multi-threaded runtime.
pub struct HybridClient {
    client: Client,
    sync_client: Option<SyncClient>,
}

impl HybridClient {
    pub fn new(builder: ClientBuilder) -> Self {
        let client = builder.clone().build().expect("async client");
        let sync_client =
            tokio::task::block_in_place(|| builder.build_blocking().expect("blocking client"));
        Self {
            client,
            sync_client: Some(sync_client),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn sync<R>(&self, f: impl FnOnce(&SyncClient) -> R) -> R {
        let sync_client = self.sync_client.as_ref().expect("blocking client open");
        tokio::task::block_in_place(|| f(sync_client))
    }
}

impl Drop for HybridClient {
    fn drop(&mut self) {
        if let Some(sync_client) = self.sync_client.take() {
            tokio::task::block_in_place(move || drop(sync_client));
        }
    }
}

fn agree<A, S>(
    operation: &str,
    async_result: &ApiResult<A>,
    sync_result: &ApiResult<S>,
    raw_async: impl Fn(&A) -> Value,
    raw_sync: impl Fn(&S) -> Value,
) {
    match (async_result, sync_result) {
        (Ok(a), Ok(s)) => assert_eq!(raw_async(a), raw_sync(s), "{} returned different data", operation),
        (Err(a), Err(s)) => assert_eq!(a.to_string(), s.to_string(), "{} failed differently", operation),
        (a, s) => panic!(
            "{}: async ok={} but blocking ok={}",
            operation,
            a.is_ok(),
            s.is_ok()
        ),
    }
}

fn one<T: ToRaw>(value: &T) -> Value {
    value.to_raw()
}

fn many<T: ToRaw>(values: &Vec<T>) -> Value {
    Value::Array(values.iter().map(ToRaw::to_raw).collect())
}

fn lazy<T>(list: &TransformerList<T>) -> Value {
    Value::Array(list.to_raw())
}

macro_rules! forward {
    ($( $name:ident = $facade:ident . $op:ident ( $($arg:ident : $ty:ty),* ) -> $ret:ty => $raw:ident; )*) => {
        impl HybridClient {
            $(
                pub async fn $name(&self, $($arg: $ty),*) -> ApiResult<$ret> {
                    let sync_result = self.sync(|c| c.$facade().$op($(<$ty as Clone>::clone(&$arg)),*));
                    let result = self.client.$facade().$op($($arg),*).await;
                    agree(stringify!($name), &result, &sync_result, $raw, $raw);
                    result
                }
            )*
        }
    };
}

forward! {
    cosmetics_all = cosmetics.fetch_all(options: FetchOptions) -> CosmeticsAll => one;
    cosmetics_br = cosmetics.fetch_br(options: FetchOptions) -> TransformerList<CosmeticBr> => lazy;
    cosmetic_br = cosmetics.fetch_br_by_id(id: &str, options: FetchOptions) -> CosmeticBr => one;
    cosmetics_cars = cosmetics.fetch_cars(options: FetchOptions) -> TransformerList<CosmeticCar> => lazy;
    cosmetics_instruments = cosmetics.fetch_instruments(options: FetchOptions) -> TransformerList<CosmeticInstrument> => lazy;
    cosmetics_lego_kits = cosmetics.fetch_lego_kits(options: FetchOptions) -> TransformerList<CosmeticLegoKit> => lazy;
    cosmetics_tracks = cosmetics.fetch_tracks(options: FetchOptions) -> TransformerList<CosmeticTrack> => lazy;
    variants_lego = cosmetics.fetch_variants_lego(options: FetchOptions) -> TransformerList<VariantLego> => lazy;
    variants_beans = cosmetics.fetch_variants_beans(options: FetchOptions) -> TransformerList<VariantBean> => lazy;
    cosmetics_new = cosmetics.fetch_new(options: FetchOptions) -> NewCosmetics => one;
    search_br = cosmetics.search_br(params: &CosmeticSearchParams) -> CosmeticBr => one;
    search_br_all = cosmetics.search_br_all(params: &CosmeticSearchParams) -> TransformerList<CosmeticBr> => lazy;
    aes = aes.fetch(key_format: KeyFormat) -> Aes => one;
    banners = banners.fetch(language: Option<GameLanguage>) -> Vec<Banner> => many;
    banner_colors = banners.fetch_colors() -> Vec<BannerColor> => many;
    creator_code = creator_codes.fetch(name: &str) -> CreatorCode => one;
    map = map.fetch(language: Option<GameLanguage>) -> Map => one;
    news = news.fetch(language: Option<GameLanguage>) -> News => one;
    news_br = news.fetch_br(language: Option<GameLanguage>) -> GameModeNews => one;
    news_stw = news.fetch_stw(language: Option<GameLanguage>) -> GameModeNews => one;
    playlists = playlists.fetch(language: Option<GameLanguage>) -> Vec<Playlist> => many;
    playlist = playlists.fetch_by_id(id: &str, language: Option<GameLanguage>) -> Playlist => one;
    shop = shop.fetch(options: FetchOptions) -> Shop => one;
    stats_br = stats.fetch_br(name: &str, params: BrStatsParams) -> BrPlayerStats => one;
    stats_br_by_id = stats.fetch_br_by_id(account_id: &str, params: BrStatsParams) -> BrPlayerStats => one;
    new_display_assets = beta.fetch_new_display_assets() -> Vec<NewDisplayAsset> => many;
    material_instances = beta.fetch_material_instances() -> Vec<MaterialInstance> => many;
}

// =============================================================================
// Payloads
// =============================================================================

pub fn account() -> Value {
    json!({ "id": TEST_ACCOUNT_ID, "name": TEST_ACCOUNT_NAME })
}

pub fn aes() -> Value {
    json!({
        "build": "++Fortnite+Release-30.10-CL-33878389-Windows",
        "mainKey": "0x1F6A5D0D3B3A4B6C",
        "dynamicKeys": [
            {"pakFilename": "pakchunk1001-WindowsClient.pak", "pakGuid": "F1A2", "key": "0xAB"},
            {"pakFilename": "pakchunk1002-WindowsClient.pak", "pakGuid": "F1A3", "key": "0xCD"}
        ],
        "updated": "2024-06-07T06:01:53Z"
    })
}

pub fn creator_code() -> Value {
    json!({ "code": "ninja", "account": account(), "status": "active", "verified": false })
}

pub fn banners() -> Value {
    json!([{
        "id": "BRSeason01",
        "name": "Season 1",
        "description": "Earned in Season 1.",
        "category": "Seasonal",
        "devName": "Season 1 Banner",
        "fullUsageRights": true,
        "smallIcon": "https://fortnite-api.com/images/banners/brseason01/smallicon.png",
        "icon": "https://fortnite-api.com/images/banners/brseason01/icon.png"
    }])
}

pub fn banner_colors() -> Value {
    json!([
        {"id": "DefaultColor1", "color": "ff0000", "category": "Red", "subCategoryGroup": 1},
        {"id": "DefaultColor2", "color": "00ff00", "category": "Green", "subCategoryGroup": "2"}
    ])
}

pub fn cosmetic_br(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Renegade Raider",
        "description": "Rare renegade raider outfit.",
        "type": {"value": "outfit", "displayValue": "Outfit", "backendValue": "AthenaCharacter"},
        "rarity": {"value": "rare", "displayValue": "Rare", "backendValue": "EFortRarity::Rare"},
        "introduction": {"chapter": "1", "season": "1", "text": "Introduced in Chapter 1, Season 1.", "backendValue": 1},
        "images": {
            "smallIcon": "https://fortnite-api.com/images/cosmetics/br/cid_028/smallicon.png",
            "icon": "https://fortnite-api.com/images/cosmetics/br/cid_028/icon.png"
        },
        "showcaseVideo": "UEPKxEJ_Pvk",
        "added": "2017-09-22T00:00:00Z",
        "shopHistory": ["2017-10-27T00:00:00Z", "2017-12-01T00:00:00Z"]
    })
}

pub fn cosmetics_br(len: usize) -> Value {
    Value::Array((0..len).map(|n| cosmetic_br(&format!("CID_{:03}_Test", n))).collect())
}

pub fn playlist() -> Value {
    json!({
        "id": TEST_PLAYLIST_ID,
        "name": "Solo",
        "subName": null,
        "description": "Go it alone in a battle to be the last one standing.",
        "minPlayers": 1,
        "maxPlayers": 100,
        "maxTeams": 100,
        "maxTeamSize": 1,
        "maxSquads": 100,
        "maxSquadSize": 1,
        "isDefault": true,
        "isTournament": false,
        "isLimitedTimeMode": false,
        "isLargeTeamGame": false,
        "accumulateToProfileStats": true,
        "images": {"showcase": "https://fortnite-api.com/images/playlists/solo/showcase.png", "missionIcon": null},
        "path": "FortniteGame/Content/Athena/Playlists/Playlist_DefaultSolo",
        "added": "2019-10-15T00:00:00Z"
    })
}

pub fn map() -> Value {
    json!({
        "images": {
            "blank": "https://fortnite-api.com/images/map.png",
            "pois": "https://fortnite-api.com/images/map_en.png"
        },
        "pois": [
            {"id": "Athena.Location.POI.Generic.01", "name": "Lonely Labs", "location": {"x": 12.5, "y": -3.0, "z": 512.0}},
            {"id": "Athena.Location.UnNamedPOI.Landmark.02", "location": {"x": 0, "y": 0, "z": 0}}
        ]
    })
}

pub fn game_mode_news() -> Value {
    json!({
        "hash": "2be3a4",
        "date": "2024-11-03T10:00:00Z",
        "image": "https://fortnite-api.com/images/news/br.gif",
        "motds": [{
            "id": "motd-1",
            "title": "New Season",
            "tabTitle": "Season",
            "body": "Drop in now.",
            "image": "https://cdn2.unrealengine.com/motd.jpg",
            "tileImage": "https://cdn2.unrealengine.com/tile.jpg",
            "sortingPriority": 90,
            "hidden": false
        }],
        "messages": []
    })
}

pub fn news() -> Value {
    json!({ "br": game_mode_news(), "stw": null, "creative": null })
}

pub fn shop() -> Value {
    json!({
        "hash": "a9c5e1f0",
        "date": "2024-11-03T00:00:00Z",
        "vbuckIcon": "https://fortnite-api.com/images/vbuck.png",
        "entries": [{
            "regularPrice": 1500,
            "finalPrice": 1200,
            "offerId": "v2:/a1b2c3",
            "giftable": true,
            "refundable": false,
            "sortPriority": 10,
            "tileSize": "Size_1_x_2",
            "brItems": [cosmetic_br(TEST_COSMETIC_ID)]
        }]
    })
}

pub fn stats() -> Value {
    json!({
        "account": account(),
        "battlePass": {"level": 87, "progress": 42},
        "image": null,
        "stats": {
            "all": {
                "overall": {
                    "score": 1000, "scorePerMin": 12.5, "scorePerMatch": 100.0, "wins": 3,
                    "kills": 30, "killsPerMin": 0.4, "killsPerMatch": 3.0,
                    "deaths": 7, "kd": 4.286, "matches": 10, "winRate": 30.0,
                    "minutesPlayed": 80, "playersOutlived": 700,
                    "lastModified": "2024-11-02T20:11:00Z"
                }
            }
        }
    })
}
