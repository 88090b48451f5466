//! Battle Royale player stats (`/v2/stats/br/v2`). Requires an API key.

pub mod client;

pub use client::{Stats, SyncStats};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::account::Account;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{Reconstruct, ToRaw};
use crate::shared::{AccountType, StatsImageType, TimeWindow};

/// Query parameters of a stats lookup.
///
/// Defaults: Epic account, lifetime window, no image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrStatsParams {
    pub account_type: AccountType,
    pub time_window: TimeWindow,
    pub image: StatsImageType,
}

impl Default for BrStatsParams {
    fn default() -> Self {
        Self {
            account_type: AccountType::Epic,
            time_window: TimeWindow::Lifetime,
            image: StatsImageType::None,
        }
    }
}

impl BrStatsParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform the name is looked up on; ignored for lookups by id.
    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    pub fn time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = time_window;
        self
    }

    pub fn image(mut self, image: StatsImageType) -> Self {
        self.image = image;
        self
    }
}

/// Battle pass progress.
#[derive(Debug, Clone)]
pub struct BrBattlePass {
    pub level: i64,
    /// Percent towards the next level
    pub progress: Option<i64>,
    raw: Value,
}

impl<H> Reconstruct<H> for BrBattlePass {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("BrBattlePass", &raw)?;
        Ok(Self {
            level: data.integer("level")?,
            progress: data.optional("progress"),
            raw,
        })
    }
}

impl ToRaw for BrBattlePass {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Stats of one game mode.
#[derive(Debug, Clone)]
pub struct BrGameModeStats {
    pub score: i64,
    pub score_per_min: f64,
    pub score_per_match: f64,
    pub wins: i64,
    pub top3: Option<i64>,
    pub top5: Option<i64>,
    pub top6: Option<i64>,
    pub top10: Option<i64>,
    pub top12: Option<i64>,
    pub top25: Option<i64>,
    pub kills: i64,
    pub kills_per_min: f64,
    pub kills_per_match: f64,
    pub deaths: i64,
    pub kd: f64,
    pub matches: i64,
    pub win_rate: f64,
    pub minutes_played: i64,
    pub players_outlived: i64,
    pub last_modified: Option<DateTime<Utc>>,
    raw: Value,
}

impl<H> Reconstruct<H> for BrGameModeStats {
    fn from_raw(raw: Value, _http: &H) -> ApiResult<Self> {
        let data = RawObject::new("BrGameModeStats", &raw)?;
        Ok(Self {
            score: data.integer("score")?,
            score_per_min: data.required("scorePerMin")?,
            score_per_match: data.required("scorePerMatch")?,
            wins: data.integer("wins")?,
            top3: data.optional("top3"),
            top5: data.optional("top5"),
            top6: data.optional("top6"),
            top10: data.optional("top10"),
            top12: data.optional("top12"),
            top25: data.optional("top25"),
            kills: data.integer("kills")?,
            kills_per_min: data.required("killsPerMin")?,
            kills_per_match: data.required("killsPerMatch")?,
            deaths: data.integer("deaths")?,
            kd: data.required("kd")?,
            matches: data.integer("matches")?,
            win_rate: data.required("winRate")?,
            minutes_played: data.integer("minutesPlayed")?,
            players_outlived: data.integer("playersOutlived")?,
            last_modified: data.timestamp("lastModified")?,
            raw,
        })
    }
}

impl ToRaw for BrGameModeStats {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Stats of one input type, per game mode.
#[derive(Debug, Clone)]
pub struct BrInputStats {
    pub overall: Option<BrGameModeStats>,
    pub solo: Option<BrGameModeStats>,
    pub duo: Option<BrGameModeStats>,
    pub squad: Option<BrGameModeStats>,
    pub ltm: Option<BrGameModeStats>,
    raw: Value,
}

impl<H> Reconstruct<H> for BrInputStats {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("BrInputStats", &raw)?;
        Ok(Self {
            overall: data.optional_object("overall", http)?,
            solo: data.optional_object("solo", http)?,
            duo: data.optional_object("duo", http)?,
            squad: data.optional_object("squad", http)?,
            ltm: data.optional_object("ltm", http)?,
            raw,
        })
    }
}

impl ToRaw for BrInputStats {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// Stats split by input type.
#[derive(Debug, Clone)]
pub struct BrInputs {
    pub all: Option<BrInputStats>,
    pub keyboard_mouse: Option<BrInputStats>,
    pub gamepad: Option<BrInputStats>,
    pub touch: Option<BrInputStats>,
    raw: Value,
}

impl<H> Reconstruct<H> for BrInputs {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("BrInputs", &raw)?;
        Ok(Self {
            all: data.optional_object("all", http)?,
            keyboard_mouse: data.optional_object("keyboardMouse", http)?,
            gamepad: data.optional_object("gamepad", http)?,
            touch: data.optional_object("touch", http)?,
            raw,
        })
    }
}

impl ToRaw for BrInputs {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A player's Battle Royale stats.
#[derive(Debug, Clone)]
pub struct BrPlayerStats<H = HttpClient> {
    pub account: Account,
    pub battle_pass: Option<BrBattlePass>,
    /// Rendered stats card, when requested
    pub image: Option<Asset<H>>,
    pub stats: Option<BrInputs>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for BrPlayerStats<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("BrPlayerStats", &raw)?;
        Ok(Self {
            account: data.object("account", http)?,
            battle_pass: data.optional_object("battlePass", http)?,
            image: data.optional_asset("image", http),
            stats: data.optional_object("stats", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for BrPlayerStats<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}
