//! In-game news feeds (`/v2/news`, `/v2/news/br`, `/v2/news/stw`).

pub mod client;

pub use client::{NewsClient, SyncNewsClient};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// A message of the day.
#[derive(Debug, Clone)]
pub struct NewsMotd<H = HttpClient> {
    pub id: String,
    pub title: String,
    pub tab_title: String,
    pub body: String,
    pub image: Asset<H>,
    pub tile_image: Asset<H>,
    pub sorting_priority: i64,
    pub hidden: bool,
    raw: Value,
}

impl_id_eq!(generic: NewsMotd);

impl<H: Clone> Reconstruct<H> for NewsMotd<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("NewsMotd", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            title: data.required("title")?,
            tab_title: data.required("tabTitle")?,
            body: data.required("body")?,
            image: data.asset("image", http)?,
            tile_image: data.asset("tileImage", http)?,
            sorting_priority: data.integer("sortingPriority")?,
            hidden: data.required("hidden")?,
            raw,
        })
    }
}

impl<H> ToRaw for NewsMotd<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A news message.
#[derive(Debug, Clone)]
pub struct NewsMessage<H = HttpClient> {
    pub title: String,
    pub body: String,
    pub image: Asset<H>,
    pub adspace: Option<String>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for NewsMessage<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("NewsMessage", &raw)?;
        Ok(Self {
            title: data.required("title")?,
            body: data.required("body")?,
            image: data.asset("image", http)?,
            adspace: data.optional("adspace"),
            raw,
        })
    }
}

impl<H> ToRaw for NewsMessage<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// News of one game mode.
#[derive(Debug, Clone)]
pub struct GameModeNews<H = HttpClient> {
    pub hash: String,
    pub date: Option<DateTime<Utc>>,
    /// Combined news image, when the mode has one
    pub image: Option<Asset<H>>,
    pub motds: Option<Vec<NewsMotd<H>>>,
    pub messages: Option<Vec<NewsMessage<H>>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for GameModeNews<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("GameModeNews", &raw)?;
        Ok(Self {
            hash: data.required("hash")?,
            date: data.timestamp("date")?,
            image: data.optional_asset("image", http),
            motds: data.optional_objects("motds", http)?,
            messages: data.optional_objects("messages", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for GameModeNews<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// News of every game mode; a mode without news is `None`.
#[derive(Debug, Clone)]
pub struct News<H = HttpClient> {
    pub br: Option<GameModeNews<H>>,
    pub stw: Option<GameModeNews<H>>,
    pub creative: Option<GameModeNews<H>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for News<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("News", &raw)?;
        Ok(Self {
            br: data.optional_object("br", http)?,
            stw: data.optional_object("stw", http)?,
            creative: data.optional_object("creative", http)?,
            raw,
        })
    }
}

impl<H> ToRaw for News<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_news() {
        let raw = json!({
            "br": {
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
            },
            "stw": null,
            "creative": null
        });
        let news = News::from_raw(raw.clone(), &()).unwrap();
        let br = news.br.as_ref().unwrap();

        assert_eq!(br.motds.as_ref().unwrap()[0].sorting_priority, 90);
        assert_eq!(br.messages.as_ref().unwrap().len(), 0);
        assert!(news.stw.is_none());
        assert!(news.creative.is_none());
        assert_eq!(news.to_raw(), raw);
    }
}
