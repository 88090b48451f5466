//! Game mode playlists (`/v1/playlists`).

pub mod client;

pub use client::{Playlists, SyncPlaylists};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::asset::Asset;
use crate::domain::raw::RawObject;
use crate::error::ApiResult;
use crate::http::HttpClient;
use crate::reconstruct::{impl_id_eq, Reconstruct, ToRaw};

/// Lobby images of a playlist.
#[derive(Debug, Clone)]
pub struct PlaylistImages<H = HttpClient> {
    pub showcase: Option<Asset<H>>,
    pub mission_icon: Option<Asset<H>>,
    raw: Value,
}

impl<H: Clone> Reconstruct<H> for PlaylistImages<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("PlaylistImages", &raw)?;
        Ok(Self {
            showcase: data.optional_asset("showcase", http),
            mission_icon: data.optional_asset("missionIcon", http),
            raw,
        })
    }
}

impl<H> ToRaw for PlaylistImages<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

/// A playlist (game mode).
#[derive(Debug, Clone)]
pub struct Playlist<H = HttpClient> {
    pub id: String,
    pub name: String,
    pub sub_name: Option<String>,
    pub description: Option<String>,
    pub game_type: Option<String>,
    pub rating_type: Option<String>,
    pub min_players: i64,
    pub max_players: i64,
    pub max_teams: i64,
    pub max_team_size: i64,
    pub max_squads: i64,
    pub max_squad_size: i64,
    pub is_default: bool,
    pub is_tournament: bool,
    pub is_limited_time_mode: bool,
    pub is_large_team_game: bool,
    pub accumulate_to_profile_stats: bool,
    pub images: Option<PlaylistImages<H>>,
    pub gameplay_tags: Option<Vec<String>>,
    pub path: String,
    pub added: Option<DateTime<Utc>>,
    raw: Value,
}

impl_id_eq!(generic: Playlist);

impl<H: Clone> Reconstruct<H> for Playlist<H> {
    fn from_raw(raw: Value, http: &H) -> ApiResult<Self> {
        let data = RawObject::new("Playlist", &raw)?;
        Ok(Self {
            id: data.required("id")?,
            name: data.required("name")?,
            sub_name: data.optional("subName"),
            description: data.optional("description"),
            game_type: data.optional("gameType"),
            rating_type: data.optional("ratingType"),
            min_players: data.integer("minPlayers")?,
            max_players: data.integer("maxPlayers")?,
            max_teams: data.integer("maxTeams")?,
            max_team_size: data.integer("maxTeamSize")?,
            max_squads: data.integer("maxSquads")?,
            max_squad_size: data.integer("maxSquadSize")?,
            is_default: data.required("isDefault")?,
            is_tournament: data.required("isTournament")?,
            is_limited_time_mode: data.required("isLimitedTimeMode")?,
            is_large_team_game: data.required("isLargeTeamGame")?,
            accumulate_to_profile_stats: data.required("accumulateToProfileStats")?,
            images: data.optional_object("images", http)?,
            gameplay_tags: data.optional("gameplayTags"),
            path: data.required("path")?,
            added: data.timestamp("added")?,
            raw,
        })
    }
}

impl<H> ToRaw for Playlist<H> {
    fn to_raw(&self) -> Value {
        self.raw.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn solo() -> Value {
        json!({
            "id": "Playlist_DefaultSolo",
            "name": "Solo",
            "subName": null,
            "description": "Go it alone in a battle to be the last one standing.",
            "gameType": null,
            "ratingType": null,
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
            "gameplayTags": ["Athena.Playlist.Solo"],
            "path": "FortniteGame/Content/Athena/Playlists/Playlist_DefaultSolo",
            "added": "2019-10-15T00:00:00Z"
        })
    }

    #[test]
    fn test_parse_playlist() {
        let playlist = Playlist::from_raw(solo(), &()).unwrap();
        assert_eq!(playlist.max_players, 100);
        assert!(playlist.sub_name.is_none());
        let images = playlist.images.as_ref().unwrap();
        assert!(images.showcase.is_some());
        assert!(images.mission_icon.is_none());
    }

    #[test]
    fn test_playlists_equal_by_id_across_handles() {
        let a = Playlist::from_raw(solo(), &()).unwrap();
        let mut raw = solo();
        raw["name"] = json!("Solo (renamed)");
        let b: Playlist<u8> = Playlist::from_raw(raw, &0u8).unwrap();
        assert!(a == b);
    }
}
