use crate::api::{Track, ARTIST_TOP_LIMIT, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};
#[cfg(not(target_arch = "wasm32"))]
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use rusqlite::OptionalExtension;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

const SETTINGS_KEY: &str = "deezplay.app_settings";
/// Shared with earlier builds of the player, which stored favorites under this bare key.
const FAVORITES_KEY: &str = "favorites";

/// Error type for local persistence
#[derive(Debug, Error)]
pub enum DbError {
    #[cfg(target_arch = "wasm32")]
    #[error("storage error: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no data directory available")]
    NoDataDir,
}

/// App settings stored next to the favorites list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api_base_url: String,
    pub artist_top_limit: u32,
    pub chart_limit: Option<u32>,
    pub repeat: bool,
    pub muted: bool,
    /// Start over from the first track when the playlist runs out without repeat.
    pub wrap_on_end: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            artist_top_limit: ARTIST_TOP_LIMIT,
            chart_limit: None,
            repeat: false,
            muted: false,
            wrap_on_end: true,
        }
    }
}

pub fn is_favorite(favorites: &[Track], track_id: u64) -> bool {
    favorites.iter().any(|fav| fav.id == track_id)
}

/// Adds the track when absent, removes it when present. Returns the new favorited state.
pub fn toggle_favorite(favorites: &mut Vec<Track>, track: &Track) -> bool {
    if is_favorite(favorites, track.id) {
        favorites.retain(|fav| fav.id != track.id);
        false
    } else {
        favorites.push(track.clone());
        true
    }
}

/// Favorites read from storage, followed by any toggled in before the read finished.
pub fn merge_favorites(saved: Vec<Track>, pending: &[Track]) -> Vec<Track> {
    let mut merged = saved;
    for track in pending {
        if !is_favorite(&merged, track.id) {
            merged.push(track.clone());
        }
    }
    merged
}

/// Native key/value store: one `settings` table holding JSON values.
#[cfg(not(target_arch = "wasm32"))]
pub struct SettingsStore {
    conn: rusqlite::Connection,
}

#[cfg(not(target_arch = "wasm32"))]
impl SettingsStore {
    pub fn open(path: &Path) -> Result<Self, DbError> {
        Self::with_connection(rusqlite::Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::with_connection(rusqlite::Connection::open_in_memory()?)
    }

    /// `deezplay.db` under the platform's local data directory.
    pub fn default_location() -> Result<Self, DbError> {
        let base = dirs::data_local_dir().ok_or(DbError::NoDataDir)?;
        let dir = base.join("deezplay");
        std::fs::create_dir_all(&dir)?;
        Self::open(&dir.join("deezplay.db"))
    }

    fn with_connection(conn: rusqlite::Connection) -> Result<Self, DbError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DbError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row: &rusqlite::Row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DbError> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, json],
        )?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    SettingsStore::default_location()?.set(SETTINGS_KEY, &settings)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    LocalStorage::set(SETTINGS_KEY, settings)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    Ok(SettingsStore::default_location()?
        .get(SETTINGS_KEY)?
        .unwrap_or_default())
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_favorites(favorites: Vec<Track>) -> Result<(), DbError> {
    SettingsStore::default_location()?.set(FAVORITES_KEY, &favorites)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_favorites(favorites: Vec<Track>) -> Result<(), DbError> {
    LocalStorage::set(FAVORITES_KEY, favorites)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_favorites() -> Result<Vec<Track>, DbError> {
    Ok(SettingsStore::default_location()?
        .get(FAVORITES_KEY)?
        .unwrap_or_default())
}

#[cfg(target_arch = "wasm32")]
pub async fn load_favorites() -> Result<Vec<Track>, DbError> {
    match LocalStorage::get(FAVORITES_KEY) {
        Ok(favorites) => Ok(favorites),
        Err(_) => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u64) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            preview: format!("https://cdn.example/{id}.mp3"),
            ..Track::default()
        }
    }

    #[test]
    fn toggle_favorite_adds_then_removes() {
        let mut favorites = vec![track(1)];
        assert!(toggle_favorite(&mut favorites, &track(2)));
        assert_eq!(favorites.len(), 2);
        assert!(is_favorite(&favorites, 2));

        assert!(!toggle_favorite(&mut favorites, &track(1)));
        assert_eq!(favorites, vec![track(2)]);
    }

    #[test]
    fn early_favorites_survive_the_stored_list_arriving() {
        let merged = merge_favorites(vec![track(1), track(2)], &[track(2), track(5)]);
        assert_eq!(merged, vec![track(1), track(2), track(5)]);
        assert_eq!(merge_favorites(vec![track(1)], &[]), vec![track(1)]);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"repeat": true}"#).unwrap();
        assert!(settings.repeat);
        assert!(settings.wrap_on_end);
        assert_eq!(settings.artist_top_limit, 10);
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn favorites_keep_the_legacy_record_shape() {
        let raw = r#"[{"id": 5, "title": "Old", "preview": "https://cdn.example/5.mp3",
            "artist": {"id": 1, "name": "Someone"}, "album": {"id": 2, "cover": "c.jpg"}}]"#;
        let favorites: Vec<Track> = serde_json::from_str(raw).unwrap();
        assert_eq!(favorites[0].artist_name(), "Someone");
        assert_eq!(favorites[0].cover(), Some("c.jpg"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn settings_table_round_trips_json_rows() {
        let store = SettingsStore::open_in_memory().unwrap();

        assert_eq!(store.get::<Vec<Track>>(FAVORITES_KEY).unwrap(), None);
        store.set(FAVORITES_KEY, &vec![track(3)]).unwrap();
        store.set(FAVORITES_KEY, &vec![track(3), track(4)]).unwrap();
        assert_eq!(
            store.get::<Vec<Track>>(FAVORITES_KEY).unwrap(),
            Some(vec![track(3), track(4)])
        );

        let settings = AppSettings {
            repeat: true,
            ..AppSettings::default()
        };
        store.set(SETTINGS_KEY, &settings).unwrap();
        assert_eq!(store.get::<AppSettings>(SETTINGS_KEY).unwrap(), Some(settings));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn settings_table_survives_reopening() {
        let path = std::env::temp_dir().join(format!("deezplay-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        SettingsStore::open(&path)
            .unwrap()
            .set(FAVORITES_KEY, &vec![track(7)])
            .unwrap();
        let reopened = SettingsStore::open(&path).unwrap();
        assert_eq!(
            reopened.get::<Vec<Track>>(FAVORITES_KEY).unwrap(),
            Some(vec![track(7)])
        );

        drop(reopened);
        let _ = std::fs::remove_file(path);
    }
}
