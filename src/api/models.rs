use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrackArtist {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture_medium: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TrackAlbum {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub cover_medium: Option<String>,
}

/// A playable catalog entry. Two tracks are the same track when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Track {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub artist: Option<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Track {
    pub fn is_playable(&self) -> bool {
        !self.preview.trim().is_empty()
    }

    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNKNOWN_TITLE)
    }

    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .and_then(|artist| non_empty(&artist.name))
            .unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn cover(&self) -> Option<&str> {
        self.album.as_ref().and_then(|album| {
            album
                .cover_medium
                .as_deref()
                .and_then(non_empty)
                .or_else(|| album.cover.as_deref().and_then(non_empty))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChartAlbum {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub cover_medium: Option<String>,
    #[serde(default)]
    pub artist: Option<TrackArtist>,
}

impl ChartAlbum {
    pub fn cover(&self) -> Option<&str> {
        self.cover_medium
            .as_deref()
            .and_then(non_empty)
            .or_else(|| self.cover.as_deref().and_then(non_empty))
    }

    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .and_then(|artist| non_empty(&artist.name))
            .unwrap_or(UNKNOWN_ARTIST)
    }

    /// Album track listings come back without album info; borrow it from the chart entry.
    pub fn as_track_album(&self) -> TrackAlbum {
        TrackAlbum {
            id: self.id,
            title: self.title.clone(),
            cover: self.cover.clone(),
            cover_medium: self.cover_medium.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChartArtist {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub picture_medium: Option<String>,
}

impl ChartArtist {
    pub fn picture(&self) -> Option<&str> {
        self.picture_medium
            .as_deref()
            .and_then(non_empty)
            .or_else(|| self.picture.as_deref().and_then(non_empty))
    }
}

/// Envelope shared by every list endpoint of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Paging window for chart requests. `None` fields fall back to the catalog defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub index: Option<u32>,
    pub limit: Option<u32>,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
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
    fn format_time_pads_seconds_without_hour_rollover() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(29.9), "0:29");
    }

    #[test]
    fn format_time_treats_unknown_duration_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn tracks_compare_by_id_only() {
        let a = track(7);
        let mut b = track(7);
        b.title = "Renamed".to_string();
        assert_eq!(a, b);
        assert_ne!(a, track(8));
    }

    #[test]
    fn missing_fields_use_display_fallbacks() {
        let bare = Track {
            id: 1,
            ..Track::default()
        };
        assert_eq!(bare.display_title(), UNKNOWN_TITLE);
        assert_eq!(bare.artist_name(), UNKNOWN_ARTIST);
        assert_eq!(bare.cover(), None);
        assert!(!bare.is_playable());

        let blank_artist = Track {
            artist: Some(TrackArtist {
                id: 3,
                name: "  ".to_string(),
                picture_medium: None,
            }),
            ..track(2)
        };
        assert_eq!(blank_artist.artist_name(), UNKNOWN_ARTIST);
    }

    #[test]
    fn cover_prefers_medium_size() {
        let t = Track {
            album: Some(TrackAlbum {
                id: 4,
                title: "Album".to_string(),
                cover: Some("small.jpg".to_string()),
                cover_medium: Some("medium.jpg".to_string()),
            }),
            ..track(1)
        };
        assert_eq!(t.cover(), Some("medium.jpg"));
    }

    #[test]
    fn deserializes_search_track_payload() {
        let raw = r#"{
            "id": 3135556,
            "title": "Harder, Better, Faster, Stronger",
            "preview": "https://cdns-preview.example/3135556.mp3",
            "duration": 224,
            "artist": {"id": 27, "name": "Daft Punk"},
            "album": {"id": 302127, "title": "Discovery", "cover": "https://api.example/album/302127/image"}
        }"#;
        let t: Track = serde_json::from_str(raw).expect("track decodes");
        assert_eq!(t.artist_name(), "Daft Punk");
        assert_eq!(t.cover(), Some("https://api.example/album/302127/image"));
        assert!(t.is_playable());
    }
}
