use crate::api::bridge::{decode_page, fetch_payload};
use crate::api::error::CatalogError;
use crate::api::models::*;

pub const DEFAULT_API_URL: &str = "https://api.deezer.com";
pub const ARTIST_TOP_LIMIT: u32 = 10;

const SEARCH: &str = "searchCallback";
const ALBUMS: &str = "albumsCallback";
const ARTISTS: &str = "artistsCallback";
const ALBUM_TRACKS: &str = "albumTracksCallback";
const ARTIST_TRACKS: &str = "artistTracksCallback";

#[derive(Debug, Clone, PartialEq)]
pub struct DeezerClient {
    pub base_url: String,
}

impl Default for DeezerClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl DeezerClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(query))
    }

    pub fn chart_albums_url(&self, page: PageRequest) -> String {
        with_paging(format!("{}/chart/0/albums", self.base_url), page)
    }

    pub fn chart_artists_url(&self, page: PageRequest) -> String {
        with_paging(format!("{}/chart/0/artists", self.base_url), page)
    }

    pub fn album_tracks_url(&self, album_id: u64) -> String {
        format!("{}/album/{}/tracks", self.base_url, album_id)
    }

    pub fn artist_top_url(&self, artist_id: u64, limit: u32) -> String {
        format!(
            "{}/artist/{}/top?limit={}",
            self.base_url,
            artist_id,
            limit.max(1)
        )
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Track>, CatalogError> {
        let payload = fetch_payload(&self.search_url(query), SEARCH).await?;
        Ok(decode_page::<Track>(SEARCH, payload)?.data)
    }

    pub async fn chart_albums(&self, page: PageRequest) -> Result<Vec<ChartAlbum>, CatalogError> {
        let payload = fetch_payload(&self.chart_albums_url(page), ALBUMS).await?;
        Ok(decode_page::<ChartAlbum>(ALBUMS, payload)?.data)
    }

    pub async fn chart_artists(
        &self,
        page: PageRequest,
    ) -> Result<Vec<ChartArtist>, CatalogError> {
        let payload = fetch_payload(&self.chart_artists_url(page), ARTISTS).await?;
        Ok(decode_page::<ChartArtist>(ARTISTS, payload)?.data)
    }

    pub async fn album_tracks(&self, album: &ChartAlbum) -> Result<Vec<Track>, CatalogError> {
        let payload = fetch_payload(&self.album_tracks_url(album.id), ALBUM_TRACKS).await?;
        let tracks = decode_page::<Track>(ALBUM_TRACKS, payload)?.data;
        Ok(attach_album(tracks, album))
    }

    pub async fn artist_top(&self, artist_id: u64, limit: u32) -> Result<Vec<Track>, CatalogError> {
        let payload = fetch_payload(&self.artist_top_url(artist_id, limit), ARTIST_TRACKS).await?;
        Ok(decode_page::<Track>(ARTIST_TRACKS, payload)?.data)
    }
}

fn with_paging(mut url: String, page: PageRequest) -> String {
    let mut params = Vec::new();
    if let Some(index) = page.index {
        params.push(format!("index={index}"));
    }
    if let Some(limit) = page.limit {
        params.push(format!("limit={limit}"));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Fill in album info (and the album artist) on tracks that arrived without it.
pub fn attach_album(tracks: Vec<Track>, album: &ChartAlbum) -> Vec<Track> {
    tracks
        .into_iter()
        .map(|mut track| {
            if track.album.is_none() {
                track.album = Some(album.as_track_album());
            }
            if track.artist.is_none() {
                track.artist = album.artist.clone();
            }
            track
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let client = DeezerClient::default();
        assert_eq!(
            client.search_url("daft punk"),
            "https://api.deezer.com/search?q=daft%20punk"
        );
        assert_eq!(
            client.chart_albums_url(PageRequest::default()),
            "https://api.deezer.com/chart/0/albums"
        );
        assert_eq!(
            client.chart_artists_url(PageRequest {
                index: Some(10),
                limit: Some(25)
            }),
            "https://api.deezer.com/chart/0/artists?index=10&limit=25"
        );
        assert_eq!(
            client.album_tracks_url(302127),
            "https://api.deezer.com/album/302127/tracks"
        );
        assert_eq!(
            client.artist_top_url(27, ARTIST_TOP_LIMIT),
            "https://api.deezer.com/artist/27/top?limit=10"
        );
    }

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(
            DeezerClient::new("https://proxy.example/deezer/").base_url,
            "https://proxy.example/deezer"
        );
        assert_eq!(DeezerClient::new("  ").base_url, DEFAULT_API_URL);
    }

    #[test]
    fn search_query_is_escaped() {
        let client = DeezerClient::new("https://api.example");
        assert_eq!(
            client.search_url("AC/DC & friends"),
            "https://api.example/search?q=AC%2FDC%20%26%20friends"
        );
    }

    #[test]
    fn album_tracks_borrow_chart_album_details() {
        let album = ChartAlbum {
            id: 9,
            title: "Discovery".to_string(),
            cover_medium: Some("cover.jpg".to_string()),
            artist: Some(TrackArtist {
                id: 27,
                name: "Daft Punk".to_string(),
                picture_medium: None,
            }),
            ..ChartAlbum::default()
        };
        let tracks = attach_album(
            vec![Track {
                id: 1,
                title: "One More Time".to_string(),
                preview: "https://cdn.example/1.mp3".to_string(),
                ..Track::default()
            }],
            &album,
        );
        assert_eq!(tracks[0].cover(), Some("cover.jpg"));
        assert_eq!(tracks[0].artist_name(), "Daft Punk");
    }
}
