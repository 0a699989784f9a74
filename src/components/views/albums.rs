use crate::api::{ChartAlbum, DeezerClient, PageRequest};
use crate::components::views::play_fetched;
use crate::components::{cover_src, Icon, SelectionGeneration};
use crate::db::AppSettings;
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use tracing::{error, info};

#[component]
pub fn AlbumsView() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let base_url = use_memo(move || settings.read().api_base_url.clone());
    let chart_limit = use_memo(move || settings.read().chart_limit);

    let albums = use_resource(move || {
        let client = DeezerClient::new(base_url());
        let page = PageRequest {
            index: None,
            limit: chart_limit(),
        };
        async move {
            match client.chart_albums(page).await {
                Ok(albums) => {
                    info!(count = albums.len(), "loaded album chart");
                    albums
                }
                Err(err) => {
                    error!(%err, "failed to load album chart");
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Top albums" }
            {match albums() {
                None => rsx! {
                    div { class: "loading",
                        Icon { name: "loader", class: "icon" }
                    }
                },
                Some(albums) => rsx! {
                    div { class: "card-grid",
                        for album in albums {
                            AlbumCard { key: "{album.id}", album: album.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn AlbumCard(album: ChartAlbum) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let controller = use_context::<Signal<PlaybackController>>();
    let selection = use_context::<SelectionGeneration>();

    let cover = cover_src(album.cover());
    let artist = album.artist_name().to_string();
    let title = album.title.clone();

    let on_click = move |_| {
        let client = DeezerClient::new(&settings.peek().api_base_url);
        let album = album.clone();
        play_fetched(controller, selection, "album tracks", async move {
            client.album_tracks(&album).await
        });
    };

    rsx! {
        button { class: "card", r#type: "button", onclick: on_click,
            img { class: "card-cover", src: "{cover}", alt: "{title}", loading: "lazy" }
            p { class: "card-title", "{title}" }
            p { class: "card-subtitle muted", "{artist}" }
        }
    }
}
