use crate::api::{ChartArtist, DeezerClient, PageRequest};
use crate::components::views::play_fetched;
use crate::components::{cover_src, Icon, SelectionGeneration};
use crate::db::AppSettings;
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use tracing::{error, info};

#[component]
pub fn ArtistsView() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let base_url = use_memo(move || settings.read().api_base_url.clone());
    let chart_limit = use_memo(move || settings.read().chart_limit);

    let artists = use_resource(move || {
        let client = DeezerClient::new(base_url());
        let page = PageRequest {
            index: None,
            limit: chart_limit(),
        };
        async move {
            match client.chart_artists(page).await {
                Ok(artists) => {
                    info!(count = artists.len(), "loaded artist chart");
                    artists
                }
                Err(err) => {
                    error!(%err, "failed to load artist chart");
                    Vec::new()
                }
            }
        }
    });

    rsx! {
        section { class: "section",
            h2 { class: "section-title", "Top artists" }
            {match artists() {
                None => rsx! {
                    div { class: "loading",
                        Icon { name: "loader", class: "icon" }
                    }
                },
                Some(artists) => rsx! {
                    div { class: "card-grid",
                        for artist in artists {
                            ArtistCard { key: "{artist.id}", artist: artist.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn ArtistCard(artist: ChartArtist) -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let controller = use_context::<Signal<PlaybackController>>();
    let selection = use_context::<SelectionGeneration>();

    let picture = cover_src(artist.picture());
    let name = artist.name.clone();
    let artist_id = artist.id;

    let on_click = move |_| {
        let (client, limit) = {
            let settings = settings.peek();
            (
                DeezerClient::new(&settings.api_base_url),
                settings.artist_top_limit,
            )
        };
        play_fetched(controller, selection, "artist top tracks", async move {
            client.artist_top(artist_id, limit).await
        });
    };

    rsx! {
        button { class: "card artist", r#type: "button", onclick: on_click,
            img { class: "card-cover round", src: "{picture}", alt: "{name}", loading: "lazy" }
            p { class: "card-title", "{name}" }
        }
    }
}
