use crate::api::{DeezerClient, Track};
use crate::browse::{normalize_query, RequestGeneration};
use crate::components::views::{play_now, TrackCard};
use crate::components::{Icon, SelectionGeneration};
use crate::db::AppSettings;
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use tracing::{debug, error};

#[component]
pub fn SearchView() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let controller = use_context::<Signal<PlaybackController>>();
    let selection = use_context::<SelectionGeneration>();

    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<Track>::new);
    let mut searching = use_signal(|| false);
    let mut generation = use_signal(RequestGeneration::default);

    // Every input event fires its own request; only the newest one may land.
    let on_input = move |e: Event<FormData>| {
        let raw = e.value();
        query.set(raw.clone());

        let Some(term) = normalize_query(&raw) else {
            generation.write().invalidate();
            results.set(Vec::new());
            searching.set(false);
            return;
        };

        let ticket = generation.write().begin();
        let client = DeezerClient::new(&settings.peek().api_base_url);
        searching.set(true);

        spawn(async move {
            let outcome = client.search(&term).await;
            if !generation.peek().is_current(ticket) {
                debug!(query = %term, "dropping superseded search response");
                return;
            }
            searching.set(false);
            match outcome {
                Ok(tracks) => {
                    debug!(query = %term, count = tracks.len(), "search results");
                    results.set(tracks);
                }
                Err(err) => error!(%err, query = %term, "search failed"),
            }
        });
    };

    let playing_id = controller.read().current().map(|track| track.id);
    let tracks = results();
    let has_query = normalize_query(&query()).is_some();

    rsx! {
        section { class: "section",
            div { class: "search-box",
                Icon { name: "search", class: "icon muted" }
                input {
                    r#type: "search",
                    class: "search-input",
                    placeholder: "Search tracks, artists, albums",
                    value: "{query}",
                    oninput: on_input,
                }
                if searching() {
                    Icon { name: "loader", class: "icon muted" }
                }
            }

            if !tracks.is_empty() {
                div { class: "track-list",
                    for (index , track) in tracks.iter().enumerate() {
                        TrackCard {
                            key: "{track.id}",
                            active: playing_id == Some(track.id),
                            track: track.clone(),
                            onclick: move |_| {
                                let playlist = results.peek().clone();
                                play_now(controller, selection, playlist, index);
                            },
                        }
                    }
                }
            } else if has_query && !searching() {
                p { class: "muted empty", "No tracks found." }
            }
        }
    }
}
