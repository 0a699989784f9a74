use crate::api::Track;
use crate::components::views::{play_now, TrackCard};
use crate::components::{Icon, SelectionGeneration};
use crate::db::{save_favorites, toggle_favorite};
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use tracing::{debug, error};

/// Flip the favorite state of `track` and persist the whole list.
pub fn toggle_saved_favorite(mut favorites: Signal<Vec<Track>>, track: &Track) -> bool {
    let (favorited, snapshot) = {
        let mut list = favorites.write();
        let favorited = toggle_favorite(&mut list, track);
        (favorited, list.clone())
    };
    debug!(track_id = track.id, favorited, "favorite toggled");

    spawn(async move {
        if let Err(err) = save_favorites(snapshot).await {
            error!(%err, "failed to save favorites");
        }
    });
    favorited
}

#[component]
pub fn FavoritesView() -> Element {
    let favorites = use_context::<Signal<Vec<Track>>>();
    let controller = use_context::<Signal<PlaybackController>>();
    let selection = use_context::<SelectionGeneration>();

    let playing_id = controller.read().current().map(|track| track.id);
    let tracks = favorites();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Favorites" }
                p { class: "muted", "{tracks.len()} saved tracks" }
            }

            if tracks.is_empty() {
                div { class: "empty",
                    Icon { name: "heart", class: "icon large muted" }
                    p { class: "muted", "Tracks you heart in the player show up here." }
                }
            } else {
                div { class: "track-list",
                    for (index , track) in tracks.iter().enumerate() {
                        div { key: "{track.id}", class: "track-row",
                            TrackCard {
                                active: playing_id == Some(track.id),
                                track: track.clone(),
                                onclick: move |_| {
                                    let playlist = favorites.peek().clone();
                                    play_now(controller, selection, playlist, index);
                                },
                            }
                            button {
                                class: "control-button favorite active",
                                r#type: "button",
                                aria_label: "Remove from favorites",
                                onclick: {
                                    let track = track.clone();
                                    move |_| {
                                        toggle_saved_favorite(favorites, &track);
                                    }
                                },
                                Icon { name: "heart-filled", class: "icon" }
                            }
                        }
                    }
                }
            }
        }
    }
}
