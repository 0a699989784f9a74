use crate::api::{format_time, Track};
use crate::components::cover_src;
use dioxus::prelude::*;

/// One clickable search/favorites entry.
#[component]
pub fn TrackCard(track: Track, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let cover = cover_src(track.cover());
    let title = track.display_title().to_string();
    let artist = track.artist_name().to_string();
    let length = format_time(f64::from(track.duration));
    let class = if active { "track-card active" } else { "track-card" };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled: !track.is_playable(),
            onclick: move |e| onclick.call(e),
            img { class: "track-cover", src: "{cover}", alt: "{title}", loading: "lazy" }
            div { class: "track-meta",
                p { class: "track-title", "{title}" }
                p { class: "track-artist muted", "{artist}" }
            }
            span { class: "time muted", "{length}" }
        }
    }
}
