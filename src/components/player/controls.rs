use crate::api::Track;
use crate::components::views::toggle_saved_favorite;
use crate::components::{run_commands, AudioState, Icon, StorageReady};
use crate::db::is_favorite;
use crate::playback::PlaybackController;
use dioxus::prelude::*;

const CONTROL_CLASS: &str = "control-button";

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let is_playing = controller.read().is_playing();
    let has_track = controller.read().current().is_some();

    rsx! {
        button {
            class: "{CONTROL_CLASS} primary",
            r#type: "button",
            disabled: !has_track,
            aria_label: if is_playing { "Pause" } else { "Play" },
            onclick: move |_| {
                let commands = controller.write().toggle_play();
                run_commands(controller, &commands);
            },
            if is_playing {
                Icon { name: "pause", class: "icon" }
            } else {
                Icon { name: "play", class: "icon" }
            }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();

    rsx! {
        button {
            class: CONTROL_CLASS,
            r#type: "button",
            aria_label: "Previous",
            onclick: move |_| {
                let commands = controller.write().previous();
                run_commands(controller, &commands);
            },
            Icon { name: "prev", class: "icon" }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();

    rsx! {
        button {
            class: CONTROL_CLASS,
            r#type: "button",
            aria_label: "Next",
            onclick: move |_| {
                let commands = controller.write().next();
                run_commands(controller, &commands);
            },
            Icon { name: "next", class: "icon" }
        }
    }
}

#[component]
pub(super) fn RepeatButton() -> Element {
    let mut controller = use_context::<Signal<PlaybackController>>();
    let repeat = controller.read().repeat();
    let class = if repeat {
        format!("{CONTROL_CLASS} active")
    } else {
        CONTROL_CLASS.to_string()
    };

    rsx! {
        button {
            class,
            r#type: "button",
            aria_label: "Repeat",
            aria_pressed: "{repeat}",
            onclick: move |_| {
                controller.write().toggle_repeat();
            },
            if repeat {
                Icon { name: "repeat-1", class: "icon" }
            } else {
                Icon { name: "repeat", class: "icon" }
            }
        }
    }
}

#[component]
pub(super) fn MuteButton() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let mut muted = use_context::<AudioState>().muted;
    let is_muted = muted();
    let class = if is_muted {
        format!("{CONTROL_CLASS} active")
    } else {
        CONTROL_CLASS.to_string()
    };

    rsx! {
        button {
            class,
            r#type: "button",
            aria_label: if is_muted { "Unmute" } else { "Mute" },
            onclick: move |_| {
                let was_muted = *muted.peek();
                let commands = controller.peek().toggle_mute(was_muted);
                run_commands(controller, &commands);
                muted.set(!was_muted);
            },
            if is_muted {
                Icon { name: "volume-x", class: "icon" }
            } else {
                Icon { name: "volume", class: "icon" }
            }
        }
    }
}

#[component]
pub(super) fn FavoriteButton() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let favorites = use_context::<Signal<Vec<Track>>>();
    let StorageReady(ready) = use_context::<StorageReady>();

    let current = controller.read().current().cloned();
    let favorited = current
        .as_ref()
        .is_some_and(|track| is_favorite(&favorites.read(), track.id));
    let class = if favorited {
        format!("{CONTROL_CLASS} favorite active")
    } else {
        format!("{CONTROL_CLASS} favorite")
    };

    rsx! {
        button {
            class,
            r#type: "button",
            disabled: current.is_none() || !ready(),
            aria_label: if favorited { "Remove from favorites" } else { "Add to favorites" },
            onclick: move |_| {
                if let Some(track) = controller.peek().current().cloned() {
                    toggle_saved_favorite(favorites, &track);
                }
            },
            if favorited {
                Icon { name: "heart-filled", class: "icon" }
            } else {
                Icon { name: "heart", class: "icon" }
            }
        }
    }
}
