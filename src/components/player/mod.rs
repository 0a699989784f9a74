use crate::api::format_time;
use crate::components::{cover_src, run_commands, AudioState};
use crate::playback::PlaybackController;
use dioxus::prelude::*;

mod controls;

use controls::{FavoriteButton, MuteButton, NextButton, PlayPauseButton, PrevButton, RepeatButton};

/// Seek bar position in percent of the known duration.
fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return 0.0;
    }
    (current_time / duration * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn Player() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let audio_state = use_context::<AudioState>();

    let current_track = controller.read().current().cloned();

    // Signal fields need to be read with ()
    let current_time = (audio_state.current_time)();
    let duration = (audio_state.duration)();
    let progress = progress_percent(current_time, duration);

    let cover = cover_src(current_track.as_ref().and_then(|track| track.cover()));
    let (title, artist) = match current_track.as_ref() {
        Some(track) => (
            track.display_title().to_string(),
            track.artist_name().to_string(),
        ),
        None => ("Nothing playing".to_string(), "Pick a track to start".to_string()),
    };

    let on_seek = move |e: Event<FormData>| {
        let Ok(percent) = e.value().parse::<f64>() else {
            return;
        };
        let duration = *audio_state.duration.peek();
        let commands = controller.peek().seek(percent, duration);
        run_commands(controller, &commands);
    };

    rsx! {
        footer { class: "player",
            div { class: "now-playing",
                img { class: "now-playing-cover", src: "{cover}", alt: "{title}" }
                div { class: "now-playing-meta",
                    p { class: "now-playing-title", "{title}" }
                    p { class: "now-playing-artist muted", "{artist}" }
                }
                FavoriteButton {}
            }

            div { class: "player-center",
                div { class: "player-controls",
                    RepeatButton {}
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                    MuteButton {}
                }
                div { class: "progress",
                    span { class: "time", "{format_time(current_time)}" }
                    input {
                        r#type: "range",
                        class: "seek",
                        min: "0",
                        max: "100",
                        step: "0.1",
                        value: "{progress}",
                        disabled: current_track.is_none(),
                        oninput: on_seek,
                    }
                    span { class: "time", "{format_time(duration)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::progress_percent;

    #[test]
    fn progress_is_zero_without_a_duration() {
        assert_eq!(progress_percent(12.0, 0.0), 0.0);
        assert_eq!(progress_percent(12.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(f64::INFINITY, 30.0), 0.0);
    }

    #[test]
    fn progress_tracks_and_clamps_elapsed_time() {
        assert_eq!(progress_percent(15.0, 30.0), 50.0);
        assert_eq!(progress_percent(45.0, 30.0), 100.0);
    }
}
