use super::{run_commands, AudioState, POLL_INTERVAL_MS};
use crate::playback::{MediaCommand, MediaSurface, PlaybackController};
use dioxus::prelude::*;
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "deezplay-audio";

/// Initialize the global audio element once.
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

pub(super) struct WebAudioSurface {
    audio: HtmlAudioElement,
    controller: Signal<PlaybackController>,
}

impl WebAudioSurface {
    pub(super) fn attach(controller: Signal<PlaybackController>) -> Option<Self> {
        let audio = get_or_create_audio_element()?;
        Some(Self { audio, controller })
    }

    fn try_play(&self) {
        let mut controller = self.controller;
        match self.audio.play() {
            Ok(promise) => {
                spawn(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        error!(?err, "playback error");
                        controller.write().playback_failed();
                    }
                });
            }
            Err(err) => {
                error!(?err, "playback error");
                controller.write().playback_failed();
            }
        }
    }
}

impl MediaSurface for WebAudioSurface {
    fn apply(&mut self, command: &MediaCommand) {
        match command {
            MediaCommand::Load { src } => self.audio.set_src(src),
            MediaCommand::Play => self.try_play(),
            MediaCommand::Pause => {
                let _ = self.audio.pause();
            }
            MediaCommand::Restart => {
                self.audio.set_current_time(0.0);
                self.try_play();
            }
            MediaCommand::SeekTo(offset) => self.audio.set_current_time(*offset),
            MediaCommand::SetMuted(muted) => self.audio.set_muted(*muted),
        }
    }
}

#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let audio_state = use_context::<AudioState>();

    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            warn!("no document available for the audio element");
            return;
        };

        let AudioState {
            mut current_time,
            mut duration,
            mut muted,
        } = audio_state;

        spawn(async move {
            let mut controller = controller;
            let mut ended_handled = false;

            loop {
                gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;

                let time = audio.current_time();
                if (time - *current_time.peek()).abs() >= 0.2 {
                    current_time.set(time);
                }

                let dur = audio.duration();
                let dur = if dur.is_finite() { dur } else { 0.0 };
                if (dur - *duration.peek()).abs() > 0.01 {
                    duration.set(dur);
                }

                if audio.muted() != *muted.peek() {
                    muted.set(audio.muted());
                }

                if audio.ended() {
                    if ended_handled {
                        continue;
                    }
                    ended_handled = true;
                    let commands = controller.write().track_ended();
                    run_commands(controller, &commands);
                } else {
                    ended_handled = false;
                }
            }
        });
    });

    rsx! {}
}
