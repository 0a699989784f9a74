// Desktop webview bridge: the media element lives in the webview and is driven with
// JSON commands through `document::eval`.
use super::{run_commands, AudioState, POLL_INTERVAL_MS};
use crate::playback::{MediaCommand, MediaSurface, PlaybackController};
use dioxus::document;
use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::error;

const AUDIO_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__deezplayAudio) {
    return true;
  }

  const audio = document.createElement("audio");
  audio.id = "deezplay-audio";
  audio.preload = "metadata";
  audio.style.display = "none";
  document.body.appendChild(audio);

  let playFailed = false;
  const play = () => {
    audio.play().catch((err) => {
      console.error("Playback error:", err);
      playFailed = true;
    });
  };

  window.__deezplayAudio = {
    apply(cmd) {
      switch (cmd.type) {
        case "load": audio.src = cmd.src; break;
        case "play": play(); break;
        case "pause": audio.pause(); break;
        case "restart": audio.currentTime = 0; play(); break;
        case "seek": audio.currentTime = cmd.position; break;
        case "muted": audio.muted = !!cmd.muted; break;
      }
    },
    snapshot() {
      const failed = playFailed;
      playFailed = false;
      return {
        current_time: Number.isFinite(audio.currentTime) ? audio.currentTime : 0,
        duration: Number.isFinite(audio.duration) ? audio.duration : 0,
        ended: audio.ended,
        muted: audio.muted,
        play_failed: failed,
      };
    },
  };
  return true;
})();
"#;

#[derive(Debug, Default, Deserialize)]
struct AudioSnapshot {
    current_time: f64,
    duration: f64,
    ended: bool,
    muted: bool,
    play_failed: bool,
}

fn ensure_audio_bridge() {
    let _ = document::eval(AUDIO_BOOTSTRAP_JS);
}

fn command_payload(command: &MediaCommand) -> serde_json::Value {
    match command {
        MediaCommand::Load { src } => json!({ "type": "load", "src": src }),
        MediaCommand::Play => json!({ "type": "play" }),
        MediaCommand::Pause => json!({ "type": "pause" }),
        MediaCommand::Restart => json!({ "type": "restart" }),
        MediaCommand::SeekTo(position) => json!({ "type": "seek", "position": position.max(0.0) }),
        MediaCommand::SetMuted(muted) => json!({ "type": "muted", "muted": muted }),
    }
}

async fn audio_snapshot() -> Option<AudioSnapshot> {
    let eval = document::eval(
        r#"const bridge = window.__deezplayAudio;
        return bridge ? bridge.snapshot() : null;"#,
    );
    eval.join::<Option<AudioSnapshot>>().await.ok().flatten()
}

pub(super) struct DesktopAudioSurface;

impl DesktopAudioSurface {
    pub(super) fn new() -> Self {
        ensure_audio_bridge();
        Self
    }
}

impl MediaSurface for DesktopAudioSurface {
    fn apply(&mut self, command: &MediaCommand) {
        let payload = command_payload(command);
        let script = format!(
            r#"(function () {{
                const bridge = window.__deezplayAudio;
                if (!bridge) return false;
                bridge.apply({payload});
                return true;
            }})();"#
        );
        let _ = document::eval(&script);
    }
}

#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<Signal<PlaybackController>>();
    let audio_state = use_context::<AudioState>();

    use_effect(move || {
        let AudioState {
            mut current_time,
            mut duration,
            mut muted,
        } = audio_state;

        spawn(async move {
            let mut controller = controller;
            ensure_audio_bridge();
            let mut ended_handled = false;

            loop {
                tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS as u64)).await;

                let Some(snapshot) = audio_snapshot().await else {
                    continue;
                };

                if (snapshot.current_time - *current_time.peek()).abs() >= 0.2 {
                    current_time.set(snapshot.current_time);
                }
                if (snapshot.duration - *duration.peek()).abs() > 0.01 {
                    duration.set(snapshot.duration);
                }
                if snapshot.muted != *muted.peek() {
                    muted.set(snapshot.muted);
                }
                if snapshot.play_failed {
                    error!("playback error reported by the webview");
                    controller.write().playback_failed();
                }

                if snapshot.ended {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn commands_serialize_for_the_webview_bridge() {
        assert_eq!(
            command_payload(&MediaCommand::Load {
                src: "https://cdn.example/1.mp3".to_string()
            }),
            json!({ "type": "load", "src": "https://cdn.example/1.mp3" })
        );
        assert_eq!(command_payload(&MediaCommand::Restart), json!({ "type": "restart" }));
        assert_eq!(
            command_payload(&MediaCommand::SeekTo(-3.0)),
            json!({ "type": "seek", "position": 0.0 })
        );
        assert_eq!(
            command_payload(&MediaCommand::SetMuted(true)),
            json!({ "type": "muted", "muted": true })
        );
    }
}
