//! Audio Manager - owns the media element and feeds its events back into the
//! playback controller, outside of the component render cycle.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::AudioController;
#[cfg(target_arch = "wasm32")]
pub use web::AudioController;

use crate::playback::{apply_all, MediaCommand, PlaybackController};
use dioxus::prelude::*;

const POLL_INTERVAL_MS: u32 = 200;

/// Media element readings mirrored into signals for the player bar.
#[derive(Clone, Copy)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
    pub muted: Signal<bool>,
}

impl AudioState {
    pub fn new(muted: bool) -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
            muted: Signal::new(muted),
        }
    }
}

/// Apply controller output to the platform media surface.
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn run_commands(controller: Signal<PlaybackController>, commands: &[MediaCommand]) {
    if commands.is_empty() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(mut surface) = web::WebAudioSurface::attach(controller) {
            apply_all(&mut surface, commands);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut surface = desktop::DesktopAudioSurface::new();
        apply_all(&mut surface, commands);
    }
}

/// Replace the playlist and start `index`.
pub fn play_selection(
    mut controller: Signal<PlaybackController>,
    playlist: Vec<crate::api::Track>,
    index: usize,
) {
    let commands = controller.write().select(playlist, index);
    run_commands(controller, &commands);
}
