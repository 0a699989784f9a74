//! Playback state machine.
//!
//! The controller owns the current playlist, position and repeat flag. Every transition
//! returns the media commands it needs; the audio controller component applies them to
//! whatever media surface the platform provides.

mod media;

pub use media::*;

use crate::api::Track;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Paused,
    Playing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    Load { src: String },
    Play,
    Pause,
    /// Rewind to zero and play.
    Restart,
    SeekTo(f64),
    SetMuted(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    playlist: Vec<Track>,
    position: Option<usize>,
    repeat: bool,
    wrap_on_end: bool,
    state: PlayerState,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self {
            playlist: Vec::new(),
            position: None,
            repeat: false,
            wrap_on_end: true,
            state: PlayerState::Idle,
        }
    }
}

impl PlaybackController {
    #[cfg(test)]
    pub fn new(repeat: bool, wrap_on_end: bool) -> Self {
        Self {
            repeat,
            wrap_on_end,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    #[cfg(test)]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::Playing
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn set_wrap_on_end(&mut self, wrap_on_end: bool) {
        self.wrap_on_end = wrap_on_end;
    }

    pub fn current(&self) -> Option<&Track> {
        self.position.and_then(|idx| self.playlist.get(idx))
    }

    /// Replace the playlist wholesale and start playing `index`.
    pub fn select(&mut self, playlist: Vec<Track>, index: usize) -> Vec<MediaCommand> {
        let Some(track) = playlist.get(index) else {
            debug!(index, len = playlist.len(), "ignoring selection outside playlist");
            return Vec::new();
        };
        if !track.is_playable() {
            warn!(track_id = track.id, "track has no preview url");
            return Vec::new();
        }

        self.playlist = playlist;
        self.load(index, true)
    }

    pub fn toggle_play(&mut self) -> Vec<MediaCommand> {
        match self.state {
            PlayerState::Idle => Vec::new(),
            PlayerState::Playing => {
                self.state = PlayerState::Paused;
                vec![MediaCommand::Pause]
            }
            PlayerState::Paused => {
                self.state = PlayerState::Playing;
                vec![MediaCommand::Play]
            }
        }
    }

    pub fn next(&mut self) -> Vec<MediaCommand> {
        let Some(idx) = self.position else {
            return Vec::new();
        };
        let keep_playing = self.is_playing();
        match self.next_playable(idx, self.repeat) {
            Some(target) => self.load(target, keep_playing),
            None => Vec::new(),
        }
    }

    pub fn previous(&mut self) -> Vec<MediaCommand> {
        let Some(idx) = self.position else {
            return Vec::new();
        };
        let keep_playing = self.is_playing();
        match self.previous_playable(idx, self.repeat) {
            Some(target) => self.load(target, keep_playing),
            None => Vec::new(),
        }
    }

    /// Natural end of the current track.
    pub fn track_ended(&mut self) -> Vec<MediaCommand> {
        let Some(idx) = self.position else {
            return Vec::new();
        };
        if self.repeat {
            self.state = PlayerState::Playing;
            return vec![MediaCommand::Restart];
        }

        match self.next_playable(idx, self.wrap_on_end) {
            Some(target) => self.load(target, true),
            None => {
                self.state = PlayerState::Paused;
                Vec::new()
            }
        }
    }

    /// `percent` is the range-control value in `0..=100`.
    pub fn seek(&self, percent: f64, duration: f64) -> Vec<MediaCommand> {
        if self.state == PlayerState::Idle
            || !duration.is_finite()
            || duration <= 0.0
            || !percent.is_finite()
        {
            return Vec::new();
        }
        let offset = (percent.clamp(0.0, 100.0) / 100.0) * duration;
        vec![MediaCommand::SeekTo(offset)]
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    pub fn toggle_mute(&self, muted: bool) -> Vec<MediaCommand> {
        vec![MediaCommand::SetMuted(!muted)]
    }

    /// The media surface refused to start playback.
    pub fn playback_failed(&mut self) {
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Paused;
        }
    }

    /// First playable index after `from`. With `wrap`, the search continues from the
    /// top of the playlist and ends on `from` itself.
    fn next_playable(&self, from: usize, wrap: bool) -> Option<usize> {
        let len = self.playlist.len();
        let ahead = (from + 1)..len;
        let wrapped = 0..if wrap { (from + 1).min(len) } else { 0 };
        ahead
            .chain(wrapped)
            .find(|&idx| self.playlist[idx].is_playable())
    }

    /// Mirror of [`Self::next_playable`] walking towards the start.
    fn previous_playable(&self, from: usize, wrap: bool) -> Option<usize> {
        let len = self.playlist.len();
        let behind = (0..from.min(len)).rev();
        let wrapped = (if wrap { from.min(len) } else { len }..len).rev();
        behind
            .chain(wrapped)
            .find(|&idx| self.playlist[idx].is_playable())
    }

    fn load(&mut self, index: usize, play: bool) -> Vec<MediaCommand> {
        let Some(track) = self.playlist.get(index) else {
            return Vec::new();
        };
        if !track.is_playable() {
            warn!(track_id = track.id, "skipping track without preview url");
            return Vec::new();
        }

        self.position = Some(index);
        let mut commands = vec![MediaCommand::Load {
            src: track.preview.clone(),
        }];
        if play {
            self.state = PlayerState::Playing;
            commands.push(MediaCommand::Play);
        } else {
            self.state = PlayerState::Paused;
        }
        commands
    }
}
