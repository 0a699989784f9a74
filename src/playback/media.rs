use super::MediaCommand;

/// Host-provided audio output. Implemented over the browser's `<audio>` element on web
/// and over the desktop webview's audio bridge on native targets.
pub trait MediaSurface {
    fn apply(&mut self, command: &MediaCommand);
}

pub fn apply_all<S: MediaSurface + ?Sized>(surface: &mut S, commands: &[MediaCommand]) {
    for command in commands {
        surface.apply(command);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records commands and mirrors the element state they would produce.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub applied: Vec<MediaCommand>,
        pub src: Option<String>,
        pub paused: bool,
        pub muted: bool,
        pub current_time: f64,
    }

    impl MediaSurface for RecordingSurface {
        fn apply(&mut self, command: &MediaCommand) {
            match command {
                MediaCommand::Load { src } => {
                    self.src = Some(src.clone());
                    self.current_time = 0.0;
                    self.paused = true;
                }
                MediaCommand::Play => self.paused = false,
                MediaCommand::Pause => self.paused = true,
                MediaCommand::Restart => {
                    self.current_time = 0.0;
                    self.paused = false;
                }
                MediaCommand::SeekTo(offset) => self.current_time = *offset,
                MediaCommand::SetMuted(muted) => self.muted = *muted,
            }
            self.applied.push(command.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;
    use crate::api::{Track, TrackArtist};
    use crate::playback::PlaybackController;

    fn artist_top_tracks() -> Vec<Track> {
        (1..=10)
            .map(|id| Track {
                id,
                title: format!("Hit {id}"),
                preview: format!("https://cdn.example/top/{id}.mp3"),
                artist: Some(TrackArtist {
                    id: 99,
                    name: "X".to_string(),
                    picture_medium: None,
                }),
                ..Track::default()
            })
            .collect()
    }

    #[test]
    fn selecting_an_artist_loads_first_top_track() {
        let mut controller = PlaybackController::default();
        let mut surface = RecordingSurface::default();

        let tracks = artist_top_tracks();
        assert!(tracks.len() <= 10);
        let commands = controller.select(tracks, 0);
        apply_all(&mut surface, &commands);

        assert_eq!(controller.position(), Some(0));
        assert_eq!(surface.src.as_deref(), Some("https://cdn.example/top/1.mp3"));
        assert!(!surface.paused);
    }

    #[test]
    fn repeat_on_single_track_restarts_it() {
        let mut controller = PlaybackController::default();
        let mut surface = RecordingSurface::default();
        let single = artist_top_tracks().into_iter().take(1).collect::<Vec<_>>();

        apply_all(&mut surface, &controller.select(single, 0));
        controller.toggle_repeat();
        apply_all(&mut surface, &controller.seek(90.0, 30.0));
        assert_eq!(surface.current_time, 27.0);

        apply_all(&mut surface, &controller.track_ended());
        assert_eq!(surface.current_time, 0.0);
        assert_eq!(surface.src.as_deref(), Some("https://cdn.example/top/1.mp3"));
        assert_eq!(surface.applied.last(), Some(&MediaCommand::Restart));
    }

    #[test]
    fn mute_round_trip() {
        let controller = PlaybackController::default();
        let mut surface = RecordingSurface::default();
        let commands = controller.toggle_mute(surface.muted);
        apply_all(&mut surface, &commands);
        assert!(surface.muted);
        let commands = controller.toggle_mute(surface.muted);
        apply_all(&mut surface, &commands);
        assert!(!surface.muted);
    }
}
