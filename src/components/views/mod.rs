mod albums;
mod artists;
mod favorites;
mod home;
mod search;
mod track_card;

pub use albums::*;
pub use artists::*;
pub use favorites::*;
pub use home::*;
pub use search::*;
pub use track_card::*;

use crate::api::{CatalogError, Track};
use crate::components::{play_selection, SelectionGeneration};
use crate::playback::PlaybackController;
use dioxus::prelude::*;
use std::future::Future;
use tracing::{debug, error, warn};

/// Play straight from a list already on screen. Pending fetched selections lose.
pub fn play_now(
    controller: Signal<PlaybackController>,
    selection: SelectionGeneration,
    playlist: Vec<Track>,
    index: usize,
) {
    let SelectionGeneration(mut generation) = selection;
    generation.write().invalidate();
    play_selection(controller, playlist, index);
}

/// Fetch a track list (album tracks, artist top tracks) and play it from the
/// start, unless another selection happened while the request was in flight.
pub fn play_fetched<F>(
    controller: Signal<PlaybackController>,
    selection: SelectionGeneration,
    what: &'static str,
    request: F,
) where
    F: Future<Output = Result<Vec<Track>, CatalogError>> + 'static,
{
    let SelectionGeneration(mut generation) = selection;
    let ticket = generation.write().begin();

    spawn(async move {
        let outcome = request.await;
        if !generation.peek().is_current(ticket) {
            debug!(what, ticket, "dropping superseded selection");
            return;
        }
        match outcome {
            Ok(tracks) if tracks.is_empty() => warn!(what, "selection came back empty"),
            Ok(tracks) => play_selection(controller, tracks, 0),
            Err(err) => error!(%err, what, "failed to load selection"),
        }
    });
}
