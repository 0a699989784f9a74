use crate::api::Track;
use crate::browse::RequestGeneration;
use crate::components::views::{FavoritesView, HomeView};
use crate::components::{run_commands, AppView, AudioController, AudioState, Player, Sidebar};
use crate::db::{
    load_favorites, load_settings, merge_favorites, save_favorites, save_settings, AppSettings,
};
use crate::playback::{MediaCommand, PlaybackController};
use dioxus::prelude::*;
use futures_util::future::join;
use tracing::{debug, error, info};

/// Tickets for requests that end up replacing the playlist. Any newer
/// selection, direct or fetched, supersedes the ones still in flight.
#[derive(Clone, Copy)]
pub struct SelectionGeneration(pub Signal<RequestGeneration>);

/// Set once settings and favorites have been read back from storage.
#[derive(Clone, Copy)]
pub struct StorageReady(pub Signal<bool>);

#[component]
pub fn AppShell() -> Element {
    let mut controller = use_signal(PlaybackController::default);
    let mut app_settings = use_signal(AppSettings::default);
    let mut favorites = use_signal(Vec::<Track>::new);
    let current_view = use_signal(AppView::default);
    let selection = use_signal(RequestGeneration::default);
    let audio_state = use_hook(|| AudioState::new(false));
    let mut settings_loaded = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| controller);
    use_context_provider(|| app_settings);
    use_context_provider(|| favorites);
    use_context_provider(|| current_view);
    use_context_provider(|| audio_state);
    use_context_provider(|| SelectionGeneration(selection));
    use_context_provider(|| StorageReady(settings_loaded));

    // Load persisted state once on mount
    use_effect(move || {
        spawn(async move {
            let (settings, saved_favorites) = join(load_settings(), load_favorites()).await;

            let settings = settings.unwrap_or_else(|err| {
                error!(%err, "failed to load settings, using defaults");
                AppSettings::default()
            });
            {
                let mut controller = controller.write();
                if controller.repeat() != settings.repeat {
                    controller.toggle_repeat();
                }
                controller.set_wrap_on_end(settings.wrap_on_end);
            }
            let mut muted = audio_state.muted;
            muted.set(settings.muted);
            if settings.muted {
                run_commands(controller, &[MediaCommand::SetMuted(true)]);
            }
            app_settings.set(settings);

            match saved_favorites {
                Ok(saved) => {
                    info!(count = saved.len(), "loaded favorites");
                    let stored = saved.len();
                    let merged = merge_favorites(saved, &favorites.peek());
                    let grew = merged.len() > stored;
                    favorites.set(merged.clone());
                    if grew {
                        if let Err(err) = save_favorites(merged).await {
                            error!(%err, "failed to save favorites");
                        }
                    }
                }
                Err(err) => error!(%err, "failed to load favorites"),
            }

            settings_loaded.set(true);
        });
    });

    let repeat = use_memo(move || controller.read().repeat());

    // Persist repeat/mute whenever the player changes them
    use_effect(move || {
        let repeat = repeat();
        let muted = (audio_state.muted)();
        if !settings_loaded() {
            return;
        }

        let current = app_settings.peek().clone();
        if current.repeat == repeat && current.muted == muted {
            return;
        }
        let updated = AppSettings {
            repeat,
            muted,
            ..current
        };
        app_settings.set(updated.clone());
        spawn(async move {
            debug!(repeat, muted, "saving player settings");
            if let Err(err) = save_settings(updated).await {
                error!(%err, "failed to save settings");
            }
        });
    });

    rsx! {
        div { class: "app-shell",
            Sidebar {}

            main { class: "main-content",
                {match current_view() {
                    AppView::Home => rsx! {
                        HomeView {}
                    },
                    AppView::Favorites => rsx! {
                        FavoritesView {}
                    },
                }}
            }

            Player {}
            AudioController {}
        }
    }
}
