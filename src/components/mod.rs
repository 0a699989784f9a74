//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod audio_manager;
mod icons;
mod player;
mod sidebar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio_manager::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
// Views are accessed via views::ViewName

use dioxus::prelude::*;

pub const DEFAULT_COVER: Asset = asset!("/assets/img/default-cover.svg");

/// Remote artwork, or the bundled placeholder when the catalog sent none.
pub fn cover_src(url: Option<&str>) -> String {
    match url {
        Some(url) => url.to_string(),
        None => DEFAULT_COVER.to_string(),
    }
}
