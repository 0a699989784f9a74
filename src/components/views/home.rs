use crate::components::views::{AlbumsView, ArtistsView, SearchView};
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Discover" }
                p { class: "muted", "Search the catalog or start from what is trending." }
            }
            SearchView {}
            AlbumsView {}
            ArtistsView {}
        }
    }
}
