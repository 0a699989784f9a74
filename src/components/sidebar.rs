use crate::api::Track;
use crate::components::{view_label, AppView, Icon};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let favorites = use_context::<Signal<Vec<Track>>>();
    let mut current_view = use_context::<Signal<AppView>>();
    let view = current_view();
    let favorite_count = favorites().len();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                div { class: "brand-mark", "D" }
                div {
                    h1 { class: "brand-title", "Deezplay" }
                    p { class: "muted small", "{view_label(&view)}" }
                }
            }

            nav { class: "sidebar-nav",
                NavItem {
                    icon: "home",
                    label: view_label(&AppView::Home),
                    active: view == AppView::Home,
                    onclick: move |_| current_view.set(AppView::Home),
                }
                NavItem {
                    icon: "heart",
                    label: format!("{} ({favorite_count})", view_label(&AppView::Favorites)),
                    active: view == AppView::Favorites,
                    onclick: move |_| current_view.set(AppView::Favorites),
                }
            }
        }
    }
}

#[component]
fn NavItem(
    #[props(into)] icon: String,
    #[props(into)] label: String,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        button { class, onclick: move |e| onclick.call(e),
            Icon { name: icon, class: "icon" }
            span { "{label}" }
        }
    }
}
