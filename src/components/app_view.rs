//! Defines the shared application view state.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Home,
    Favorites,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home => "Discover",
        AppView::Favorites => "Favorites",
    }
}
