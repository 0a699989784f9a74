use dioxus::prelude::*;

mod api;
mod browse;
mod components;
mod db;
mod playback;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "theme-color", content: "#a238ff" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Deezplay" }

        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
