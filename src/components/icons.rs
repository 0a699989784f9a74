use dioxus::prelude::*;

const HEART_PATH: &str = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z";
const SPEAKER_POINTS: &str = "11 5 6 9 2 9 2 15 6 15 11 19 11 5";

/// Icons drawn with filled shapes; everything else is stroked.
fn is_solid(name: &str) -> bool {
    matches!(name, "play" | "pause" | "prev" | "next" | "heart-filled")
}

fn icon_shapes(name: &str) -> Element {
    match name {
        "home" => rsx! {
            path { d: "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        },
        "search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "M21 21l-4.35-4.35" }
        },
        "heart" | "heart-filled" => rsx! {
            path { d: HEART_PATH }
        },
        "play" => rsx! {
            polygon { points: "5 3 19 12 5 21 5 3" }
        },
        "pause" => rsx! {
            rect { x: "6", y: "4", width: "4", height: "16" }
            rect { x: "14", y: "4", width: "4", height: "16" }
        },
        "prev" => rsx! {
            polygon { points: "19 20 9 12 19 4 19 20" }
            line { x1: "5", y1: "19", x2: "5", y2: "5", stroke: "currentColor", stroke_width: "2" }
        },
        "next" => rsx! {
            polygon { points: "5 4 15 12 5 20 5 4" }
            line { x1: "19", y1: "5", x2: "19", y2: "19", stroke: "currentColor", stroke_width: "2" }
        },
        "repeat" | "repeat-1" => rsx! {
            polyline { points: "17 1 21 5 17 9" }
            path { d: "M3 11V9a4 4 0 0 1 4-4h14" }
            polyline { points: "7 23 3 19 7 15" }
            path { d: "M21 13v2a4 4 0 0 1-4 4H3" }
            if name == "repeat-1" {
                path { d: "M11 10h1v4" }
            }
        },
        "volume" => rsx! {
            polygon { points: SPEAKER_POINTS }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        "volume-x" => rsx! {
            polygon { points: SPEAKER_POINTS }
            line { x1: "23", y1: "9", x2: "17", y2: "15" }
            line { x1: "17", y1: "9", x2: "23", y2: "15" }
        },
        "loader" => rsx! {
            circle { cx: "12", cy: "12", r: "10", opacity: "0.25" }
            path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    }
}

#[component]
pub fn Icon(#[props(into)] name: String, #[props(into, default)] class: String) -> Element {
    let spin = if name == "loader" { " spin" } else { "" };
    let shapes = icon_shapes(&name);

    if is_solid(&name) {
        rsx! {
            svg {
                class: "{class}{spin}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                stroke: "currentColor",
                stroke_width: "0",
                {shapes}
            }
        }
    } else {
        rsx! {
            svg {
                class: "{class}{spin}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                {shapes}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_solid;

    #[test]
    fn transport_glyphs_are_filled() {
        for name in ["play", "pause", "prev", "next", "heart-filled"] {
            assert!(is_solid(name), "{name}");
        }
        for name in ["home", "search", "heart", "repeat", "volume", "loader"] {
            assert!(!is_solid(name), "{name}");
        }
    }
}
