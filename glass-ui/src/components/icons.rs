//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit the button's text color.

use dioxus::prelude::*;

/// X icon (close/dismiss)
#[component]
pub fn XIcon(#[props(default = "glass-icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Horizontal sliders icon (panel title)
#[component]
pub fn SlidersIcon(#[props(default = "glass-icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "21", x2: "14", y1: "4", y2: "4" }
            line { x1: "10", x2: "3", y1: "4", y2: "4" }
            line { x1: "21", x2: "12", y1: "12", y2: "12" }
            line { x1: "8", x2: "3", y1: "12", y2: "12" }
            line { x1: "21", x2: "16", y1: "20", y2: "20" }
            line { x1: "12", x2: "3", y1: "20", y2: "20" }
            line { x1: "14", x2: "14", y1: "2", y2: "6" }
            line { x1: "8", x2: "8", y1: "10", y2: "14" }
            line { x1: "16", x2: "16", y1: "18", y2: "22" }
        }
    }
}

/// Counter-clockwise arrow (reset)
#[component]
pub fn ResetIcon(#[props(default = "glass-icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" }
            path { d: "M3 3v5h5" }
        }
    }
}
