use dioxus::prelude::*;
use glass_common::PanelState;
use glass_ui::{SlidersIcon, StyleVariablePanel};
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut panel_open = use_signal(|| false);
    let mut css_snippet = use_signal(|| PanelState::new().css_declarations());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "demo",
            div { class: "demo__backdrop" }
            div { class: "demo__stage",
                div { class: "demo__card glass-surface",
                    h1 { "Liquid Glass" }
                    p { "Drag the sliders or pick a preset to restyle this card." }
                }
                pre { class: "demo__css", "{css_snippet}" }
            }
            // Hidden while open so its own pointerdown never races the outside-press close
            if !panel_open() {
                button {
                    class: "demo__launcher glass-surface",
                    r#type: "button",
                    onclick: move |_| {
                        info!("Opening glass panel");
                        panel_open.set(true);
                    },
                    SlidersIcon {}
                    "Tune glass"
                }
            }
            StyleVariablePanel {
                open: panel_open,
                on_close: move |_| panel_open.set(false),
                on_change: move |next: PanelState| css_snippet.set(next.css_declarations()),
            }
        }
    }
}
