//! Floating panel for tuning the page's glass style variables
//!
//! The panel stays mounted while closed and fades out with a CSS transition,
//! so opening it again is just a class change. While closed it is `inert`,
//! focus inside it is dropped, and input handlers ignore stray events.
//! Visibility belongs to the caller: the panel only asks to be closed via
//! `on_close`, on
//! - the close button
//! - Escape while focus is inside the panel
//! - a pointer-down anywhere outside the panel while it is open

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use glass_common::dismiss::{accepts_input, close_request, CloseTrigger};
use glass_common::format::display_value;
use glass_common::{PanelState, PRESETS};
use tracing::debug;

use crate::components::button::{ChromelessButton, PanelButton, PanelButtonVariant};
use crate::components::icons::{ResetIcon, SlidersIcon, XIcon};
use crate::style_root::DocumentStyleRoot;
use crate::wasm_utils::{
    blur_active_within, element_contains, event_target_node, DocumentEventListener,
};

/// Counter for generating unique panel IDs
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Slider panel that writes glass style variables onto the document root
#[component]
pub fn StyleVariablePanel(
    /// Whether the panel is shown; owned by the caller
    open: ReadSignal<bool>,
    /// Called when the panel should close
    on_close: EventHandler<()>,
    /// Header text
    #[props(default = "Glass Controls".to_string())]
    title: String,
    /// Optional CSS class for the panel container
    #[props(default)]
    class: Option<String>,
    /// Called with the new state after every slider, preset, or reset change
    #[props(default)]
    on_change: Option<EventHandler<PanelState>>,
) -> Element {
    let mut state = use_signal(PanelState::new);
    let mut outside_listener: Signal<Option<DocumentEventListener>> = use_signal(|| None);

    let panel_id = use_hook(|| {
        let id = PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("glass-panel-{}", id)
    });
    let panel_id_for_effect = panel_id.clone();

    // Every close path goes through here so each trigger closes at most once
    let request_close = move |open_now: bool, trigger: CloseTrigger| {
        if let Some(request) = close_request(open_now, trigger) {
            debug!("Glass panel close requested by {:?}", request.trigger);
            on_close.call(());
        }
    };

    // Document-level pointerdown listener, attached only while open.
    // Replacing the guard with None detaches it; unmount drops the signal.
    use_effect(move || {
        let is_open = open();
        let panel_id = panel_id_for_effect.clone();

        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            outside_listener.set(None);
            return;
        };

        if !is_open {
            outside_listener.set(None);
            blur_active_within(&document, &panel_id);
            return;
        }

        let runtime = Runtime::current();
        let lookup_document = document.clone();

        let listener = DocumentEventListener::new(
            document,
            "pointerdown",
            move |event: wasm_bindgen_x::JsValue| {
                let target = event_target_node(&event);
                let inside = element_contains(&lookup_document, &panel_id, target.as_ref());
                let _guard = RuntimeGuard::new(runtime.clone());
                request_close(*open.peek(), CloseTrigger::PointerDown { inside });
            },
        );

        outside_listener.set(Some(listener));
    });

    let notify = move |next: PanelState| {
        if let Some(handler) = on_change {
            handler.call(next);
        }
    };

    let is_open = open();
    let current = state();
    let active_preset = current.active_preset();
    // Keep hidden controls out of the tab order
    let tabindex = if is_open { None } else { Some(-1) };

    let panel_class = format!(
        "glass-panel {} {}",
        if is_open { "glass-panel--open" } else { "glass-panel--closed" },
        class.unwrap_or_default(),
    );

    rsx! {
        div {
            id: "{panel_id}",
            class: "{panel_class}",
            role: "dialog",
            aria_label: "{title}",
            aria_hidden: if is_open { "false" } else { "true" },
            "inert": if is_open { None } else { Some("true") },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    request_close(open(), CloseTrigger::Escape);
                }
            },

            div { class: "glass-panel__header",
                div { class: "glass-panel__title",
                    SlidersIcon {}
                    span { "{title}" }
                }
                ChromelessButton {
                    class: Some("glass-panel__close".to_string()),
                    aria_label: Some("Close".to_string()),
                    tabindex,
                    onclick: move |_| request_close(open(), CloseTrigger::CloseButton),
                    XIcon {}
                }
            }

            div { class: "glass-panel__presets",
                for definition in PRESETS.iter() {
                    PanelButton {
                        key: "{definition.id}",
                        variant: if active_preset == Some(definition.id) { PanelButtonVariant::Active } else { PanelButtonVariant::Chip },
                        aria_pressed: Some(active_preset == Some(definition.id)),
                        tabindex,
                        onclick: {
                            let preset_id = definition.id;
                            move |_| {
                                if !accepts_input(open()) {
                                    return;
                                }
                                let mut root = DocumentStyleRoot::current();
                                state.write().apply_preset(preset_id, &mut root);
                                notify(state());
                            }
                        },
                        "{definition.label}"
                    }
                }
            }

            div { class: "glass-panel__sliders",
                for (descriptor , value) in current.entries() {
                    div { key: "{descriptor.id}", class: "glass-panel__row",
                        div { class: "glass-panel__row-header",
                            label { r#for: "{panel_id}-{descriptor.id}", "{descriptor.label}" }
                            span { class: "glass-panel__value", {display_value(descriptor, value)} }
                        }
                        input {
                            id: "{panel_id}-{descriptor.id}",
                            class: "glass-panel__slider",
                            r#type: "range",
                            min: "{descriptor.min}",
                            max: "{descriptor.max}",
                            step: "{descriptor.step}",
                            value: "{value}",
                            tabindex,
                            oninput: {
                                let id = descriptor.id;
                                move |evt: FormEvent| {
                                    if !accepts_input(open()) {
                                        return;
                                    }
                                    let raw = evt.value();
                                    let mut root = DocumentStyleRoot::current();
                                    state.write().set_parameter(id, &raw, &mut root);
                                    notify(state());
                                }
                            },
                        }
                    }
                }
            }

            div { class: "glass-panel__footer",
                PanelButton {
                    variant: PanelButtonVariant::Ghost,
                    title: Some("Restore default values".to_string()),
                    tabindex,
                    onclick: move |_| {
                        if !accepts_input(open()) {
                            return;
                        }
                        let mut root = DocumentStyleRoot::current();
                        state.write().reset(&mut root);
                        notify(state());
                    },
                    ResetIcon {}
                    "Reset"
                }
            }
        }
    }
}
