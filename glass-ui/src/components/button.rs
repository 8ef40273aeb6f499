//! Panel buttons

use dioxus::prelude::*;

/// Chromeless button - accessibility and click handling without visual
/// styling. Used by PanelButton and for the close affordance.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    #[props(default)] tabindex: Option<i32>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|pressed| if pressed { "true" } else { "false" }),
            tabindex,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}

/// Panel button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PanelButtonVariant {
    /// Highlighted - the selected preset
    Active,
    /// Translucent chip - unselected presets
    Chip,
    /// Text only with hover
    Ghost,
}

impl PanelButtonVariant {
    fn as_class(&self) -> &'static str {
        match self {
            PanelButtonVariant::Active => "glass-button glass-button--active",
            PanelButtonVariant::Chip => "glass-button glass-button--chip",
            PanelButtonVariant::Ghost => "glass-button glass-button--ghost",
        }
    }
}

/// Button with panel styling
#[component]
pub fn PanelButton(
    variant: PanelButtonVariant,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    #[props(default)] tabindex: Option<i32>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{} {extra}", variant.as_class()),
        None => variant.as_class().to_string(),
    };

    rsx! {
        ChromelessButton {
            class: Some(computed_class),
            title,
            aria_pressed,
            tabindex,
            onclick,
            {children}
        }
    }
}
