//! glass-ui - Dioxus view layer for the glass style panel
//!
//! Renders the floating panel and owns the browser side of the style root:
//! writes go to `document.documentElement.style`.

pub mod components;
pub mod style_root;
pub mod wasm_utils;

pub use components::*;
pub use style_root::DocumentStyleRoot;
