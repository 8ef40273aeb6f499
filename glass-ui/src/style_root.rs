//! Browser style root
//!
//! Custom properties set here are inherited by the whole page, so every
//! mounted panel shares them. Keep one panel mounted at a time.

use glass_common::StyleTarget;
use tracing::warn;
use wasm_bindgen_x::JsCast;

/// Writes CSS custom properties onto `document.documentElement.style`
pub struct DocumentStyleRoot {
    style: Option<web_sys_x::CssStyleDeclaration>,
}

impl DocumentStyleRoot {
    /// The current document's root element.
    ///
    /// When there is no document the root is detached and writes are dropped.
    pub fn current() -> Self {
        let style = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys_x::HtmlElement>().ok())
            .map(|root| root.style());

        if style.is_none() {
            warn!("No document root available, style writes will be skipped");
        }

        Self { style }
    }
}

impl StyleTarget for DocumentStyleRoot {
    fn set_variable(&mut self, name: &str, value: &str) {
        let Some(style) = &self.style else {
            return;
        };
        if style.set_property(name, value).is_err() {
            warn!("Browser rejected {}: {}", name, value);
        }
    }
}
