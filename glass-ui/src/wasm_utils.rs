//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure alive
//! for as long as it is attached. `closure.forget()` leaks it and leaves the
//! listener attached forever, so the closure lives in a guard that removes the
//! listener on `Drop`:
//!
//! ```ignore
//! // Listener is attached when DocumentEventListener is created
//! let listener = DocumentEventListener::new(document, "pointerdown", callback);
//!
//! // Listener is removed when `listener` is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus, store the guard in a `Signal<Option<DocumentEventListener>>`.
//! Setting it to `None` removes the listener, and the signal is dropped with
//! its component scope on unmount.

use wasm_bindgen_x::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attaches `callback` to `event_name` on the document.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach document {} listener", event_name);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// The `target` of a DOM event, if it is a node
pub fn event_target_node(event: &JsValue) -> Option<web_sys_x::Node> {
    js_sys_x::Reflect::get(event, &"target".into())
        .ok()
        .and_then(|target| target.dyn_into::<web_sys_x::Node>().ok())
}

/// Whether the element with `id` contains `node`.
///
/// Returns `None` when there is no such element, e.g. before the first mount.
pub fn element_contains(
    document: &web_sys_x::Document,
    id: &str,
    node: Option<&web_sys_x::Node>,
) -> Option<bool> {
    let element = document.get_element_by_id(id)?;
    Some(element.contains(node))
}

/// Blur the focused element if it sits inside the element with `id`
pub fn blur_active_within(document: &web_sys_x::Document, id: &str) {
    let Some(active) = document.active_element() else {
        return;
    };
    let node: &web_sys_x::Node = &active;
    if element_contains(document, id, Some(node)) != Some(true) {
        return;
    }
    if let Some(html) = active.dyn_ref::<web_sys_x::HtmlElement>() {
        let _ = html.blur();
    }
}
