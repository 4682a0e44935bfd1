//! Browser API bindings
//!
//! Thin wrappers around `web-sys` that implement the folio-core seams
//! (clipboard, alert, interaction surface) and the few DOM calls the page
//! makes directly.

use folio_core::{Alert, BlockedEvent, Clipboard, ClipboardError, InteractionSurface, SurfaceError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn body() -> Option<web_sys::HtmlElement> {
    document()?.body()
}

fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard & Alert
// ─────────────────────────────────────────────────────────────────────────────

/// `navigator.clipboard`
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard();
        if clipboard.is_undefined() {
            return Err(ClipboardError::Unavailable);
        }
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(js_error_text(&e)))
    }
}

/// `window.alert`
pub struct BrowserAlert;

impl Alert for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window()
            && let Err(e) = window.alert_with_message(message)
        {
            tracing::warn!(error = %js_error_text(&e), "Alert failed");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction Surface
// ─────────────────────────────────────────────────────────────────────────────

/// Document-level interceptors plus body scroll lock.
pub struct DocumentSurface {
    document: Option<web_sys::Document>,
    handler: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
            event.stop_propagation();
        });
        Self {
            document: document(),
            handler,
        }
    }
}

impl Default for DocumentSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionSurface for DocumentSurface {
    fn lock_scroll(&mut self) {
        let Some(body) = body() else { return };
        if body.style().set_property("overflow", "hidden").is_err() {
            tracing::warn!("Could not lock body scroll");
        }
        let _ = body.class_list().add_1("interactions-blocked");
    }

    fn unlock_scroll(&mut self) {
        let Some(body) = body() else { return };
        let _ = body.style().remove_property("overflow");
        let _ = body.class_list().remove_1("interactions-blocked");
    }

    fn install(&mut self, event: BlockedEvent) -> Result<(), SurfaceError> {
        let document = self.document.as_ref().ok_or(SurfaceError::NoDocument)?;
        let options = web_sys::AddEventListenerOptions::new();
        options.set_capture(event.capture());
        options.set_passive(event.passive());
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                event.name(),
                self.handler.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| SurfaceError::Install {
                event: event.name(),
                reason: js_error_text(&e),
            })
    }

    fn remove(&mut self, event: BlockedEvent) {
        let Some(document) = self.document.as_ref() else { return };
        if let Err(e) = document.remove_event_listener_with_callback_and_bool(
            event.name(),
            self.handler.as_ref().unchecked_ref(),
            event.capture(),
        ) {
            tracing::warn!(event = event.name(), error = %js_error_text(&e), "Interceptor not removed");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Document Listeners
// ─────────────────────────────────────────────────────────────────────────────

/// A document listener removed when dropped.
pub struct DocumentListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    pub fn new(event: &'static str, callback: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        document()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        if let Some(document) = document() {
            let _ = document
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Whether `event` happened inside the element with id `element_id`.
pub fn event_within(event: &web_sys::Event, element_id: &str) -> bool {
    let Some(element) = document().and_then(|d| d.get_element_by_id(element_id)) else {
        return false;
    };
    let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    element.contains(target.as_ref())
}

// ─────────────────────────────────────────────────────────────────────────────
// Scrolling & Entropy
// ─────────────────────────────────────────────────────────────────────────────

/// Smooth-scroll so the element with `id` sits just below the fixed header.
/// Returns false if no such element exists.
pub fn scroll_to_element(id: &str, header_offset: f64) -> bool {
    let Some(window) = web_sys::window() else { return false };
    let Some(element) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        tracing::warn!(id, "Scroll target not found");
        return false;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(folio_core::scroll_target(f64::from(element.offset_top()), header_offset));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Seed for the typing jitter: OS entropy, or the clock if that fails.
pub fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::fill(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(e) => {
            tracing::warn!(error = %e, "No entropy source, seeding from clock");
            js_sys::Date::now().to_bits()
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
