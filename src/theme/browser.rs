//! Browser-backed theme host and event listeners.
//!
//! Reads and writes the preference through `localStorage`, evaluates the
//! color-scheme media query, checks `document.hidden`, and marks the `<html>`
//! element. [`BrowserListeners`] forwards `storage`, `visibilitychange`, and
//! media-query `change` events into the runtime and removes them on drop.
//! The runtime releases them through [`BrowserListeners::release_later`].
//!
//! TRADE-OFFS
//! ==========
//! Every browser call is best-effort. A missing `matchMedia` disables OS
//! tracking; a disabled `localStorage` keeps preferences in memory only.

use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Event, MediaQueryList, MediaQueryListEvent, StorageEvent, Window};

use super::config::RootMarker;
use super::error::ThemeError;
use super::host::ThemeHost;
use super::runtime;

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<Window, ThemeError> {
    web_sys::window().ok_or(ThemeError::WindowUnavailable)
}

fn local_storage() -> Result<web_sys::Storage, ThemeError> {
    window()?
        .local_storage()
        .map_err(|e| ThemeError::storage("open", js_detail(&e)))?
        .ok_or(ThemeError::StorageUnavailable)
}

fn document() -> Result<Document, ThemeError> {
    window()?
        .document()
        .ok_or_else(|| ThemeError::Document("no document".to_owned()))
}

/// [`ThemeHost`] over the live browser globals.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHost;

impl BrowserHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThemeHost for BrowserHost {
    fn read_preference(&self, key: &str) -> Result<Option<String>, ThemeError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| ThemeError::storage("read", js_detail(&e)))
    }

    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::storage("write", js_detail(&e)))
    }

    fn remove_preference(&mut self, key: &str) -> Result<(), ThemeError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| ThemeError::storage("remove", js_detail(&e)))
    }

    fn system_prefers_dark(&self, query: &str) -> Result<Option<bool>, ThemeError> {
        let list = window()?
            .match_media(query)
            .map_err(|e| ThemeError::MediaQuery(js_detail(&e)))?;
        Ok(list.map(|mq| mq.matches()))
    }

    fn page_visible(&self) -> bool {
        document().map_or(true, |doc| !doc.hidden())
    }

    fn apply_root(&mut self, marker: &RootMarker, dark: bool) -> Result<(), ThemeError> {
        let root = document()?
            .document_element()
            .ok_or_else(|| ThemeError::Document("no document element".to_owned()))?;
        let class_list = root.class_list();
        let toggled = if dark { class_list.add_1(&marker.class) } else { class_list.remove_1(&marker.class) };
        toggled.map_err(|e| ThemeError::Document(js_detail(&e)))?;
        if let Some(attr) = &marker.attribute {
            root.set_attribute(attr, if dark { "dark" } else { "light" })
                .map_err(|e| ThemeError::Document(js_detail(&e)))?;
        }
        Ok(())
    }
}

/// How the media-query listener was registered, so drop can undo it.
enum MediaRegistration {
    EventListener,
    Legacy,
}

struct MediaListener {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
    registration: MediaRegistration,
}

/// Registered browser listeners. Dropping this removes all of them.
pub struct BrowserListeners {
    window: Window,
    storage: Option<Closure<dyn FnMut(StorageEvent)>>,
    visibility: Option<(Document, Closure<dyn FnMut(Event)>)>,
    media: Option<MediaListener>,
}

impl BrowserListeners {
    /// Subscribe to cross-tab, visibility, and OS color-scheme changes.
    ///
    /// Returns `None` only without a `window`; individual listeners that fail
    /// to register are logged and skipped.
    pub fn attach(media_query: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let mut listeners = Self { window, storage: None, visibility: None, media: None };
        listeners.storage = listeners.attach_storage();
        listeners.visibility = Self::attach_visibility();
        listeners.media = listeners.attach_media(media_query);
        Some(listeners)
    }

    fn attach_storage(&self) -> Option<Closure<dyn FnMut(StorageEvent)>> {
        let callback = Closure::wrap(Box::new(move |event: StorageEvent| {
            // sessionStorage writes fire `storage` too.
            if let (Some(area), Ok(local)) = (event.storage_area(), local_storage()) {
                if !js_sys::Object::is(&area, &local) {
                    return;
                }
            }
            runtime::handle_storage_change(event.key().as_deref(), event.new_value().as_deref());
        }) as Box<dyn FnMut(StorageEvent)>);

        match self
            .window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
        {
            Ok(()) => Some(callback),
            Err(e) => {
                warn!("theme: {}", ThemeError::Listener(js_detail(&e)));
                None
            }
        }
    }

    fn attach_visibility() -> Option<(Document, Closure<dyn FnMut(Event)>)> {
        let doc = document().ok()?;
        let callback = Closure::wrap(Box::new(move |_event: Event| {
            let visible = document().map_or(true, |d| !d.hidden());
            runtime::handle_visibility_change(visible);
        }) as Box<dyn FnMut(Event)>);

        match doc.add_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some((doc, callback)),
            Err(e) => {
                warn!("theme: {}", ThemeError::Listener(js_detail(&e)));
                None
            }
        }
    }

    fn attach_media(&self, media_query: &str) -> Option<MediaListener> {
        let list = match self.window.match_media(media_query) {
            Ok(Some(list)) => list,
            Ok(None) => {
                debug!("theme: matchMedia returned nothing; OS tracking disabled");
                return None;
            }
            Err(e) => {
                debug!("theme: {}; OS tracking disabled", ThemeError::MediaQuery(js_detail(&e)));
                return None;
            }
        };
        let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            runtime::handle_system_change(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        let registration = if list
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            MediaRegistration::EventListener
        } else if list
            .add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref()))
            .is_ok()
        {
            MediaRegistration::Legacy
        } else {
            debug!("theme: media query change subscription unavailable; OS tracking disabled");
            return None;
        };
        Some(MediaListener { list, callback, registration })
    }
}

impl BrowserListeners {
    /// Drop on the next microtask so a callback that led here (a subscriber
    /// calling `shutdown` or `init`) is not freed while it is still running.
    pub fn release_later(self) {
        let window = self.window.clone();
        let release = Closure::once_into_js(move || drop(self));
        window.queue_microtask(release.unchecked_ref());
    }
}

impl Drop for BrowserListeners {
    fn drop(&mut self) {
        if let Some(callback) = self.storage.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
        }
        if let Some((doc, callback)) = self.visibility.take() {
            let _ = doc.remove_event_listener_with_callback("visibilitychange", callback.as_ref().unchecked_ref());
        }
        if let Some(media) = self.media.take() {
            let callback: &js_sys::Function = media.callback.as_ref().unchecked_ref();
            let _ = match media.registration {
                MediaRegistration::EventListener => media.list.remove_event_listener_with_callback("change", callback),
                MediaRegistration::Legacy => media.list.remove_listener_with_opt_callback(Some(callback)),
            };
        }
    }
}
