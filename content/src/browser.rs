//! Browser shell around [`PageAgent`]: extension APIs, the live document,
//! and the content-script entry point.
//!
//! ERROR HANDLING
//! ==============
//! A missing `chrome.storage` or a rejected promise degrades to default state
//! plus a console warning. Nothing here throws back into the page.

use std::collections::HashMap;

use log::{debug, warn};
use protocol::{ThemeState, encode_state, storage_key};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Document;

use crate::agent::PageAgent;
use crate::consts::DOM_READY_EVENT;
use crate::dom::{PageRoot, is_loading};
use crate::store::{KeyValueStore, stored_entry};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = get)]
    fn storage_local_get(key: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "storage", "local"], js_name = set)]
    fn storage_local_set(items: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    fn add_message_listener(listener: &js_sys::Function) -> Result<(), JsValue>;
}

// ── JSON bridging ───────────────────────────────────────────────

fn js_to_json(value: &JsValue) -> Option<Value> {
    let text = match js_sys::JSON::stringify(value) {
        Ok(text) => text.as_string(),
        Err(err) => {
            debug!("value is not JSON-serializable: {err:?}");
            return None;
        }
    };
    let Some(text) = text else {
        debug!("value has no JSON form");
        return None;
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("unreadable JSON from host: {err}");
            None
        }
    }
}

fn json_to_js(value: &Value) -> Option<JsValue> {
    match js_sys::JSON::parse(&value.to_string()) {
        Ok(js) => Some(js),
        Err(err) => {
            warn!("failed to convert JSON for host: {err:?}");
            None
        }
    }
}

// ── Document ────────────────────────────────────────────────────

/// [`PageRoot`] over the live document's `<html>` element.
pub struct DocumentRoot {
    document: Document,
}

impl DocumentRoot {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageRoot for DocumentRoot {
    fn insert_style(&mut self, id: &str, css: &str) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        let style = match self.document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                warn!("failed to create style element: {err:?}");
                return;
            }
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        if let Err(err) = root.append_child(&style) {
            warn!("failed to append style element: {err:?}");
        }
    }

    fn remove_style(&mut self, id: &str) {
        if let Some(style) = self.document.get_element_by_id(id) {
            style.remove();
        }
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute(name, value) {
                warn!("failed to set {name}: {err:?}");
            }
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.remove_attribute(name) {
                warn!("failed to remove {name}: {err:?}");
            }
        }
    }
}

// ── Storage ─────────────────────────────────────────────────────

/// [`KeyValueStore`] over `chrome.storage.local`.
///
/// Entries are prefetched into a local cache before the agent is built;
/// writes update the cache and are sent to the extension store in the
/// background.
#[derive(Default)]
pub struct ChromeStore {
    cache: HashMap<String, ThemeState>,
}

impl ChromeStore {
    /// Fetch the entry for `key`, falling back to an empty store when the
    /// extension storage is unavailable or holds nothing usable.
    pub async fn preload(key: &str) -> Self {
        let mut store = Self::default();
        let promise = match storage_local_get(key) {
            Ok(promise) => promise,
            Err(err) => {
                warn!("extension storage unavailable: {err:?}");
                return store;
            }
        };
        let items = match JsFuture::from(promise).await {
            Ok(items) => items,
            Err(err) => {
                warn!("storage read failed: {err:?}");
                return store;
            }
        };
        let Some(items) = js_to_json(&items) else {
            return store;
        };
        if let Some(state) = stored_entry(&items, key) {
            store.cache.insert(key.to_owned(), state);
        }
        store
    }
}

impl KeyValueStore for ChromeStore {
    fn get(&self, key: &str) -> Option<ThemeState> {
        self.cache.get(key).copied()
    }

    fn set(&mut self, key: &str, state: ThemeState) {
        self.cache.insert(key.to_owned(), state);

        let mut items = serde_json::Map::new();
        items.insert(key.to_owned(), encode_state(&state));
        let Some(items) = json_to_js(&Value::Object(items)) else {
            warn!("storage write for {key} skipped");
            return;
        };
        let key = key.to_owned();
        spawn_local(async move {
            let result = match storage_local_set(&items) {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                warn!("storage write for {key} failed: {err:?}");
            }
        });
    }
}

// ── Entry point ─────────────────────────────────────────────────

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

/// Content-script entry point; defers until the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if is_loading(&document.ready_state()) {
        let boot = Closure::once_into_js(|| spawn_local(boot()));
        if let Err(err) = document.add_event_listener_with_callback(DOM_READY_EVENT, boot.unchecked_ref()) {
            warn!("failed to defer start-up: {err:?}");
        }
    } else {
        spawn_local(boot());
    }
}

async fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let hostname = match window.location().hostname() {
        Ok(hostname) => hostname,
        Err(err) => {
            warn!("page has no hostname: {err:?}");
            return;
        }
    };

    let store = ChromeStore::preload(&storage_key(&hostname)).await;
    let agent = PageAgent::init(&hostname, DocumentRoot::new(document), store);
    listen(agent);
}

/// Register the runtime message listener. The listener owns `agent` for the
/// rest of the page's life.
fn listen(mut agent: PageAgent<DocumentRoot, ChromeStore>) {
    let listener = Closure::<dyn FnMut(JsValue, JsValue, js_sys::Function) -> bool>::new(
        move |message: JsValue, _sender: JsValue, send_response: js_sys::Function| {
            let Some(message) = js_to_json(&message) else {
                return false;
            };
            agent.dispatch(&message, |state| {
                let Some(reply) = json_to_js(&encode_state(state)) else {
                    debug!("reply dropped: state not convertible");
                    return;
                };
                if let Err(err) = send_response.call1(&JsValue::NULL, &reply) {
                    debug!("reply dropped: {err:?}");
                }
            })
        },
    );

    match add_message_listener(listener.as_ref().unchecked_ref()) {
        Ok(()) => listener.forget(),
        Err(err) => warn!("runtime messaging unavailable: {err:?}"),
    }
}
