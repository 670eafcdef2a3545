//! Request/reply bridge to the page agent in the active tab.
//!
//! Client-side (csr): `chrome.tabs.query` + `chrome.tabs.sendMessage`.
//! Native builds: every request goes unanswered, since there is no tab to
//! talk to.
//!
//! ERROR HANDLING
//! ==============
//! A tab without an agent rejects `sendMessage`; that, a missing tab, and an
//! unreadable reply all surface as `None` so the panel keeps its current
//! display instead of failing.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use protocol::{Request, ThemeState};
#[cfg(any(test, feature = "csr"))]
use protocol::decode_state;
#[cfg(any(test, feature = "csr"))]
use serde_json::Value;

#[cfg(feature = "csr")]
mod chrome {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
        pub fn tabs_query(query: &JsValue) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
        pub fn tabs_send_message(tab_id: i32, message: &JsValue) -> Result<js_sys::Promise, JsValue>;
    }
}

/// Id of the first tab in a `chrome.tabs.query` result.
#[cfg(any(test, feature = "csr"))]
fn active_tab_id(tabs: &Value) -> Option<i32> {
    let id = tabs.as_array()?.first()?.get("id")?.as_i64()?;
    i32::try_from(id).ok()
}

/// Decode an agent reply; `null`/absent and malformed replies count as no
/// reply.
#[cfg(any(test, feature = "csr"))]
fn parse_reply(reply: &Value) -> Option<ThemeState> {
    if reply.is_null() {
        return None;
    }
    decode_state(reply).ok()
}

#[cfg(feature = "csr")]
fn js_to_json(value: &wasm_bindgen::JsValue) -> Option<Value> {
    let text = match js_sys::JSON::stringify(value) {
        Ok(text) => text.as_string()?,
        Err(err) => {
            log::debug!("value is not JSON-serializable: {err:?}");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("unreadable JSON from extension: {err}");
            None
        }
    }
}

#[cfg(feature = "csr")]
fn json_to_js(value: &Value) -> Option<wasm_bindgen::JsValue> {
    match js_sys::JSON::parse(&value.to_string()) {
        Ok(js) => Some(js),
        Err(err) => {
            log::warn!("failed to convert JSON for extension: {err:?}");
            None
        }
    }
}

/// Send `request` to the agent in the active tab of the current window and
/// wait for its reply.
#[cfg(feature = "csr")]
pub async fn send_to_active_tab(request: Request) -> Option<ThemeState> {
    use wasm_bindgen_futures::JsFuture;

    let kind = request.type_name();
    let query = json_to_js(&serde_json::json!({ "active": true, "currentWindow": true }))?;
    let promise = match chrome::tabs_query(&query) {
        Ok(promise) => promise,
        Err(err) => {
            log::debug!("{kind}: tab query unavailable: {err:?}");
            return None;
        }
    };
    let tabs = match JsFuture::from(promise).await {
        Ok(tabs) => tabs,
        Err(err) => {
            log::debug!("{kind}: tab query failed: {err:?}");
            return None;
        }
    };
    let Some(tab_id) = js_to_json(&tabs).as_ref().and_then(active_tab_id) else {
        log::debug!("{kind}: no active tab");
        return None;
    };

    let message = json_to_js(&protocol::encode_request(&request))?;
    let promise = match chrome::tabs_send_message(tab_id, &message) {
        Ok(promise) => promise,
        Err(err) => {
            log::debug!("{kind}: sendMessage threw: {err:?}");
            return None;
        }
    };
    match JsFuture::from(promise).await {
        Ok(reply) => js_to_json(&reply).as_ref().and_then(parse_reply),
        Err(err) => {
            log::debug!("{kind} unanswered: {err:?}");
            None
        }
    }
}

/// Send `request` in the background and hand the reply (or `None`) to
/// `on_reply`.
pub fn send_request<F>(request: Request, on_reply: F)
where
    F: FnOnce(Option<ThemeState>) + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            on_reply(send_to_active_tab(request).await);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        on_reply(None);
    }
}
