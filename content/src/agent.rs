//! Page agent core: theme state, page override, persistence and dispatch.
//!
//! [`PageAgent`] is generic over the page surface and the store so it runs
//! unchanged in the browser and in unit tests. Exactly one agent exists per
//! loaded page; it is dropped with the page.

use log::debug;
use protocol::{Request, Theme, ThemeState, decode_request, storage_key};
use serde_json::Value;

use crate::consts::{MARKER_ATTRIBUTE, STYLE_ELEMENT_ID};
use crate::dom::PageRoot;
use crate::store::KeyValueStore;
use crate::styles::css_for;

#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

/// Owner of one page's theme state.
pub struct PageAgent<R, S> {
    key: String,
    state: ThemeState,
    root: R,
    store: S,
}

impl<R: PageRoot, S: KeyValueStore> PageAgent<R, S> {
    /// Build the agent for `hostname`, adopting any stored state and
    /// installing the override when that state is enabled.
    pub fn init(hostname: &str, root: R, store: S) -> Self {
        let key = storage_key(hostname);
        let state = match store.get(&key) {
            Some(stored) => {
                debug!("adopting stored theme for {key}: {stored:?}");
                stored
            }
            None => ThemeState::default(),
        };

        let mut agent = Self { key, state, root, store };
        if agent.state.enabled {
            agent.apply(agent.state.theme);
        }
        agent
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Storage key for this page's hostname.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Select `theme`, reinstall the override if enabled, and persist.
    pub fn set_theme(&mut self, theme: Theme) -> ThemeState {
        self.state.theme = theme;
        if self.state.enabled {
            self.apply(theme);
        }
        self.persist();
        self.state
    }

    /// Turn the override on or off, and persist.
    pub fn set_enabled(&mut self, enabled: bool) -> ThemeState {
        self.state.enabled = enabled;
        if enabled {
            self.apply(self.state.theme);
        } else {
            self.remove();
        }
        self.persist();
        self.state
    }

    /// Execute a decoded request and return the resulting state.
    pub fn handle(&mut self, request: Request) -> ThemeState {
        match request {
            Request::GetTheme => self.state,
            Request::ToggleTheme { theme } => self.set_theme(theme),
            Request::ToggleEnabled { enabled } => self.set_enabled(enabled),
        }
    }

    /// Decode `message`, execute it, and hand the resulting state to
    /// `respond`.
    ///
    /// `respond` runs exactly once for a recognized request and never for an
    /// unrecognized or malformed one. Returns whether it ran.
    pub fn dispatch<F>(&mut self, message: &Value, respond: F) -> bool
    where
        F: FnOnce(&ThemeState),
    {
        match decode_request(message) {
            Ok(request) => {
                let state = self.handle(request);
                respond(&state);
                true
            }
            Err(err) => {
                debug!("ignoring message: {err}");
                false
            }
        }
    }

    fn apply(&mut self, theme: Theme) {
        self.remove();
        self.root.insert_style(STYLE_ELEMENT_ID, css_for(theme));
        self.root.set_attribute(MARKER_ATTRIBUTE, theme.as_str());
    }

    fn remove(&mut self) {
        self.root.remove_style(STYLE_ELEMENT_ID);
        self.root.remove_attribute(MARKER_ATTRIBUTE);
    }

    fn persist(&mut self) {
        debug!("persisting {:?} under {}", self.state, self.key);
        self.store.set(&self.key, self.state);
    }
}
