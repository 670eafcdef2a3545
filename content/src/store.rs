//! Persistence surface for per-hostname theme state.
//!
//! DESIGN
//! ======
//! The agent reads once at start-up and writes after every change. Reads are
//! synchronous: the browser store prefetches the page's entry before the
//! agent is built, and writes go out in the background. The in-memory agent
//! state stays authoritative, so no caller waits on a write.

use std::collections::HashMap;

use log::debug;
use protocol::{ThemeState, decode_state};
use serde_json::Value;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Key-value store holding one [`ThemeState`] per storage key.
pub trait KeyValueStore {
    /// Stored state for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<ThemeState>;

    /// Store `state` under `key`, replacing any previous entry.
    fn set(&mut self, key: &str, state: ThemeState);
}

/// In-process store backed by a `HashMap`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, ThemeState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<ThemeState> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, state: ThemeState) {
        self.entries.insert(key.to_owned(), state);
    }
}

/// Pick the entry for `key` out of a storage read result.
///
/// A missing key or a value that is not a [`ThemeState`] yields `None`, so
/// the agent falls back to defaults.
#[must_use]
pub fn stored_entry(items: &Value, key: &str) -> Option<ThemeState> {
    let Some(entry) = items.get(key) else {
        debug!("no stored theme for {key}");
        return None;
    };
    match decode_state(entry) {
        Ok(state) => Some(state),
        Err(err) => {
            debug!("discarding stored theme for {key}: {err}");
            None
        }
    }
}
