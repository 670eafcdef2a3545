//! Shared theme model and message codec for the page agent and the popup.
//!
//! This crate owns the JSON shapes exchanged over the extension's runtime
//! messaging channel and the value stored per hostname. Both the `content`
//! agent and the `popup` panel depend on it so the two sides agree on tags
//! and field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix prepended to the hostname to form the storage key.
pub const STORAGE_KEY_PREFIX: &str = "theme_";

/// Error returned by [`decode_request`] and [`decode_state`].
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The message is not an object or carries no string `type` field.
    #[error("message has no type tag")]
    MissingType,
    /// The `type` tag does not name a known request.
    #[error("unknown request type: {0}")]
    UnknownType(String),
    /// The tag is known but the payload fields do not match.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Visual mode applied to a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// No inversion; the page renders as authored.
    #[default]
    Light,
    /// Inverted colors with media re-inverted.
    Dark,
}

impl Theme {
    /// Both themes in display order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Lowercase name used on the wire and in the marker attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Per-hostname theme choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Selected theme, kept even while disabled.
    pub theme: Theme,
    /// Whether the override is active on the page.
    pub enabled: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { theme: Theme::Light, enabled: true }
    }
}

/// A request sent from the popup to the page agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    /// Read the current state.
    GetTheme,
    /// Select a theme.
    ToggleTheme {
        /// Theme to switch to.
        theme: Theme,
    },
    /// Turn the override on or off.
    ToggleEnabled {
        /// Requested enabled flag.
        enabled: bool,
    },
}

impl Request {
    /// Wire tag for this request.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GetTheme => "GET_THEME",
            Self::ToggleTheme { .. } => "TOGGLE_THEME",
            Self::ToggleEnabled { .. } => "TOGGLE_ENABLED",
        }
    }
}

/// Build the storage key for `hostname`.
#[must_use]
pub fn storage_key(hostname: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{hostname}")
}

/// Encode a request as a JSON message object.
#[must_use]
pub fn encode_request(request: &Request) -> Value {
    serde_json::to_value(request).unwrap_or(Value::Null)
}

/// Decode a JSON message into a request.
///
/// # Errors
///
/// Returns [`ProtocolError::MissingType`] when there is no string `type`
/// field, [`ProtocolError::UnknownType`] for unrecognized tags, and
/// [`ProtocolError::Malformed`] when a known tag carries bad fields.
pub fn decode_request(message: &Value) -> Result<Request, ProtocolError> {
    let tag = message
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingType)?;
    if !matches!(tag, "GET_THEME" | "TOGGLE_THEME" | "TOGGLE_ENABLED") {
        return Err(ProtocolError::UnknownType(tag.to_owned()));
    }
    Ok(Request::deserialize(message)?)
}

/// Encode a state as a JSON object (reply payload and stored value).
#[must_use]
pub fn encode_state(state: &ThemeState) -> Value {
    serde_json::json!({
        "theme": state.theme.as_str(),
        "enabled": state.enabled,
    })
}

/// Decode a reply payload or stored value into a state.
///
/// # Errors
///
/// Returns [`ProtocolError::Malformed`] when the value is not a state object.
pub fn decode_state(value: &Value) -> Result<ThemeState, ProtocolError> {
    Ok(ThemeState::deserialize(value)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
