//! Browser-side storage of the provider session tokens.
//!
//! Tokens live in `localStorage` under a single key and are only ever read by
//! `HostedIdentity`. Email links (confirmation, recovery) hand tokens back in
//! the URL fragment; `App` calls [`adopt_session_from_location`] on every
//! page load to move them into storage and scrub the address bar.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use serde::{Deserialize, Serialize};

use super::wire::TokenGrant;

/// `localStorage` key holding the serialized [`StoredSession`].
pub const STORAGE_KEY: &str = "community_board_session";
/// Refresh the access token when it expires within this many seconds.
pub const REFRESH_MARGIN_SECS: i64 = 30;

/// Tokens for the ambient session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
}

impl StoredSession {
    #[must_use]
    pub fn from_grant(grant: &TokenGrant, now_unix: i64) -> Self {
        Self {
            access_token: grant.access_token.clone(),
            refresh_token: grant.refresh_token.clone(),
            expires_at: grant.expires_at(now_unix),
        }
    }

    #[must_use]
    pub fn needs_refresh(&self, now_unix: i64) -> bool {
        self.expires_at.saturating_sub(now_unix) <= REFRESH_MARGIN_SECS
    }
}

/// Extract a session from a `#access_token=...&refresh_token=...` fragment.
///
/// Returns `None` when either token is missing or the link reports an error.
/// Pairs the session does not need are skipped without being decoded.
#[must_use]
pub fn parse_fragment(fragment: &str, now_unix: i64) -> Option<StoredSession> {
    let decode = |raw: &str| urlencoding::decode(&raw.replace('+', " ")).ok().map(|value| value.into_owned());

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut expires_in = None;

    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = decode(raw),
            "refresh_token" => refresh_token = decode(raw),
            "expires_at" => expires_at = decode(raw).and_then(|v| v.parse::<i64>().ok()),
            "expires_in" => expires_in = decode(raw).and_then(|v| v.parse::<i64>().ok()),
            "error" | "error_code" => return None,
            _ => {}
        }
    }

    let access_token = access_token.filter(|t| !t.is_empty())?;
    let refresh_token = refresh_token.filter(|t| !t.is_empty())?;
    let expires_at = expires_at
        .or_else(|| expires_in.map(|secs| now_unix.saturating_add(secs)))
        .unwrap_or(now_unix);

    Some(StoredSession { access_token, refresh_token, expires_at })
}

/// Encode for storage.
#[must_use]
pub fn encode(session: &StoredSession) -> String {
    serde_json::to_string(session).unwrap_or_default()
}

/// Decode from storage; corrupt entries read as absent.
#[must_use]
pub fn decode(raw: &str) -> Option<StoredSession> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "hydrate")]
#[must_use]
pub fn load() -> Option<StoredSession> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    decode(&raw)
}

#[cfg(feature = "hydrate")]
pub fn save(session: &StoredSession) {
    if let Some(storage) = storage() {
        if storage.set_item(STORAGE_KEY, &encode(session)).is_err() {
            log::warn!("could not persist session tokens");
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(feature = "hydrate")]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Store tokens delivered in the URL fragment and remove them from the
/// address bar. Returns `true` when a session was adopted.
#[cfg(feature = "hydrate")]
pub fn adopt_session_from_location() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(hash) = window.location().hash() else {
        return false;
    };
    let Some(session) = parse_fragment(&hash, now_unix()) else {
        return false;
    };

    save(&session);
    if let (Ok(path), Ok(history)) = (window.location().pathname(), window.history()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
    log::debug!("adopted session from email link");
    true
}
