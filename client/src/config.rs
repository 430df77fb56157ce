//! Public client configuration: where the hosted identity provider lives.
//!
//! Values come from build-time environment variables and may be overridden at
//! runtime through `window.BOARD_CONFIG`, which the host server injects into
//! the SSR shell. Everything here is public; the anon key is designed to ship
//! to browsers. Never put service-role secrets in this struct.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the global the shell assigns the runtime config to.
pub const RUNTIME_CONFIG_GLOBAL: &str = "BOARD_CONFIG";
/// Provider call budget when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Page the password-reset email links back to.
pub const UPDATE_PASSWORD_PATH: &str = "/update-password";
/// Page the sign-up confirmation email links back to.
pub const FEED_PATH: &str = "/app";

/// Configuration shared by the server shell and the browser bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the hosted auth service, e.g. `https://xyz.supabase.co`.
    pub auth_url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
    /// Public origin of this site; used to build email redirect links.
    #[serde(default)]
    pub site_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_url: String::new(),
            anon_key: String::new(),
            site_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self {
            auth_url: option_env!("BOARD_AUTH_URL").unwrap_or_default().to_owned(),
            anon_key: option_env!("BOARD_AUTH_ANON_KEY").unwrap_or_default().to_owned(),
            site_url: option_env!("BOARD_SITE_URL").unwrap_or_default().to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// `true` once both the provider URL and key are known.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.auth_url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Absolute URL the password-reset email should send the visitor to.
    #[must_use]
    pub fn reset_redirect(&self) -> Option<String> {
        self.site_link(UPDATE_PASSWORD_PATH)
    }

    /// Absolute URL the sign-up confirmation email should send the visitor to.
    #[must_use]
    pub fn confirm_redirect(&self) -> Option<String> {
        self.site_link(FEED_PATH)
    }

    fn site_link(&self, path: &str) -> Option<String> {
        let site = self.site_url.trim().trim_end_matches('/');
        if site.is_empty() {
            return None;
        }
        Some(format!("{site}{path}"))
    }

    /// Inline script assigning this config to `window.BOARD_CONFIG`.
    ///
    /// `</` is escaped so a value can never close the surrounding `<script>`.
    #[must_use]
    pub fn to_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned());
        format!("window.{RUNTIME_CONFIG_GLOBAL} = {};", json.replace("</", "<\\/"))
    }
}

#[derive(Default)]
struct RuntimeConfig {
    auth_url: Option<String>,
    anon_key: Option<String>,
    site_url: Option<String>,
    timeout_secs: Option<u64>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.auth_url {
        config.auth_url = value;
    }
    if let Some(value) = runtime.anon_key {
        config.anon_key = value;
    }
    if let Some(value) = runtime.site_url {
        config.site_url = value;
    }
    if let Some(value) = runtime.timeout_secs {
        config.timeout_secs = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let timeout_secs = Reflect::get(&object, &JsValue::from_str("timeout_secs"))
        .ok()
        .and_then(|value| value.as_f64())
        .filter(|secs| *secs >= 1.0)
        .map(|secs| secs as u64);

    Some(RuntimeConfig {
        auth_url: read_runtime_value(&object, "auth_url"),
        anon_key: read_runtime_value(&object, "anon_key"),
        site_url: read_runtime_value(&object, "site_url"),
        timeout_secs,
    })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(feature = "hydrate")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
