//! App Configuration
//!
//! Defaults can be overridden by a JSON block in the host page:
//! `<script id="app-config" type="application/json">{"endpoint": "/v2/contacts"}</script>`

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app-config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Collection path, relative to the page origin
    pub endpoint: String,
    pub log_level: String,
    pub delete_prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/contacts".to_string(),
            log_level: "info".to_string(),
            delete_prompt: "Are you sure you want to delete this contact?".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the page's config block, falling back to defaults when it is
    /// absent or unreadable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Absolute collection URL; the HTTP client needs one even for same-origin calls.
    pub fn endpoint_url(&self, origin: &str) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            return self.endpoint.clone();
        }
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

/// `window.location.origin`, empty outside a browser
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
