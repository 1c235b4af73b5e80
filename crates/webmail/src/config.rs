//! Configuration loading for the backend connection
//!
//! Supports loading the client configuration from (in order of priority):
//! 1. JSON file (~/.config/webmail/client.json)
//! 2. Runtime environment variables
//! 3. Built-in defaults (local development backend)

use serde::{Deserialize, Serialize};

/// Config filename in the webmail config directory
const CLIENT_FILE: &str = "client.json";

/// Default backend base URL for local development
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for the backend API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend serving `/emails*`
    pub base_url: String,
    /// CSRF token echoed on mutating requests, when the backend requires one
    #[serde(default)]
    pub csrf_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            csrf_token: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration using the following priority:
    /// 1. JSON file (~/.config/webmail/client.json)
    /// 2. WEBMAIL_BASE_URL / WEBMAIL_CSRF_TOKEN environment variables
    /// 3. Defaults
    pub fn load() -> Self {
        if config::config_exists(CLIENT_FILE) {
            match config::load_json(CLIENT_FILE) {
                Ok(loaded) => return loaded,
                Err(e) => log::warn!("Ignoring unreadable {}: {}", CLIENT_FILE, e),
            }
        }

        Self::from_env().unwrap_or_default()
    }

    /// Build configuration from environment variables, if set
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("WEBMAIL_BASE_URL").ok()?;
        let csrf_token = std::env::var("WEBMAIL_CSRF_TOKEN").ok();
        Some(Self {
            base_url,
            csrf_token,
        })
    }

    /// Persist this configuration to ~/.config/webmail/client.json
    pub fn save(&self) -> anyhow::Result<()> {
        config::save_json(CLIENT_FILE, self)
    }
}
