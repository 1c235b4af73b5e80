//! Shared on-disk locations and JSON helpers for the webmail client
//!
//! The client keeps its settings under the platform config directory
//! (~/.config/webmail/ on Linux) and its local storage area under the
//! platform data directory (~/.local/share/webmail/). Everything written is
//! JSON; these helpers own path resolution and (de)serialization so the rest
//! of the workspace never touches the filesystem directly.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Directory name used under both the config and data roots
const APP_DIR: &str = "webmail";

/// Settings directory (~/.config/webmail/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Path of a named file inside the settings directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Local storage directory (~/.local/share/webmail/)
///
/// Holds the per-profile storage area backing drafts, the client-side
/// counterpart of a browser profile.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_DIR))
}

/// Path of a named file inside the local storage directory
pub fn data_path(filename: &str) -> Option<PathBuf> {
    data_dir().map(|p| p.join(filename))
}

/// Whether a named settings file exists
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.exists())
}

/// Read and deserialize a JSON settings file
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let path = config_path(filename).context("No config directory on this platform")?;
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Serialize a value and write it as a JSON settings file
///
/// Creates the settings directory on first use.
pub fn save_json<T: Serialize>(filename: &str, value: &T) -> Result<()> {
    let dir = config_dir().context("No config directory on this platform")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(filename);
    let raw = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, raw).with_context(|| format!("Failed to write {}", path.display()))
}

/// Resolve a data-directory file path, creating the directory on first use
pub fn ensure_data_path(filename: &str) -> Result<PathBuf> {
    let dir = data_dir().context("No data directory on this platform")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir.join(filename))
}
