//! Settings storage for the toolkit.
//!
//! Settings live in a single JSON document, keyed by dotted names. The
//! store is a pure pass-through: reads re-load the document on every call
//! and writes persist the full document immediately. Nothing is cached, so
//! a detection pass always observes the effects of any prior pass.

use std::fs;
use std::path::PathBuf;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::platform;

/// Setting key holding the user-visible tool path override.
pub const LOCATION_KEY: &str = "cli.location";

/// Key prefix for boolean feature flags.
pub const TOGGLE_PREFIX: &str = "toggle.";

/// Directory under the platform config dir holding the settings document.
const SETTINGS_DIR: &str = "faas-toolkit";

/// File name of the settings document.
const SETTINGS_FILE: &str = "settings.json";

/// Read/write access to the active configuration profile.
///
/// `read` has no side effects and returns `None` for unset keys. `write`
/// propagates store rejection to the caller and never retries silently.
pub trait SettingsStore {
    /// Returns the stored value for `key`, or `None` if unset.
    fn read(&self, key: &str) -> Option<Value>;

    /// Persists `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingsWrite`] if the underlying store rejects
    /// the write.
    fn write(&self, key: &str, value: Value) -> Result<()>;
}

/// Settings store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Creates a store backed by the given file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at the platform-default location,
    /// `<config dir>/faas-toolkit/settings.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn default_location() -> Result<Self> {
        let path = platform::config_dir()?
            .join(SETTINGS_DIR)
            .join(SETTINGS_FILE);
        Ok(Self::new(path))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> Map<String, Value> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!("settings document unreadable ({e}), treating as empty");
                return Map::new();
            }
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                debug!("settings document is not a JSON object, treating as empty");
                Map::new()
            }
        }
    }
}

impl SettingsStore for FileSettings {
    fn read(&self, key: &str) -> Option<Value> {
        self.load().get(key).cloned()
    }

    fn write(&self, key: &str, value: Value) -> Result<()> {
        let mut document = self.load();
        document.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::SettingsWrite {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        }

        let text = serde_json::to_string_pretty(&Value::Object(document)).map_err(|e| {
            Error::SettingsWrite {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&self.path, text).map_err(|e| Error::SettingsWrite {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Typed accessors for the tool-location setting.
pub struct ToolSettings<'a> {
    store: &'a dyn SettingsStore,
}

impl<'a> ToolSettings<'a> {
    #[must_use]
    pub fn new(store: &'a dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Returns the stored tool path, or `None` if unset or not a string.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self.store.read(LOCATION_KEY) {
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                debug!("ignoring non-string {LOCATION_KEY} value: {other}");
                None
            }
            None => None,
        }
    }

    /// Persists a tool path override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingsWrite`] if the store rejects the write.
    pub fn set_location(&self, path: &str) -> Result<()> {
        self.store.write(LOCATION_KEY, Value::String(path.to_string()))
    }
}
