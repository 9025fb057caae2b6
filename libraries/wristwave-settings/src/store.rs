//! Key-value settings storage
//!
//! Settings are stored as key-value pairs with JSON-serialized values for
//! flexibility. The [`SettingsStore`] trait hides the backing medium; the
//! in-memory store serves tests and ephemeral sessions, the JSON file store
//! persists across restarts.

use crate::error::{Result, SettingsError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backing storage for settings
pub trait SettingsStore {
    /// Get a setting value
    ///
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Set a setting value, replacing any previous one
    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()>;
}

/// Ephemeral in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, serde_json::Value>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON file backed store
///
/// The whole key-value map lives in one JSON object on disk. Every `set`
/// writes through, so a crash loses at most the write in flight.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, serde_json::Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty one when the file does
    /// not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| SettingsError::Serialization(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: serde_json::Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
