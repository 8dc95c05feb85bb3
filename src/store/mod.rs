//! User preference persistence.
//!
//! Application state is explicit and flows through parameters; the only
//! thing persisted between runs is user preferences, behind a small
//! key-value port. Analytics results are never written anywhere — they are
//! recomputed on demand.

use crate::errors::SavannahError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFERENCES_KEY: &str = "preferences";

/// Key-value persistence port. Implementations own durability; callers own
/// what goes in.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SavannahError>;
    fn remove(&mut self, key: &str) -> Result<(), SavannahError>;
}

/// Volatile store for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SavannahError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SavannahError> {
        self.values.remove(key);
        Ok(())
    }
}

/// JSON-file backed store. The whole map is rewritten on every mutation;
/// preference payloads are tiny.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing values when the file is
    /// present and readable. An unreadable or malformed file starts empty
    /// rather than failing: preferences are never load-bearing.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// The default store location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("savannah").join("preferences.json"))
    }

    fn persist(&self) -> Result<(), SavannahError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SavannahError::io(parent, e))?;
        }
        let contents = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SavannahError::config(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| SavannahError::io(&self.path, e))
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SavannahError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SavannahError> {
        self.values.remove(key);
        self.persist()
    }
}

/// User preferences carried between runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub default_format: Option<String>,
    pub default_region: Option<String>,
    pub preferred_sources: Vec<String>,
}

impl Preferences {
    /// Load from the store; a missing or malformed entry reads as defaults.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        store
            .get(PREFERENCES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<(), SavannahError> {
        let raw = serde_json::to_string(self).map_err(|e| SavannahError::config(e.to_string()))?;
        store.set(PREFERENCES_KEY, &raw)
    }
}
