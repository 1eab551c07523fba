//! Persisted key-value session storage.
//!
//! The login flow writes `token` and `user`; the role resolver only reads
//! them and the auth-failure guard clears them.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::HogwordsError;

/// Key holding the opaque bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// String key-value store surviving page reloads.
pub trait SessionStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite `key`.
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(key, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store backed by a JSON object of string values on disk.
///
/// Writes go through to the file. A failed write is logged and the
/// in-memory view stays authoritative for the rest of the process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// The file must hold a JSON object. Non-string values in it are
    /// dropped, so a stored `null` reads as an absent key.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HogwordsError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                inner: MemoryStore::new(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            HogwordsError::Store(format!("failed to read {}: {e}", path.display()))
        })?;
        let entries = if content.trim().is_empty() {
            HashMap::new()
        } else {
            let object: Map<String, Value> = serde_json::from_str(&content).map_err(|e| {
                HogwordsError::Store(format!("failed to parse {}: {e}", path.display()))
            })?;
            string_entries(object, &path)
        };

        Ok(Self {
            path,
            inner: MemoryStore { entries },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let result = serde_json::to_string_pretty(&self.inner.entries)
            .map_err(HogwordsError::from)
            .and_then(|json| {
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.path, json).map_err(HogwordsError::from)
            });
        if let Err(e) = result {
            warn!("session store: failed to write {}: {e}", self.path.display());
        }
    }
}

/// Keep the string values; anything else is not something the login flow
/// writes and is dropped.
fn string_entries(object: Map<String, Value>, path: &Path) -> HashMap<String, String> {
    object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            other => {
                warn!(
                    "session store: dropping non-string {key:?} ({other}) in {}",
                    path.display()
                );
                None
            }
        })
        .collect()
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.inner.set(key, value);
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.inner.entries.contains_key(key) {
            self.inner.remove(key);
            self.persist();
        }
    }
}
