// Preference persistence: typed key/value store over a durable medium

use log::warn;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no usable preference directory")]
    NoDataDir,
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable key-value medium: string keys, string payloads. Both sides
/// are fallible; callers decide how to degrade.
pub trait StorageMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// SQLite-backed medium in the platform data directory.
pub struct SqliteMedium {
    conn: Connection,
}

impl SqliteMedium {
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_local_dir()
            .ok_or(StoreError::NoDataDir)?
            .join("px-rem-converter");
        std::fs::create_dir_all(&dir)?;
        Self::open(dir.join("preferences.db"))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl StorageMedium for SqliteMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self
            .conn
            .query_row("SELECT value FROM preferences WHERE key = ?1", [key], |row| {
                row.get(0)
            }) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }
}

/// Volatile medium. Used as the fallback when the database cannot be
/// opened, and as the backing store in tests. Clones share the same
/// backing map, so a fresh store over a clone behaves like a reload.
#[derive(Default, Clone)]
pub struct MemoryMedium {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().ok().and_then(|map| map.get(key).cloned()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }
}

/// Typed accessor over a [`StorageMedium`] with JSON payloads.
///
/// Reads fall back to the caller's default on any storage or parse
/// failure. Writes update the last-known value even when the medium
/// rejects them, so the session keeps read-your-writes while
/// persistence stays best-effort.
pub struct PrefStore {
    medium: Box<dyn StorageMedium>,
    cache: HashMap<String, Value>,
}

impl PrefStore {
    pub fn new(medium: Box<dyn StorageMedium>) -> Self {
        Self {
            medium,
            cache: HashMap::new(),
        }
    }

    pub fn read<T: DeserializeOwned>(&mut self, key: &str, default: T) -> T {
        match self.current(key) {
            Some(value) => serde_json::from_value(value).unwrap_or(default),
            None => default,
        }
    }

    pub fn write<T: Serialize>(&mut self, key: &str, value: T) {
        let value = match serde_json::to_value(&value) {
            Ok(value) => value,
            Err(err) => {
                warn!("unserializable preference {key:?}: {err}");
                return;
            }
        };
        let payload = value.to_string();
        self.cache.insert(key.to_owned(), value);
        if let Err(err) = self.medium.set(key, &payload) {
            warn!("preference write failed for {key:?}: {err}");
        }
    }

    /// Read-modify-write against the last-known value.
    #[allow(dead_code)]
    pub fn update<T, F>(&mut self, key: &str, default: T, f: F)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let current = self.read(key, default);
        self.write(key, f(current));
    }

    // Last-known value if present, otherwise the parsed payload from
    // the medium.
    fn current(&mut self, key: &str) -> Option<Value> {
        if let Some(value) = self.cache.get(key) {
            return Some(value.clone());
        }

        let payload = match self.medium.get(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                warn!("preference read failed for {key:?}: {err}");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&payload) {
            Ok(value) => {
                self.cache.insert(key.to_owned(), value.clone());
                Some(value)
            }
            Err(err) => {
                warn!("discarding corrupt preference {key:?}: {err}");
                None
            }
        }
    }
}
