//! Key-value persistence
//!
//! The game only ever stores small named integers. `KeyValueStore` is the
//! narrow port the rest of the crate talks to:
//! - `MemoryStore` for tests and throwaway sessions
//! - `FileStore` writes a JSON object through to disk on every `set`

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Named integer storage
pub trait KeyValueStore {
    /// Stored value, or 0 when the key was never written
    fn get(&self, key: &str) -> i64;
    fn set(&mut self, key: &str, value: i64);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> i64 {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: i64) {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }
}

/// JSON file store, one object of `key -> integer`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl FileStore {
    /// Open a store, starting empty if the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(json) => {
                let values: BTreeMap<String, i64> = serde_json::from_str(&json)?;
                log::info!("Loaded {} stored values from {}", values.len(), path.display());
                values
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        match self.flush() {
            Ok(()) => log::debug!("Stored {} = {}", key, value),
            Err(e) => log::warn!("Could not write {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sushi_neko_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("highScore"), 0);
        store.set("highScore", 12);
        assert_eq!(store.get("highScore"), 12);
        assert_eq!(store.get("other"), 0);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let path = temp_path("store_persist");
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("highScore"), 0);
        store.set("highScore", 75);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("highScore"), 75);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let path = temp_path("store_garbage");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_store_through_mut_ref() {
        fn bump<S: KeyValueStore>(mut store: S) {
            let next = store.get("k") + 1;
            store.set("k", next);
        }

        let mut store = MemoryStore::new();
        bump(&mut store);
        bump(&mut store);
        assert_eq!(store.get("k"), 2);
    }
}
