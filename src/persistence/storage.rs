use super::files::{atomic_write, backup_file, ensure_data_dir, read_file};
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Key-value storage holding serialized payloads.
/// `set` overwrites the whole value in one write.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Keep a copy of the current value before it gets discarded
    fn backup(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// One `<key>.json` file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        ensure_data_dir(&self.dir)?;
        atomic_write(self.path_for(key), value)
    }

    fn backup(&self, key: &str) -> Result<()> {
        let backup_path = backup_file(self.path_for(key))?;
        tracing::info!(path = %backup_path.display(), "backed up unreadable payload");
        Ok(())
    }
}

/// Volatile storage, used by tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
