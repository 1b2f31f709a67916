use super::StorageBackend;
use crate::errors::AppResult;
use std::collections::HashMap;

/// Volatile backend, used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a raw document, e.g. to simulate corrupt data.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut backend = Self::default();
        backend.entries.insert(key.to_string(), value.to_string());
        backend
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
