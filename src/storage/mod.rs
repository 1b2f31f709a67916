//! Persistence store: whole-collection JSON documents kept under string keys
//! in a pluggable key-value backend.
//!
//! `load` never fails. A missing key, a backend read error or an unparsable
//! document all degrade to an empty collection; individual malformed
//! elements are dropped. What happened is described by the returned
//! `LoadReport`. `save` always rewrites the full document.

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use schema::{Document, StoredHourEntry, StoredSavedDay, StoredVehicle};
pub use sqlite::SqliteBackend;

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

/// Key of the vehicle collection.
pub const CAR_DATABASE_KEY: &str = "carDatabase";
/// Key of the saved daily totals collection.
pub const SAVED_HOURS_KEY: &str = "savedHours";

/// Minimal key-value contract, modelled after browser local storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Outcome of decoding one stored collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub key: String,
    pub present: bool,
    /// Set when the whole document was discarded.
    pub corrupt: Option<String>,
    pub kept: usize,
    pub dropped: usize,
    /// Elements folded into an earlier one with the same identifier.
    pub merged: usize,
}

impl LoadReport {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Default::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.corrupt.is_none() && self.dropped == 0 && self.merged == 0
    }

    /// One-line description, used by warnings and the operational log.
    pub fn describe(&self) -> String {
        match &self.corrupt {
            Some(reason) => format!("'{}' discarded: {}", self.key, reason),
            None if self.merged > 0 => format!(
                "'{}': kept {}, dropped {} malformed item(s), merged {} duplicate(s)",
                self.key, self.kept, self.dropped, self.merged
            ),
            None => format!(
                "'{}': kept {}, dropped {} malformed item(s)",
                self.key, self.kept, self.dropped
            ),
        }
    }
}

pub struct PersistenceStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Load a collection, empty on any failure.
    pub fn load<T: Document>(&self, key: &str) -> Vec<T> {
        self.load_with_report(key).0
    }

    pub fn load_with_report<T: Document>(&self, key: &str) -> (Vec<T>, LoadReport) {
        let mut report = LoadReport::new(key);

        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Vec::new(), report),
            Err(e) => {
                report.corrupt = Some(format!("read failed: {e}"));
                return (Vec::new(), report);
            }
        };
        report.present = true;

        match decode::<T>(key, &raw, &mut report) {
            Ok(items) => (items, report),
            Err(e) => {
                report.corrupt = Some(e.to_string());
                report.kept = 0;
                (Vec::new(), report)
            }
        }
    }

    /// Overwrite the whole collection stored under `key`.
    pub fn save<T: Serialize>(&mut self, key: &str, items: &[T]) -> AppResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(key, &json)
    }
}

fn decode<T: Document>(key: &str, raw: &str, report: &mut LoadReport) -> AppResult<Vec<T>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|_| AppError::StorageCorrupt(key.to_string()))?;

    let Value::Array(items) = value else {
        return Err(AppError::StorageCorrupt(key.to_string()));
    };

    let mut out = Vec::with_capacity(items.len());
    for item in &items {
        match T::from_json(item, report) {
            Some(doc) => out.push(doc),
            None => report.dropped += 1,
        }
    }
    report.kept = out.len();
    Ok(out)
}
