//! JSON export of both collections, in their persisted layout.

use crate::errors::{AppError, AppResult};
use crate::storage::{StoredSavedDay, StoredVehicle};
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub exported_at: String,
    #[serde(rename = "carDatabase")]
    pub car_database: Vec<StoredVehicle>,
    #[serde(rename = "savedHours")]
    pub saved_hours: Vec<StoredSavedDay>,
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn build(vehicles: Vec<StoredVehicle>, saved: Vec<StoredSavedDay>) -> ExportDocument {
        ExportDocument {
            exported_at: Local::now().to_rfc3339(),
            car_database: vehicles,
            saved_hours: saved,
        }
    }

    /// Write `doc` as pretty JSON. An existing file is only replaced with
    /// `force`.
    pub fn write_json(path: &Path, doc: &ExportDocument, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(doc)?;
        fs::write(path, json)?;
        Ok(())
    }
}
