//! Unified application error type.
//! All modules (db, storage, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database / storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored document could not be decoded. Never surfaced by `load`,
    /// which degrades to an empty collection instead.
    #[error("Stored data under '{0}' is corrupt")]
    StorageCorrupt(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Identifier already in use: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
