//! Versioned schema migrations.
//!
//! The applied version lives in `PRAGMA user_version`; each migration runs
//! in its own transaction and bumps the version on success.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, params};

pub struct Migration {
    pub version: i32,
    pub name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_kv_store",
        sql: r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
];

/// Latest schema version known to this build.
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

pub fn schema_version(conn: &Connection) -> AppResult<i32> {
    let v = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static Migration>> {
    let current = schema_version(conn)?;
    Ok(MIGRATIONS.iter().filter(|m| m.version > current).collect())
}

/// Apply every pending migration. Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = schema_version(conn)?;
    if current > latest_version() {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than this build (v{})",
            current,
            latest_version()
        )));
    }

    let pending = pending_migrations(conn)?;
    for m in &pending {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{} failed: {}", m.name, e)))?;
        tx.pragma_update(None, "user_version", m.version)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
            params![
                Local::now().to_rfc3339(),
                "migration_applied",
                m.name,
                format!("schema upgraded to v{}", m.version)
            ],
        )?;
        tx.commit()?;
        success(format!("Migration '{}' applied (v{}).", m.name, m.version));
    }

    Ok(pending.len())
}
