//! Queries on the `kv_store` table.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

/// Insert or fully replace the value stored under `key`.
pub fn put_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}

/// (key, size in bytes, updated_at) for every stored key.
pub fn list_keys(conn: &Connection) -> AppResult<Vec<(String, i64, String)>> {
    let mut stmt =
        conn.prepare("SELECT key, LENGTH(value), updated_at FROM kv_store ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
