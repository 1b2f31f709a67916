use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring the schema (log + kv_store tables) to the latest version.
/// Returns how many migrations were applied; safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    run_pending_migrations(conn)
}
