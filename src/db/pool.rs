//! Single SQLite connection shared by one CLI invocation.

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

/// Wait this long for a lock held by another rmotohours process.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Private in-memory database, gone when the pool is dropped.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}
