use super::StorageBackend;
use crate::db::initialize::init_db;
use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Durable backend: one row per key in the `kv_store` table.
pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }
}

impl StorageBackend for SqliteBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        kv::get_value(&self.pool.conn, key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        kv::put_value(&self.pool.conn, key, value)
    }
}
