//! SQLite connection wrapper (lightweight for CLI usage).
//! One handle per process invocation, used sequentially.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(Path::new(path))?;
        // cascade deletes project -> task -> frame rely on this
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }

    /// Open the database and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        crate::db::migrate::run_pending_migrations(&pool.conn)?;
        Ok(pool)
    }
}
