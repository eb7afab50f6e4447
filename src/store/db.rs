// src/store/db.rs
// Shared connection handle and schema setup. Every process that takes part
// in a hand-off (dashboard or viewer) opens the same database file.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

// Manual Debug implementation since Mutex<Connection> doesn't implement Debug
impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("conn", &"Arc<Mutex<Connection>>")
            .finish()
    }
}

impl Database {
    /// Open the conventional store location, creating `./db` on first run.
    /// Spawned viewer processes inherit the dashboard's working directory,
    /// so both ends resolve the same file.
    pub fn open_default() -> Result<Self> {
        let db_dir = PathBuf::from("./db");
        if !db_dir.exists() {
            std::fs::create_dir_all(&db_dir)?;
        }
        Self::open(db_dir.join("docbooth.db"))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        let db = Database {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.lock();

        // Keyed blob records, one row per document identity
        conn.execute(
            "CREATE TABLE IF NOT EXISTS files (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                mime TEXT NOT NULL,
                data BLOB NOT NULL,
                stored_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Navigation order, replaced wholesale at every launch
        conn.execute(
            "CREATE TABLE IF NOT EXISTS playlist (
                name TEXT NOT NULL UNIQUE,
                entry TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}
