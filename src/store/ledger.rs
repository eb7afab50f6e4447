// src/store/ledger.rs
// The viewing order, stored as one JSON row. There is deliberately no
// append/remove surface: whoever launches a session owns the whole order.

use crate::error::Result;
use crate::store::db::Database;

const PLAYLIST_KEY: &str = "main";

#[derive(Clone, Debug)]
pub struct OrderLedger {
    db: Database,
}

impl OrderLedger {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Replace the navigation order. Last writer wins across all processes
    /// sharing the store.
    pub async fn set_order(&self, ids: Vec<String>) -> Result<()> {
        let db = self.db.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let payload = serde_json::to_string(&ids)?;
            let conn = db.lock();
            conn.execute(
                "INSERT OR REPLACE INTO playlist (name, entry, updated_at)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![PLAYLIST_KEY, payload, chrono::Utc::now().timestamp()],
            )?;
            Ok(())
        })
        .await?
    }

    /// The most recently set order, or empty if no session was ever launched
    /// against this store.
    pub async fn get_order(&self) -> Result<Vec<String>> {
        let db = self.db.clone();

        tokio::task::spawn_blocking(move || -> Result<Vec<String>> {
            let conn = db.lock();
            let mut stmt = conn.prepare("SELECT entry FROM playlist WHERE name = ?1")?;
            let mut rows =
                stmt.query_map(rusqlite::params![PLAYLIST_KEY], |row| row.get::<_, String>(0))?;

            match rows.next() {
                Some(row) => Ok(serde_json::from_str(&row?)?),
                None => Ok(Vec::new()),
            }
        })
        .await?
    }
}
