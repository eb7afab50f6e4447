// src/store/blob.rs
// Identity & blob persistence. Writes are keyed INSERT OR REPLACE, reads
// return None for anything the store no longer holds. An evicted or
// never-written id is an expected outcome, not a failure.

use futures::future::join_all;
use uuid::Uuid;

use crate::classify;
use crate::document::{DashboardEntry, DocumentRecord};
use crate::error::Result;
use crate::store::db::Database;

#[derive(Clone, Debug)]
pub struct BlobStore {
    db: Database,
}

impl BlobStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Store a payload under `id`, or under a fresh uuid when `id` is `None`.
    /// An existing record with the same id is overwritten. Returns the id
    /// actually used.
    pub async fn put(
        &self,
        id: Option<String>,
        name: String,
        mime: String,
        binary: Vec<u8>,
    ) -> Result<String> {
        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let db = self.db.clone();
        let key = id.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = db.lock();
            conn.execute(
                "INSERT OR REPLACE INTO files (id, name, mime, data, stored_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![key, name, mime, binary, chrono::Utc::now().timestamp()],
            )?;
            Ok(())
        })
        .await??;

        Ok(id)
    }

    /// Resolve a previously stored document. `None` means the id was never
    /// written here or the store has been cleared since.
    pub async fn get(&self, id: &str) -> Result<Option<DocumentRecord>> {
        let db = self.db.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || -> Result<Option<DocumentRecord>> {
            let conn = db.lock();
            let mut stmt = conn.prepare("SELECT id, name, mime, data FROM files WHERE id = ?1")?;
            let mut rows = stmt.query_map(rusqlite::params![id], |row| {
                Ok(DocumentRecord {
                    id: row.get(0)?,
                    display_name: row.get(1)?,
                    mime_hint: row.get(2)?,
                    binary: row.get(3)?,
                })
            })?;

            match rows.next() {
                Some(row) => Ok(Some(row?)),
                None => Ok(None),
            }
        })
        .await?
    }

    /// Persist a whole dashboard set under the entries' existing ids. All
    /// writes are issued at once and awaited together; one failure fails the
    /// batch from the caller's point of view.
    pub async fn put_all(&self, entries: &[DashboardEntry]) -> Result<()> {
        let puts = entries.iter().map(|entry| {
            self.put(
                Some(entry.id.clone()),
                entry.display_name.clone(),
                classify::mime_hint(&entry.display_name).to_string(),
                entry.binary.clone(),
            )
        });

        for outcome in join_all(puts).await {
            outcome?;
        }
        Ok(())
    }
}
