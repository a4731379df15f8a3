//! Merged-layout chain store.
//!
//! Only accepted contributions are ever written to the `merged_events`
//! table, so every row qualifies by construction and no flag filter is
//! needed on the read path.

use super::flagged_store::map_event;
use super::models::ChainEvent;
use super::schema::MERGED_VERSIONED_SCHEMAS;
use super::trait_def::ChainStore;
use crate::sqlite_persistence::migrate_if_needed;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct SqliteMergedChainStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMergedChainStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let mut conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open chain event database")?;

        migrate_if_needed(&mut conn, MERGED_VERSIONED_SCHEMAS)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM merged_events", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened chain event db (merged layout): {} events", count);

        Ok(SqliteMergedChainStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert an accepted contribution. Used by the seed binary and test
    /// fixtures.
    pub fn insert_event(&self, repository_id: i64, event: &ChainEvent) -> Result<()> {
        self.conn.lock().unwrap().execute(
            "INSERT INTO merged_events (repository_id, current_word, review_comment, merged_on)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                repository_id,
                event.current_word,
                event.review_comment,
                event.merged_on
            ],
        )?;
        Ok(())
    }
}

impl ChainStore<i64> for SqliteMergedChainStore {
    fn merged_events(&self, repository_id: &i64) -> Result<Vec<ChainEvent>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT current_word, review_comment, merged_on
             FROM merged_events
             WHERE repository_id = ?1",
        )?;
        let events = stmt
            .query_map(params![repository_id], map_event)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(events)
    }
}
