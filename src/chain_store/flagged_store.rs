//! Flagged-layout chain store.
//!
//! Every contribution, accepted or rejected, lands in one `chain_events`
//! table; a contribution qualifies for aggregation when its `is_merged`
//! flag is set.

use super::models::ChainEvent;
use super::schema::FLAGGED_VERSIONED_SCHEMAS;
use super::trait_def::ChainStore;
use crate::sqlite_persistence::{migrate_if_needed, optional_text, text_or_default};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub struct SqliteFlaggedChainStore {
    conn: Arc<Mutex<Connection>>,
}

pub(super) fn map_event(row: &Row) -> rusqlite::Result<ChainEvent> {
    // Missing or mistyped scalar fields degrade to their zero-equivalent
    // rather than failing the whole request.
    Ok(ChainEvent {
        current_word: text_or_default(row, 0)?,
        review_comment: optional_text(row, 1)?,
        merged_on: text_or_default(row, 2)?,
    })
}

impl SqliteFlaggedChainStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let mut conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open chain event database")?;

        migrate_if_needed(&mut conn, FLAGGED_VERSIONED_SCHEMAS)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM chain_events", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened chain event db (flagged layout): {} events", count);

        Ok(SqliteFlaggedChainStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a contribution. Used by the seed binary and test fixtures.
    pub fn insert_event(
        &self,
        repository_id: i64,
        event: &ChainEvent,
        is_merged: bool,
    ) -> Result<()> {
        self.conn.lock().unwrap().execute(
            "INSERT INTO chain_events (repository_id, current_word, review_comment, merged_on, is_merged)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                repository_id,
                event.current_word,
                event.review_comment,
                event.merged_on,
                is_merged as i64
            ],
        )?;
        Ok(())
    }
}

impl ChainStore<i64> for SqliteFlaggedChainStore {
    fn merged_events(&self, repository_id: &i64) -> Result<Vec<ChainEvent>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT current_word, review_comment, merged_on
             FROM chain_events
             WHERE repository_id = ?1 AND is_merged = 1",
        )?;
        let events = stmt
            .query_map(params![repository_id], map_event)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(events)
    }
}
