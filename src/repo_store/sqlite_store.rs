//! SQLite-backed repository catalog store.

use super::models::Repository;
use super::schema::REPO_VERSIONED_SCHEMAS;
use super::trait_def::RepoStore;
use crate::sqlite_persistence::{integer_or_default, migrate_if_needed, text_or_default};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQLite-backed catalog of repositories, keyed by numeric id.
#[derive(Clone)]
pub struct SqliteRepoStore {
    conn: Arc<Mutex<Connection>>,
}

fn map_repository(row: &Row) -> rusqlite::Result<Repository<i64>> {
    // Missing or mistyped scalar fields degrade to their zero-equivalent
    // rather than failing the whole request.
    Ok(Repository {
        id: row.get(0)?,
        name: text_or_default(row, 1)?,
        status: integer_or_default(row, 2)?,
    })
}

impl SqliteRepoStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let mut conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open repository catalog database")?;

        migrate_if_needed(&mut conn, REPO_VERSIONED_SCHEMAS)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM repositories", [], |r| r.get(0))
            .unwrap_or(0);
        info!("Opened repository catalog: {} repositories", count);

        Ok(SqliteRepoStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert a repository record. Used by the seed binary and test fixtures;
    /// the serving path never writes.
    pub fn insert_repository(&self, repository: &Repository<i64>) -> Result<()> {
        self.conn.lock().unwrap().execute(
            "INSERT INTO repositories (id, name, status) VALUES (?1, ?2, ?3)",
            params![repository.id, repository.name, repository.status],
        )?;
        Ok(())
    }

    pub fn repository_count(&self) -> usize {
        self.conn
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM repositories", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }
}

impl RepoStore<i64> for SqliteRepoStore {
    fn get(&self, id: &i64) -> Result<Option<Repository<i64>>> {
        let conn = self.conn.lock().unwrap();
        let repository = conn
            .query_row(
                "SELECT id, name, status FROM repositories WHERE id = ?1",
                params![id],
                map_repository,
            )
            .optional()?;
        Ok(repository)
    }

    fn list_all(&self) -> Result<Vec<Repository<i64>>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name, status FROM repositories")?;
        let repositories = stmt
            .query_map([], map_repository)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(repositories)
    }
}
