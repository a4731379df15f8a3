//! Shared SQLite schema versioning infrastructure.
//!
//! Each store declares its tables as a sequence of [`VersionedSchema`]s. A
//! brand new database gets the latest schema created directly; an existing
//! one is walked forward through the migration functions. The effective
//! version is kept in `PRAGMA user_version`, offset by [`BASE_DB_VERSION`]
//! so that a plain unversioned database (user_version 0) is recognizable.

use anyhow::Result;
use rusqlite::{params, Connection, Row};
use tracing::info;

pub const BASE_DB_VERSION: usize = 40000;

/// Read a TEXT column, degrading NULL or a mistyped value to `""`.
///
/// The backing databases are written by external systems; a scalar field
/// that is missing or carries the wrong storage class must not fail the
/// whole request.
pub fn text_or_default(row: &Row, idx: usize) -> rusqlite::Result<String> {
    match row.get::<_, Option<String>>(idx) {
        Err(rusqlite::Error::InvalidColumnType(..)) => Ok(String::new()),
        other => Ok(other?.unwrap_or_default()),
    }
}

/// Read an optional TEXT column, degrading a mistyped value to `None`.
pub fn optional_text(row: &Row, idx: usize) -> rusqlite::Result<Option<String>> {
    match row.get(idx) {
        Err(rusqlite::Error::InvalidColumnType(..)) => Ok(None),
        other => other,
    }
}

/// Read an INTEGER column, degrading NULL or a mistyped value to `0`.
pub fn integer_or_default(row: &Row, idx: usize) -> rusqlite::Result<i64> {
    match row.get::<_, Option<i64>>(idx) {
        Err(rusqlite::Error::InvalidColumnType(..)) => Ok(0),
        other => Ok(other?.unwrap_or_default()),
    }
}

pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
    /// (index name, indexed column)
    pub indices: &'static [(&'static str, &'static str)],
}

impl TableDef {
    pub fn create(&self, conn: &Connection) -> Result<()> {
        conn.execute(self.create_sql, params![])?;
        for (index_name, column) in self.indices {
            conn.execute(
                &format!("CREATE INDEX {} ON {}({});", index_name, self.name, column),
                params![],
            )?;
        }
        Ok(())
    }
}

pub struct VersionedSchema {
    pub version: usize,
    pub tables: &'static [TableDef],
    pub migration: Option<fn(&Connection) -> Result<()>>,
}

impl VersionedSchema {
    pub fn create(&self, conn: &Connection) -> Result<()> {
        conn.execute("PRAGMA foreign_keys = ON;", params![])?;
        for table in self.tables {
            table.create(conn)?;
        }
        conn.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + self.version),
            [],
        )?;
        Ok(())
    }
}

/// Bring `conn` up to the latest schema in `schemas`.
///
/// `schemas` must be ordered by version, starting at 0.
pub fn migrate_if_needed(conn: &mut Connection, schemas: &[VersionedSchema]) -> Result<()> {
    let latest = match schemas.last() {
        Some(schema) => schema,
        None => return Ok(()),
    };

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!("Creating db schema at version {}", latest.version);
        latest.create(conn)?;
        return Ok(());
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    // Databases created before versioning carry user_version 0; treat as v0.
    let mut current_version = if db_version < BASE_DB_VERSION as i64 {
        0
    } else {
        (db_version - BASE_DB_VERSION as i64) as usize
    };

    if current_version >= latest.version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in schemas.iter().skip(current_version + 1) {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
            current_version = schema.version;
        }
    }
    tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
    tx.commit()?;
    Ok(())
}
