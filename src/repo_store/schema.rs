//! SQLite schema for the repository catalog database.

use crate::sqlite_persistence::{TableDef, VersionedSchema};

const REPOSITORIES_TABLE: TableDef = TableDef {
    name: "repositories",
    create_sql: "CREATE TABLE repositories (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        status INTEGER NOT NULL DEFAULT 0
    )",
    indices: &[("idx_repositories_name", "name")],
};

pub const REPO_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[REPOSITORIES_TABLE],
    migration: None,
}];
