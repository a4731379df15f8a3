//! SQLite schemas for the two chain event layouts.
//!
//! Each layout owns its database file, so each gets its own versioned
//! schema sequence.

use crate::sqlite_persistence::{TableDef, VersionedSchema};

/// Flagged layout: one table for every contribution, accepted or not.
const CHAIN_EVENTS_TABLE: TableDef = TableDef {
    name: "chain_events",
    create_sql: "CREATE TABLE chain_events (
        id INTEGER PRIMARY KEY,
        repository_id INTEGER NOT NULL,
        current_word TEXT NOT NULL,
        review_comment TEXT,
        merged_on TEXT NOT NULL,
        is_merged INTEGER NOT NULL DEFAULT 0
    )",
    indices: &[("idx_chain_events_repository", "repository_id")],
};

pub const FLAGGED_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[CHAIN_EVENTS_TABLE],
    migration: None,
}];

/// Merged layout: only accepted contributions are ever written here.
const MERGED_EVENTS_TABLE: TableDef = TableDef {
    name: "merged_events",
    create_sql: "CREATE TABLE merged_events (
        id INTEGER PRIMARY KEY,
        repository_id INTEGER NOT NULL,
        current_word TEXT NOT NULL,
        review_comment TEXT,
        merged_on TEXT NOT NULL
    )",
    indices: &[("idx_merged_events_repository", "repository_id")],
};

pub const MERGED_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[MERGED_EVENTS_TABLE],
    migration: None,
}];
