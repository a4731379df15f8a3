//! Test data fixtures
//!
//! Creates temporary SQLite databases seeded with a small known catalog
//! of repositories and chain events. Both chain store layouts are seeded
//! with the same qualifying events so tests can assert identical behavior.

use anyhow::Result;
use pytori_summary_server::chain_store::{
    ChainEvent, ChainLayout, ChainStore, SqliteFlaggedChainStore, SqliteMergedChainStore,
};
use pytori_summary_server::repo_store::{Repository, SqliteRepoStore};
use std::sync::Arc;
use tempfile::TempDir;

/// Creates a temp dir holding seeded repos.db and chain.db files and
/// returns opened stores over them.
pub(crate) fn create_seeded_stores(
    layout: ChainLayout,
) -> Result<(TempDir, Arc<SqliteRepoStore>, Arc<dyn ChainStore<i64>>)> {
    let temp_dir = TempDir::new()?;

    let repo_store = SqliteRepoStore::new(temp_dir.path().join("repos.db"))?;
    repo_store.insert_repository(&Repository {
        id: 101,
        name: "team-a".to_string(),
        status: 1,
    })?;
    repo_store.insert_repository(&Repository {
        id: 102,
        name: "team-b".to_string(),
        status: 1,
    })?;
    repo_store.insert_repository(&Repository {
        id: 103,
        name: "team-c".to_string(),
        status: 0,
    })?;

    // (repository_id, event, merged)
    let events = [
        (101, ChainEvent::new("abc", None, "2025-05-01T10:00:00Z"), true),
        (
            101,
            ChainEvent::new("def", Some("nice chain"), "2025-05-02T10:00:00Z"),
            true,
        ),
        (
            101,
            ChainEvent::new("fox", Some("breaks the chain"), "2025-05-03T10:00:00Z"),
            false,
        ),
        (102, ChainEvent::new("eval", None, "2025-06-10T09:00:00Z"), true),
        (
            102,
            ChainEvent::new("list", Some("keep going"), "2025-06-11T09:00:00Z"),
            true,
        ),
    ];

    let chain_db = temp_dir.path().join("chain.db");
    let chain_store: Arc<dyn ChainStore<i64>> = match layout {
        ChainLayout::Flagged => {
            let store = SqliteFlaggedChainStore::new(chain_db)?;
            for (repository_id, event, merged) in &events {
                store.insert_event(*repository_id, event, *merged)?;
            }
            Arc::new(store)
        }
        ChainLayout::Merged => {
            // The merged layout only ever holds accepted contributions.
            let store = SqliteMergedChainStore::new(chain_db)?;
            for (repository_id, event, _) in events.iter().filter(|(_, _, merged)| *merged) {
                store.insert_event(*repository_id, event)?;
            }
            Arc::new(store)
        }
    };

    Ok((temp_dir, Arc::new(repo_store), chain_store))
}
