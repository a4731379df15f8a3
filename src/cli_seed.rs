//! Seeds the repository catalog and chain event databases with demo data.
//!
//! Intended for local development and manual testing; the serving binary
//! never writes to either database.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

mod chain_store;
mod repo_store;
mod sqlite_persistence;

use chain_store::{ChainEvent, ChainLayout, SqliteFlaggedChainStore, SqliteMergedChainStore};
use repo_store::{Repository, SqliteRepoStore};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory where repos.db and chain.db will be created.
    #[clap(long)]
    pub db_dir: PathBuf,

    /// Physical layout of the chain event store.
    #[clap(long, default_value = "flagged")]
    pub chain_layout: ChainLayout,
}

struct SeedEvent {
    repository_id: i64,
    event: ChainEvent,
    is_merged: bool,
}

fn demo_repositories() -> Vec<Repository<i64>> {
    vec![
        Repository {
            id: 101,
            name: "team-a".to_string(),
            status: 1,
        },
        Repository {
            id: 102,
            name: "team-b".to_string(),
            status: 1,
        },
        // No chain activity yet; summaries degrade to zero/empty fields.
        Repository {
            id: 103,
            name: "team-c".to_string(),
            status: 0,
        },
    ]
}

fn demo_events() -> Vec<SeedEvent> {
    vec![
        SeedEvent {
            repository_id: 101,
            event: ChainEvent::new("abc", None, "2025-05-01T10:00:00Z"),
            is_merged: true,
        },
        SeedEvent {
            repository_id: 101,
            event: ChainEvent::new("def", Some("nice chain"), "2025-05-02T10:00:00Z"),
            is_merged: true,
        },
        SeedEvent {
            repository_id: 101,
            event: ChainEvent::new("fox", Some("breaks the chain"), "2025-05-03T10:00:00Z"),
            is_merged: false,
        },
        SeedEvent {
            repository_id: 102,
            event: ChainEvent::new("eval", None, "2025-06-10T09:00:00Z"),
            is_merged: true,
        },
        SeedEvent {
            repository_id: 102,
            event: ChainEvent::new("list", Some("keep going"), "2025-06-11T09:00:00Z"),
            is_merged: true,
        },
    ]
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    if !cli_args.db_dir.is_dir() {
        bail!("db_dir is not a directory: {:?}", cli_args.db_dir);
    }

    let repo_store = SqliteRepoStore::new(cli_args.db_dir.join("repos.db"))?;
    let repositories = demo_repositories();
    for repository in &repositories {
        repo_store.insert_repository(repository)?;
    }
    println!("Seeded {} repositories", repositories.len());

    let events = demo_events();
    let chain_db = cli_args.db_dir.join("chain.db");
    let mut inserted = 0;
    match cli_args.chain_layout {
        ChainLayout::Flagged => {
            let store = SqliteFlaggedChainStore::new(chain_db)?;
            for seed in &events {
                store.insert_event(seed.repository_id, &seed.event, seed.is_merged)?;
                inserted += 1;
            }
        }
        ChainLayout::Merged => {
            // The merged layout only ever holds accepted contributions.
            let store = SqliteMergedChainStore::new(chain_db)?;
            for seed in events.iter().filter(|s| s.is_merged) {
                store.insert_event(seed.repository_id, &seed.event)?;
                inserted += 1;
            }
        }
    }
    println!(
        "Seeded {} chain events ({} layout)",
        inserted, cli_args.chain_layout
    );

    Ok(())
}
