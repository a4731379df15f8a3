//! Word-chain event storage.
//!
//! Two data layouts for "qualifying events" exist in the wild: a single
//! table carrying an `is_merged` flag, and a dedicated table holding only
//! accepted contributions. Both live behind the same [`ChainStore`] trait;
//! the layout is chosen once at composition time and nothing downstream
//! branches on it.

mod flagged_store;
mod merged_store;
mod models;
mod schema;
mod trait_def;

pub use flagged_store::SqliteFlaggedChainStore;
pub use merged_store::SqliteMergedChainStore;
pub use models::ChainEvent;
pub use trait_def::ChainStore;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Which physical layout backs the event store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ChainLayout {
    /// Single `chain_events` table; qualifying events carry `is_merged = 1`.
    #[default]
    Flagged,
    /// Dedicated `merged_events` table; every row qualifies by construction.
    Merged,
}

impl std::fmt::Display for ChainLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainLayout::Flagged => write!(f, "flagged"),
            ChainLayout::Merged => write!(f, "merged"),
        }
    }
}

/// Open the chain event store for the given layout.
pub fn open_chain_store<P: AsRef<Path>>(
    layout: ChainLayout,
    db_path: P,
) -> Result<Arc<dyn ChainStore<i64>>> {
    Ok(match layout {
        ChainLayout::Flagged => Arc::new(SqliteFlaggedChainStore::new(db_path)?),
        ChainLayout::Merged => Arc::new(SqliteMergedChainStore::new(db_path)?),
    })
}
