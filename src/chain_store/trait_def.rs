//! ChainStore trait definition.

use super::models::ChainEvent;
use crate::repo_store::RepoKey;
use anyhow::Result;

/// Trait for word-chain event backends.
///
/// One capability: fetch the qualifying (accepted) events for a repository
/// identity. What "qualifying" means physically is the implementation's
/// business — a flag filter or a dedicated partition.
pub trait ChainStore<K: RepoKey>: Send + Sync {
    /// All qualifying events for the given repository, in storage order.
    ///
    /// A repository with no events yields an empty vec, not an error.
    fn merged_events(&self, repository_id: &K) -> Result<Vec<ChainEvent>>;
}
