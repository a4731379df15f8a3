//! RepoStore trait definition.

use super::models::{RepoKey, Repository};
use anyhow::Result;

/// Trait for repository catalog backends.
///
/// `Ok(None)` means the identifier does not exist; `Err` means the lookup
/// could not be performed at all. Callers rely on that distinction.
pub trait RepoStore<K: RepoKey>: Send + Sync {
    /// Get a single repository by its key.
    fn get(&self, id: &K) -> Result<Option<Repository<K>>>;

    /// Get all known repositories, in unspecified order.
    ///
    /// An empty catalog is not an error.
    fn list_all(&self) -> Result<Vec<Repository<K>>>;
}
