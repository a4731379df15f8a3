use crate::repo_store::RepoKey;
use serde::Serialize;

/// Single-repository-detail summary: the repository's status plus the latest
/// accepted event and a count of all qualifying events.
///
/// When the repository has no qualifying events the event fields are empty
/// strings and the count is zero; that is a valid summary, not an error.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RepoSummary<K: RepoKey> {
    pub repository_id: K,
    pub repository_name: String,
    pub status: i64,
    pub shiritori_count: usize,
    pub current_word: String,
    pub review_comment: String,
    pub merged_on: String,
}

/// Bulk list-shape row: one qualifying event annotated with its owning
/// repository's name and status.
///
/// Deliberately a different type from [`RepoSummary`]: the two request modes
/// return structurally different records and must not be conflated.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ChainEntryRow {
    pub repository_name: String,
    pub status: i64,
    pub current_word: String,
    pub review_comment: String,
    pub merged_on: String,
}
