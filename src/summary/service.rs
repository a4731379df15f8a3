use super::models::{ChainEntryRow, RepoSummary};
use crate::chain_store::{ChainEvent, ChainStore};
use crate::repo_store::{RepoKey, RepoStore, Repository};
use crate::server::metrics::record_skipped_repository;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// The selector matched no repository. Distinct from a repository that
    /// exists but has zero events, and from a store that could not be
    /// reached.
    #[error("repository not found")]
    RepositoryNotFound,

    /// The catalog or event store could not be queried.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Pick the event with the maximum merge timestamp.
///
/// ISO-8601 timestamps compare lexicographically, so plain string comparison
/// is chronological order for well-formed values. Among events sharing an
/// identical timestamp the first-encountered one wins; the contract leaves
/// tie-break order unspecified. The input is not reordered.
pub fn latest_of(events: &[ChainEvent]) -> Option<&ChainEvent> {
    let mut latest: Option<&ChainEvent> = None;
    for event in events {
        let is_newer = match latest {
            None => true,
            Some(current) => event.merged_on > current.merged_on,
        };
        if is_newer {
            latest = Some(event);
        }
    }
    latest
}

/// Stateless orchestration over the catalog and event stores.
///
/// Generic over the repository identity scheme; it never inspects the key,
/// only hands it back to the stores it was constructed with.
pub struct SummaryService<K: RepoKey> {
    repo_store: Arc<dyn RepoStore<K>>,
    chain_store: Arc<dyn ChainStore<K>>,
}

impl<K: RepoKey> SummaryService<K> {
    pub fn new(repo_store: Arc<dyn RepoStore<K>>, chain_store: Arc<dyn ChainStore<K>>) -> Self {
        SummaryService {
            repo_store,
            chain_store,
        }
    }

    fn events_for(&self, repository: &Repository<K>) -> anyhow::Result<Vec<ChainEvent>> {
        self.chain_store.merged_events(&repository.id)
    }

    /// Single-repository-detail summary.
    ///
    /// Unknown key is [`SummaryError::RepositoryNotFound`]; a store failure
    /// aborts and surfaces. Zero events is a valid summary with empty event
    /// fields.
    pub fn summarize(&self, id: &K) -> Result<RepoSummary<K>, SummaryError> {
        let repository = self
            .repo_store
            .get(id)?
            .ok_or(SummaryError::RepositoryNotFound)?;
        let events = self.events_for(&repository)?;
        let latest = latest_of(&events);

        Ok(RepoSummary {
            repository_id: repository.id.clone(),
            repository_name: repository.name,
            status: repository.status,
            shiritori_count: events.len(),
            current_word: latest.map(|e| e.current_word.clone()).unwrap_or_default(),
            review_comment: latest
                .and_then(|e| e.review_comment.clone())
                .unwrap_or_default(),
            merged_on: latest.map(|e| e.merged_on.clone()).unwrap_or_default(),
        })
    }

    /// Bulk list-shape summary: one row per qualifying event across every
    /// repository, newest-first within each repository.
    ///
    /// A repository whose event fetch fails is skipped with a warning; one
    /// bad repository must not prevent reporting on the rest. Only a failure
    /// to list the catalog itself aborts the call.
    pub fn summarize_all(&self) -> Result<Vec<ChainEntryRow>, SummaryError> {
        let repositories = self.repo_store.list_all()?;

        let mut rows = Vec::new();
        for repository in &repositories {
            let mut events = match self.events_for(repository) {
                Ok(events) => events,
                Err(err) => {
                    warn!(
                        "Skipping repository {} in bulk summary: {}",
                        repository.name, err
                    );
                    record_skipped_repository();
                    continue;
                }
            };
            // Stable sort: encounter order is preserved among equal timestamps.
            events.sort_by(|a, b| b.merged_on.cmp(&a.merged_on));
            rows.extend(events.into_iter().map(|event| ChainEntryRow {
                repository_name: repository.name.clone(),
                status: repository.status,
                current_word: event.current_word,
                review_comment: event.review_comment.unwrap_or_default(),
                merged_on: event.merged_on,
            }));
        }
        Ok(rows)
    }
}
