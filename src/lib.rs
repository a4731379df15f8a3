//! Pytori Summary Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod chain_store;
pub mod config;
pub mod repo_store;
pub mod server;
pub mod sqlite_persistence;
pub mod summary;

// Re-export commonly used types for convenience
pub use chain_store::{ChainLayout, ChainStore};
pub use repo_store::{RepoStore, SqliteRepoStore};
pub use server::{run_server, RequestsLoggingLevel};
pub use summary::{SummaryError, SummaryService};
