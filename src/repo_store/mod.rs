//! Repository catalog storage.
//!
//! Read side of the repository catalog: who the repositories are, what their
//! status flag is. Records are created and mutated by an external system;
//! this server only ever reads them (the seed binary and test fixtures use
//! the concrete store's insert method directly).

mod models;
mod schema;
mod sqlite_store;
mod trait_def;

pub use models::{RepoKey, Repository};
pub use sqlite_store::SqliteRepoStore;
pub use trait_def::RepoStore;
