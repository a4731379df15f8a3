//! Aggregation of repository status and word-chain history.
//!
//! This is the core of the server: given the repository catalog and the
//! per-repository event history, compute the "latest state" summaries the
//! endpoint reports. Everything in here is a pure orchestration/selection
//! layer over the two store seams; nothing is persisted.

mod models;
mod service;

pub use models::{ChainEntryRow, RepoSummary};
pub use service::{latest_of, SummaryError, SummaryService};
