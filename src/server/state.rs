use axum::extract::FromRef;

use crate::summary::SummaryService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// Identity scheme bound for the shipped deployment: numeric repository ids.
/// Name-keyed deployments bind `String` here instead.
pub type RepoId = i64;

pub type GuardedSummaryService = Arc<SummaryService<RepoId>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub summary_service: GuardedSummaryService,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedSummaryService {
    fn from_ref(input: &ServerState) -> Self {
        input.summary_service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
