use anyhow::Result;
use std::time::{Duration, Instant};

use tracing::{error, info};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::metrics::{metrics_handler, record_summary_request};
use super::state::*;
use super::{log_requests, RequestsLoggingLevel, ServerConfig};
use crate::summary::SummaryError;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

#[derive(Deserialize, Debug)]
struct SummaryQuery {
    pub repository_id: Option<RepoId>,
}

/// `GET /v1/summary` with a `repository_id` query parameter returns the
/// detailed summary of that repository, without it the listing of all
/// repositories with merged chain activity.
async fn get_summary(
    State(summary_service): State<GuardedSummaryService>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    match query.repository_id {
        Some(repository_id) => {
            record_summary_request("single");
            match summary_service.summarize(&repository_id) {
                Ok(summary) => Json(summary).into_response(),
                Err(SummaryError::RepositoryNotFound) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Repository not found" })),
                )
                    .into_response(),
                Err(SummaryError::Store(err)) => {
                    error!("Failed to summarize repository {}: {:#}", repository_id, err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "Failed to get summary" })),
                    )
                        .into_response()
                }
            }
        }
        None => {
            record_summary_request("bulk");
            match summary_service.summarize_all() {
                Ok(rows) => Json(rows).into_response(),
                Err(err) => {
                    error!("Failed to list repository summaries: {:#}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "Failed to get summaries" })),
                    )
                        .into_response()
                }
            }
        }
    }
}

pub fn make_app(config: ServerConfig, summary_service: GuardedSummaryService) -> Router {
    let state = ServerState {
        config,
        start_time: Instant::now(),
        summary_service,
        hash: env!("GIT_HASH").to_owned(),
    };

    Router::new()
        .route("/", get(home))
        .route("/v1/summary", get(get_summary))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    summary_service: GuardedSummaryService,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    metrics_port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, summary_service);

    let metrics_app = Router::new().route("/metrics", get(metrics_handler));
    let metrics_listener =
        tokio::net::TcpListener::bind(format!("127.0.0.1:{}", metrics_port)).await?;
    tokio::spawn(async move {
        info!("Metrics server listening on port {}", metrics_port);
        if let Err(err) = axum::serve(metrics_listener, metrics_app).await {
            error!("Metrics server terminated: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Server listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
