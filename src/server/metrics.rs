use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all summary server metrics
const PREFIX: &str = "pytori";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Summary Metrics
    pub static ref SUMMARY_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_summary_requests_total"), "Summary requests by mode"),
        &["mode"]
    ).expect("Failed to create summary_requests_total metric");

    pub static ref REPOSITORIES_TOTAL: Gauge = Gauge::new(
        format!("{PREFIX}_repositories_total"),
        "Number of repositories in the catalog"
    ).expect("Failed to create repositories_total metric");

    pub static ref SKIPPED_REPOSITORIES_TOTAL: Counter = Counter::new(
        format!("{PREFIX}_skipped_repositories_total"),
        "Repositories skipped during bulk summarization due to event store errors"
    ).expect("Failed to create skipped_repositories_total metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(SUMMARY_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(REPOSITORIES_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(SKIPPED_REPOSITORIES_TOTAL.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize catalog-specific metrics
pub fn init_repository_metrics(num_repositories: usize) {
    REPOSITORIES_TOTAL.set(num_repositories as f64);

    tracing::info!(
        "Repository metrics initialized: {} repositories",
        num_repositories
    );
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record a summary request, mode is either "single" or "bulk"
pub fn record_summary_request(mode: &str) {
    SUMMARY_REQUESTS_TOTAL.with_label_values(&[mode]).inc();
}

/// Record a repository skipped during bulk summarization
pub fn record_skipped_repository() {
    SKIPPED_REPOSITORIES_TOTAL.inc();
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
