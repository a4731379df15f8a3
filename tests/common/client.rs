//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for the summary-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/summary?repository_id={id}
    pub async fn get_summary(&self, repository_id: i64) -> Response {
        self.client
            .get(format!(
                "{}/v1/summary?repository_id={}",
                self.base_url, repository_id
            ))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/summary (listing of all repositories)
    pub async fn get_summary_listing(&self) -> Response {
        self.client
            .get(format!("{}/v1/summary", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/summary with a raw (possibly malformed) repository_id value
    pub async fn get_summary_raw(&self, repository_id: &str) -> Response {
        self.client
            .get(format!(
                "{}/v1/summary?repository_id={}",
                self.base_url, repository_id
            ))
            .send()
            .await
            .expect("Request failed")
    }
}
