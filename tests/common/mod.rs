//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestClient, TestServer, REPO_A_ID};
//! use pytori_summary_server::chain_store::ChainLayout;
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_summary() {
//!     let server = TestServer::spawn(ChainLayout::Flagged).await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_summary(REPO_A_ID).await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;
