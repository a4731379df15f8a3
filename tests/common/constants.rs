//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (repository ids, seeded events, etc.),
//! update only this file.

// ============================================================================
// Seeded Repository IDs
// ============================================================================

/// Repository "team-a": two merged events plus one rejected contribution.
pub const REPO_A_ID: i64 = 101;

/// Repository "team-b": two merged events.
pub const REPO_B_ID: i64 = 102;

/// Repository "team-c": present in the catalog but with no chain activity.
pub const REPO_EMPTY_ID: i64 = 103;

/// An id that is not in the catalog.
pub const UNKNOWN_REPO_ID: i64 = 999;

// ============================================================================
// Timeouts
// ============================================================================

/// Timeout for individual HTTP requests
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Maximum time to wait for the test server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Poll interval while waiting for server readiness
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;
