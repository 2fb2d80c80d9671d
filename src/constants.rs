//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Prefix all API routes are nested under
pub const API_PREFIX: &str = "/api";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;
pub const DATABASE_ACQUIRE_TIMEOUT_SECONDS: u64 = 5;

/// Unique constraint on `submissions.submission_url_hash`
pub const SUBMISSION_URL_HASH_CONSTRAINT: &str = "submissions_url_hash_key";

/// Unique constraint on `submissions (user_id, problem_id)`
pub const SUBMISSION_USER_PROBLEM_CONSTRAINT: &str = "submissions_user_problem_key";

// =============================================================================
// HACKERRANK DEFAULTS
// =============================================================================

/// Base URL of the HackerRank site and its REST endpoints
pub const DEFAULT_HACKERRANK_BASE_URL: &str = "https://www.hackerrank.com";

/// Host (or parent domain) submission URLs must be served from
pub const DEFAULT_HACKERRANK_ALLOWED_DOMAIN: &str = "hackerrank.com";

/// User agent sent with every outbound request
pub const DEFAULT_HACKERRANK_USER_AGENT: &str = "LabSync/1.0";

/// Number of recent activity entries requested from the feed
pub const DEFAULT_RECENT_CHALLENGES_LIMIT: u32 = 20;

/// Outbound request timeout in seconds
pub const DEFAULT_HACKERRANK_TIMEOUT_SECONDS: u64 = 10;

/// Path segment that precedes the challenge slug in HackerRank URLs
pub const CHALLENGES_SEGMENT: &str = "challenges";

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Stored submission statuses
pub mod submission_statuses {
    pub const SOLVED: &str = "solved";
    pub const PENDING: &str = "pending";
    pub const ATTEMPTED: &str = "attempted";
    pub const NOT_STARTED: &str = "not_started";

    /// All stored statuses
    pub const ALL: &[&str] = &[SOLVED, PENDING, ATTEMPTED, NOT_STARTED];
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum submission URL length
pub const MAX_SUBMISSION_URL_LENGTH: u64 = 1000;

/// Maximum pasted code size in bytes
pub const MAX_CODE_LENGTH: u64 = 100_000;

/// Maximum proof file identifier length
pub const MAX_PROOF_FILE_ID_LENGTH: u64 = 255;

/// External username minimum length
pub const MIN_EXTERNAL_USERNAME_LENGTH: usize = 3;

/// External username maximum length
pub const MAX_EXTERNAL_USERNAME_LENGTH: usize = 30;

/// Request bodies above this size are refused
pub const MAX_REQUEST_BODY_BYTES: usize = 256 * 1024;
