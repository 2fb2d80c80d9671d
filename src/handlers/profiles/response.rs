//! Profile response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Sync response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub success: bool,
    pub last_synced: DateTime<Utc>,
    /// Raw recent-challenge entries as returned by HackerRank
    pub submissions: Vec<Value>,
}

/// Verify profile response
#[derive(Debug, Serialize)]
pub struct VerifyProfileResponse {
    pub verified: bool,
    pub username: String,
}
