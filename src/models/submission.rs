//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::submission_statuses;

use super::VerificationMethod;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub lab_id: Uuid,
    pub submission_url: String,
    pub submission_url_hash: String,
    pub status: String,
    pub code: Option<String>,
    pub proof_file_id: Option<String>,
    pub verification_method: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

/// Submission status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Solved,
    Pending,
    Attempted,
    NotStarted,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solved => submission_statuses::SOLVED,
            Self::Pending => submission_statuses::PENDING,
            Self::Attempted => submission_statuses::ATTEMPTED,
            Self::NotStarted => submission_statuses::NOT_STARTED,
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            submission_statuses::SOLVED => Some(Self::Solved),
            submission_statuses::PENDING => Some(Self::Pending),
            submission_statuses::ATTEMPTED => Some(Self::Attempted),
            submission_statuses::NOT_STARTED => Some(Self::NotStarted),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field values written on insert or on overwrite of an existing submission
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub lab_id: Uuid,
    pub submission_url: String,
    pub submission_url_hash: String,
    pub status: SubmissionStatus,
    pub code: Option<String>,
    pub proof_file_id: Option<String>,
    pub verification_method: Option<VerificationMethod>,
    pub verified_at: Option<DateTime<Utc>>,
}
