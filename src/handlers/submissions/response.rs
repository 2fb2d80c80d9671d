//! Submission response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{handlers::verification::VerificationResponse, models::Submission};

/// Recorded submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub problem_id: Uuid,
    pub lab_id: Uuid,
    pub submission_url: String,
    pub status: String,
    pub verification_method: Option<String>,
    pub proof_file_id: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            problem_id: s.problem_id,
            lab_id: s.lab_id,
            submission_url: s.submission_url,
            status: s.status,
            verification_method: s.verification_method,
            proof_file_id: s.proof_file_id,
            submitted_at: s.submitted_at,
            verified_at: s.verified_at,
        }
    }
}

/// Create submission response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionResponse {
    /// False when the link was rejected and nothing was recorded
    pub success: bool,
    pub verification: VerificationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionResponse>,
}
