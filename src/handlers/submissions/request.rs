//! Submission request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_CODE_LENGTH, MAX_PROOF_FILE_ID_LENGTH, MAX_SUBMISSION_URL_LENGTH};

/// Create submission request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub user_id: Uuid,

    pub problem_id: Uuid,

    #[validate(length(
        min = 1,
        max = MAX_SUBMISSION_URL_LENGTH,
        message = "Please enter your HackerRank submission URL"
    ))]
    pub submission_url: String,

    /// Optional copy of the solution source
    #[validate(length(max = MAX_CODE_LENGTH))]
    pub code: Option<String>,

    /// Reference to an uploaded screenshot
    #[validate(length(max = MAX_PROOF_FILE_ID_LENGTH))]
    pub proof_file_id: Option<String>,
}
