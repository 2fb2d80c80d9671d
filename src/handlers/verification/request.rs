//! Verification request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_SUBMISSION_URL_LENGTH;

/// Verify submission request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifySubmissionRequest {
    #[validate(length(
        min = 1,
        max = MAX_SUBMISSION_URL_LENGTH,
        message = "Please enter your HackerRank submission URL"
    ))]
    pub submission_url: String,

    /// Reference URL of the problem being solved
    pub problem_url: Option<String>,

    /// HackerRank username on file for the student
    #[serde(alias = "hackerRankUsername")]
    pub external_username: Option<String>,
}
