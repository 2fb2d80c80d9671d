//! Verification handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    services::{VerificationRequest, VerificationService},
    state::AppState,
};

use super::{request::VerifySubmissionRequest, response::VerificationResponse};

/// Decide whether a submission link counts as a solve, without recording it
pub async fn verify_submission(
    State(state): State<AppState>,
    Json(payload): Json<VerifySubmissionRequest>,
) -> AppResult<Json<VerificationResponse>> {
    payload.validate()?;

    let decision = VerificationService::verify(
        state.feed(),
        &state.config().hackerrank,
        VerificationRequest {
            submission_url: &payload.submission_url,
            problem_url: payload.problem_url.as_deref(),
            external_username: payload.external_username.as_deref(),
        },
    )
    .await?;

    tracing::info!(
        status = decision.status.as_str(),
        slug = decision.matched_slug.as_deref().unwrap_or("-"),
        "Submission link verified"
    );

    Ok(Json(decision.into()))
}
